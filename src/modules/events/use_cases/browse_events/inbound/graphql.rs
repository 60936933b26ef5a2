use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::events::core::calendar::CalendarEntry;
use crate::modules::events::core::classify::Partition;
use crate::modules::events::core::record::EventRecord;
use crate::modules::events::core::wire::{DATE_FORMAT, TIME_FORMAT};
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlEvent {
    pub id: ID,
    pub title: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: String,
    pub description: String,
    pub category: Option<String>,
    pub organizer_name: String,
    pub contact_number: String,
    pub people_attending: Option<u32>,
    pub is_confirmed: bool,
    pub is_cancelled: bool,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
}

impl From<EventRecord> for GqlEvent {
    fn from(r: EventRecord) -> Self {
        Self {
            id: ID(r.id),
            title: r.title,
            date: r.date.map(|d| d.format(DATE_FORMAT).to_string()),
            time: r.time.map(|t| t.format(TIME_FORMAT).to_string()),
            location: r.location,
            description: r.description,
            category: r.category.map(|c| c.as_str().to_string()),
            organizer_name: r.organizer_name,
            contact_number: r.contact_number,
            people_attending: r.people_attending,
            is_confirmed: r.is_confirmed,
            is_cancelled: r.is_cancelled,
            check_in_time: r.check_in_time.map(|t| t.to_rfc3339()),
            check_out_time: r.check_out_time.map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlCalendarEntry {
    pub id: ID,
    pub title: String,
    pub start: String,
    pub end: String,
    pub time: Option<String>,
    pub location: String,
    pub description: String,
    pub is_cancelled: bool,
}

impl From<CalendarEntry> for GqlCalendarEntry {
    fn from(e: CalendarEntry) -> Self {
        Self {
            id: ID(e.id),
            title: e.title,
            start: e.start.format(DATE_FORMAT).to_string(),
            end: e.end.format(DATE_FORMAT).to_string(),
            time: e.time.map(|t| t.format(TIME_FORMAT).to_string()),
            location: e.location,
            description: e.description,
            is_cancelled: e.is_cancelled,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Lists one partition of the confirmed events; `view` defaults to upcoming.
    async fn events(
        &self,
        context: &Context<'_>,
        view: Option<String>,
        search: Option<String>,
    ) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let partition = match view {
            Some(v) => v
                .parse::<Partition>()
                .map_err(|e| async_graphql::Error::new(e.to_string()))?,
            None => Partition::default(),
        };

        let events = state
            .feed
            .list(partition, state.clock.now(), search.as_deref())
            .await;
        Ok(events.into_iter().map(GqlEvent::from).collect())
    }

    async fn calendar(
        &self,
        context: &Context<'_>,
        year: Option<i32>,
        month: Option<u32>,
    ) -> GqlResult<Vec<GqlCalendarEntry>> {
        let state = context.data_unchecked::<AppState>();
        let month = match (year, month) {
            (Some(y), Some(m)) => Some((y, m)),
            (None, None) => None,
            _ => return Err(async_graphql::Error::new("year and month go together")),
        };
        let entries = state.feed.calendar(month).await;
        Ok(entries.into_iter().map(GqlCalendarEntry::from).collect())
    }
}
