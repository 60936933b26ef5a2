// Calendar view of the collection: one all-day entry per dated event.
//
// Unlike the partitions, the calendar shows every dated record, cancelled or unconfirmed.

use crate::modules::events::core::record::{EventCollection, EventRecord};
use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub id: String,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub time: Option<NaiveTime>,
    pub location: String,
    pub description: String,
    pub is_cancelled: bool,
}

impl CalendarEntry {
    fn from_record(record: &EventRecord) -> Option<Self> {
        let date = record.date?;
        Some(Self {
            id: record.id.clone(),
            title: record.title.clone(),
            start: date,
            end: date,
            time: record.time,
            location: record.location.clone(),
            description: record.description.clone(),
            is_cancelled: record.is_cancelled,
        })
    }
}

pub fn calendar_entries(collection: &EventCollection) -> Vec<CalendarEntry> {
    let mut entries: Vec<CalendarEntry> = collection
        .values()
        .filter_map(CalendarEntry::from_record)
        .collect();
    entries.sort_by(|a, b| {
        (a.start, a.time.is_none(), a.time)
            .cmp(&(b.start, b.time.is_none(), b.time))
            .then_with(|| a.id.cmp(&b.id))
    });
    entries
}

/// Entries falling in one calendar month; an impossible month yields nothing.
pub fn month_entries(collection: &EventCollection, year: i32, month: u32) -> Vec<CalendarEntry> {
    if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
        return Vec::new();
    }
    calendar_entries(collection)
        .into_iter()
        .filter(|e| e.start.year() == year && e.start.month() == month)
        .collect()
}
