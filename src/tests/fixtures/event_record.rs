// Shared test fixture for decoded event records.

use crate::modules::events::core::record::{Category, EventCollection, EventRecord};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde_json::Value;

pub struct EventRecordBuilder {
    inner: EventRecord,
}

impl Default for EventRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventRecordBuilder {
    pub fn new() -> Self {
        Self {
            inner: EventRecord {
                id: "ev-fixed-0001".to_string(),
                title: "Intro to Rust Workshop".to_string(),
                date: NaiveDate::from_ymd_opt(2030, 6, 20),
                time: NaiveTime::from_hms_opt(18, 30, 0),
                location: "Community Hall, Room 2".to_string(),
                description: "Hands-on session covering ownership and borrowing.".to_string(),
                category: Some(Category::Workshop),
                organizer_name: "Ada Lovelace".to_string(),
                contact_number: "9876543210".to_string(),
                people_attending: Some(25),
                is_confirmed: true,
                is_cancelled: false,
                check_in_time: None,
                check_out_time: None,
                timestamp: Some(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = Some(v);
        self
    }

    pub fn no_date(mut self) -> Self {
        self.inner.date = None;
        self
    }

    pub fn time(mut self, v: NaiveTime) -> Self {
        self.inner.time = Some(v);
        self
    }

    pub fn people_attending(mut self, v: u32) -> Self {
        self.inner.people_attending = Some(v);
        self
    }

    pub fn cancelled(mut self) -> Self {
        self.inner.is_cancelled = true;
        self
    }

    pub fn unconfirmed(mut self) -> Self {
        self.inner.is_confirmed = false;
        self
    }

    pub fn checked_in_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.check_in_time = Some(v);
        self
    }

    pub fn checked_out_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.check_out_time = Some(v);
        self
    }

    pub fn timestamp(mut self, v: DateTime<Utc>) -> Self {
        self.inner.timestamp = Some(v);
        self
    }

    pub fn no_timestamp(mut self) -> Self {
        self.inner.timestamp = None;
        self
    }

    pub fn build(self) -> EventRecord {
        self.inner
    }

    /// The record as the store holds it, without the id.
    pub fn stored(self) -> Value {
        serde_json::to_value(self.inner).unwrap()
    }
}

pub fn collection_of(records: Vec<EventRecord>) -> EventCollection {
    records.into_iter().map(|r| (r.id.clone(), r)).collect()
}

#[cfg(test)]
mod event_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_round_trip_through_the_stored_shape() {
        let record = EventRecordBuilder::new().id("ev-7").build();
        let stored = EventRecordBuilder::new().id("ev-7").stored();
        assert_eq!(EventRecord::from_stored("ev-7", &stored), Ok(record));
    }

    #[rstest]
    fn it_should_key_collections_by_id() {
        let collection = collection_of(vec![
            EventRecordBuilder::new().id("a").build(),
            EventRecordBuilder::new().id("b").build(),
        ]);
        assert_eq!(collection.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
