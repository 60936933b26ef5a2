// Partitioning of the events collection into the four views the front end offers.
//
// Purpose
// - Derive upcoming, past, cancelled and confirmed lists from one collection and one instant.
// - Filter any of them by a case-insensitive title search.
//
// Rules
// - Only confirmed records appear in any partition.
// - A date stands for its midnight UTC; an event is upcoming while that instant is not before `now`.
// - Records without a date cannot be placed in time and are left out of upcoming and past.
// - Each list is ordered by date, then creation timestamp, then id; undated and unstamped last.

use crate::modules::events::core::record::{EventCollection, EventRecord};
use chrono::{DateTime, NaiveTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    #[default]
    Upcoming,
    Past,
    Cancelled,
    Confirmed,
}

impl Partition {
    pub const ALL: [Partition; 4] = [
        Partition::Upcoming,
        Partition::Past,
        Partition::Cancelled,
        Partition::Confirmed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Partition::Upcoming => "upcoming",
            Partition::Past => "past",
            Partition::Cancelled => "cancelled",
            Partition::Confirmed => "confirmed",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown view `{0}`, expected one of upcoming, past, cancelled, confirmed")]
pub struct UnknownPartition(pub String);

impl FromStr for Partition {
    type Err = UnknownPartition;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Partition::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| UnknownPartition(raw.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partitions {
    pub upcoming: Vec<EventRecord>,
    pub past: Vec<EventRecord>,
    pub cancelled: Vec<EventRecord>,
    pub confirmed: Vec<EventRecord>,
}

impl Partitions {
    pub fn get(&self, partition: Partition) -> &[EventRecord] {
        match partition {
            Partition::Upcoming => &self.upcoming,
            Partition::Past => &self.past,
            Partition::Cancelled => &self.cancelled,
            Partition::Confirmed => &self.confirmed,
        }
    }

    pub fn into_partition(self, partition: Partition) -> Vec<EventRecord> {
        match partition {
            Partition::Upcoming => self.upcoming,
            Partition::Past => self.past,
            Partition::Cancelled => self.cancelled,
            Partition::Confirmed => self.confirmed,
        }
    }
}

fn chronological(a: &EventRecord, b: &EventRecord) -> Ordering {
    let key = |r: &EventRecord| (r.date.is_none(), r.date, r.timestamp.is_none(), r.timestamp);
    key(a).cmp(&key(b)).then_with(|| a.id.cmp(&b.id))
}

pub fn title_matches(record: &EventRecord, term: &str) -> bool {
    term.is_empty() || record.title.to_lowercase().contains(&term.to_lowercase())
}

/// Keeps the records whose title contains `term`; an empty term keeps everything.
pub fn filter_by_title(records: &[EventRecord], term: &str) -> Vec<EventRecord> {
    records
        .iter()
        .filter(|r| title_matches(r, term))
        .cloned()
        .collect()
}

pub fn classify(
    collection: &EventCollection,
    now: DateTime<Utc>,
    search: Option<&str>,
) -> Partitions {
    let term = search.unwrap_or_default();

    let mut ordered: Vec<&EventRecord> = collection
        .values()
        .filter(|r| r.is_confirmed && title_matches(r, term))
        .collect();
    ordered.sort_by(|a, b| chronological(a, b));

    let mut partitions = Partitions::default();
    for record in ordered {
        if record.is_cancelled {
            partitions.cancelled.push(record.clone());
            continue;
        }
        partitions.confirmed.push(record.clone());
        match record.date {
            Some(date) if date.and_time(NaiveTime::MIN).and_utc() >= now => {
                partitions.upcoming.push(record.clone())
            }
            Some(_) => partitions.past.push(record.clone()),
            None => {}
        }
    }
    partitions
}
