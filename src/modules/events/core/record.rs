// EventRecord is the typed form of one entry in the events collection.
//
// Purpose
// - Replace the loosely shaped stored objects with an explicit schema.
// - Validate at the store boundary so malformed entries are rejected instead of leaking
//   missing fields into classification.
//
// Boundaries
// - No input or output here; decoding works on values already fetched from the store.

use crate::modules::events::core::wire;
use crate::shared::infrastructure::event_store::{Fields, Snapshot, StoreError};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Decoded collection keyed by record id.
pub type EventCollection = BTreeMap<String, EventRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Workshop,
    Conference,
    Concert,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Workshop => "workshop",
            Category::Conference => "conference",
            Category::Concert => "concert",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "workshop" => Ok(Category::Workshop),
            "conference" => Ok(Category::Conference),
            "concert" => Ok(Category::Concert),
            _ => Err(UnknownCategory(raw.to_string())),
        }
    }
}

fn category_or_blank<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Category>, D::Error> {
    match wire::non_blank(Option::<String>::deserialize(d)?) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(skip)]
    pub id: String,
    pub title: String,
    #[serde(
        default,
        with = "wire::optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<NaiveDate>,
    #[serde(
        default,
        with = "wire::optional_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<NaiveTime>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "category_or_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<Category>,
    #[serde(default)]
    pub organizer_name: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people_attending: Option<u32>,
    #[serde(default)]
    pub is_confirmed: bool,
    #[serde(default)]
    pub is_cancelled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record {id} could not be decoded: {reason}")]
    Undecodable { id: String, reason: String },

    #[error("record {id} could not be encoded: {reason}")]
    Unencodable { id: String, reason: String },

    #[error("record {id} violates an invariant: {reason}")]
    Invariant { id: String, reason: &'static str },
}

impl From<RecordError> for StoreError {
    fn from(error: RecordError) -> Self {
        match error {
            RecordError::Undecodable { id, reason } | RecordError::Unencodable { id, reason } => {
                StoreError::Malformed { id, reason }
            }
            RecordError::Invariant { id, reason } => StoreError::Malformed {
                id,
                reason: reason.to_string(),
            },
        }
    }
}

impl EventRecord {
    /// The flat object written to the store; the id is the key and is left out.
    pub fn to_stored(&self) -> Result<Fields, RecordError> {
        let unencodable = |reason: String| RecordError::Unencodable {
            id: self.id.clone(),
            reason,
        };
        match serde_json::to_value(self).map_err(|e| unencodable(e.to_string()))? {
            Value::Object(fields) => Ok(fields),
            other => Err(unencodable(format!("expected an object, got {other}"))),
        }
    }

    pub fn from_stored(id: &str, value: &Value) -> Result<Self, RecordError> {
        let mut record: EventRecord =
            serde_json::from_value(value.clone()).map_err(|e| RecordError::Undecodable {
                id: id.to_string(),
                reason: e.to_string(),
            })?;
        record.id = id.to_string();
        record.check_invariants()?;
        Ok(record)
    }

    fn check_invariants(&self) -> Result<(), RecordError> {
        let violation = |reason| {
            Err(RecordError::Invariant {
                id: self.id.clone(),
                reason,
            })
        };
        if self.title.trim().is_empty() {
            return violation("title is empty");
        }
        if self.people_attending == Some(0) {
            return violation("peopleAttending must be at least 1");
        }
        match (self.check_in_time, self.check_out_time) {
            (None, Some(_)) => violation("checked out without checking in"),
            (Some(check_in), Some(check_out)) if check_out < check_in => {
                violation("checked out before checking in")
            }
            _ => Ok(()),
        }
    }

    pub fn is_checked_in(&self) -> bool {
        self.check_in_time.is_some()
    }

    pub fn is_checked_out(&self) -> bool {
        self.check_out_time.is_some()
    }
}

/// Decodes every stored entry, splitting the result into valid records and rejections.
pub fn decode_snapshot(snapshot: &Snapshot) -> (EventCollection, Vec<RecordError>) {
    let mut collection = EventCollection::new();
    let mut rejected = Vec::new();
    for (id, value) in snapshot {
        match EventRecord::from_stored(id, value) {
            Ok(record) => {
                collection.insert(id.clone(), record);
            }
            Err(e) => rejected.push(e),
        }
    }
    (collection, rejected)
}
