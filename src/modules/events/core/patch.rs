// A single-field change to one stored event.
//
// Every lifecycle transition produces exactly one patch; the patch knows both its
// store representation and how to apply itself to an in-memory record.

use crate::modules::events::core::record::EventRecord;
use crate::shared::infrastructure::event_store::Fields;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EventPatch {
    CheckIn { at: DateTime<Utc> },
    CheckOut { at: DateTime<Utc> },
    Cancel,
    AttendeeCount { count: u32 },
}

impl EventPatch {
    pub fn name(&self) -> &'static str {
        match self {
            EventPatch::CheckIn { .. } => "check_in",
            EventPatch::CheckOut { .. } => "check_out",
            EventPatch::Cancel => "cancel",
            EventPatch::AttendeeCount { .. } => "edit_attendee_count",
        }
    }

    pub fn to_fields(&self) -> Fields {
        let (key, value) = match self {
            EventPatch::CheckIn { at } => ("checkInTime", Value::String(at.to_rfc3339())),
            EventPatch::CheckOut { at } => ("checkOutTime", Value::String(at.to_rfc3339())),
            EventPatch::Cancel => ("isCancelled", Value::Bool(true)),
            EventPatch::AttendeeCount { count } => ("peopleAttending", Value::from(*count)),
        };
        let mut fields = Fields::new();
        fields.insert(key.to_string(), value);
        fields
    }

    pub fn apply_to(&self, record: &mut EventRecord) {
        match *self {
            EventPatch::CheckIn { at } => record.check_in_time = Some(at),
            EventPatch::CheckOut { at } => record.check_out_time = Some(at),
            EventPatch::Cancel => record.is_cancelled = true,
            EventPatch::AttendeeCount { count } => record.people_attending = Some(count),
        }
    }
}
