// Pure decision functions for the lifecycle transitions of a single event.
//
// Responsibilities
// - Check a transition's preconditions against the current record.
// - Produce the patch to write, or the reason the transition is not allowed.
// - Never perform input or output.
//
// Rules
// - A cancelled event accepts no check-in, check-out or cancel.
// - Check-in and check-out are each set once; check-out needs a prior check-in.
// - Cancelling is refused once the event has been checked in.

use crate::modules::events::core::patch::EventPatch;
use crate::modules::events::core::record::EventRecord;
use crate::modules::events::core::validation::{FieldIssue, validate_attendee_count};
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("event is cancelled")]
    Cancelled,

    #[error("event is already checked in")]
    AlreadyCheckedIn,

    #[error("event is not checked in yet")]
    NotCheckedIn,

    #[error("event is already checked out")]
    AlreadyCheckedOut,

    #[error("event is already cancelled")]
    AlreadyCancelled,

    #[error("event cannot be cancelled after check-in")]
    CheckedIn,

    #[error("check-out time would precede check-in time")]
    ClockSkew,
}

pub fn decide_check_in(
    record: &EventRecord,
    now: DateTime<Utc>,
) -> Result<EventPatch, TransitionError> {
    if record.is_cancelled {
        return Err(TransitionError::Cancelled);
    }
    if record.is_checked_in() {
        return Err(TransitionError::AlreadyCheckedIn);
    }
    Ok(EventPatch::CheckIn { at: now })
}

pub fn decide_check_out(
    record: &EventRecord,
    now: DateTime<Utc>,
) -> Result<EventPatch, TransitionError> {
    if record.is_cancelled {
        return Err(TransitionError::Cancelled);
    }
    let Some(checked_in_at) = record.check_in_time else {
        return Err(TransitionError::NotCheckedIn);
    };
    if record.is_checked_out() {
        return Err(TransitionError::AlreadyCheckedOut);
    }
    if now < checked_in_at {
        return Err(TransitionError::ClockSkew);
    }
    Ok(EventPatch::CheckOut { at: now })
}

pub fn decide_cancel(record: &EventRecord) -> Result<EventPatch, TransitionError> {
    if record.is_cancelled {
        return Err(TransitionError::AlreadyCancelled);
    }
    if record.is_checked_in() {
        return Err(TransitionError::CheckedIn);
    }
    Ok(EventPatch::Cancel)
}

/// Attendee edits are not a guarded transition; only the count itself is checked.
pub fn decide_attendee_count(count: i64) -> Result<EventPatch, FieldIssue> {
    validate_attendee_count(count).map(|count| EventPatch::AttendeeCount { count })
}
