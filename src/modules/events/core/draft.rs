// Command data for creating an event, and the check that turns it into a storable record.
//
// Purpose
// - Carry the form input exactly as entered (strings, optional count).
// - Validate every field in one pass so the caller can report all problems at once.
//
// Boundaries
// - Independent of transport; HTTP and GraphQL both build an EventDraft.

use crate::modules::events::core::record::{Category, EventRecord};
use crate::modules::events::core::validation::{
    CONTACT_NUMBER_DIGITS, Field, FieldIssue, ValidationError, is_valid_contact_number,
    validate_attendee_count,
};
use crate::modules::events::core::wire::{parse_date, parse_time};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub category: String,
    pub organizer_name: String,
    pub contact_number: String,
    pub people_attending: Option<i64>,
}

/// A draft that passed validation; every required field is present and typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub description: String,
    pub category: Category,
    pub organizer_name: String,
    pub contact_number: String,
    pub people_attending: u32,
}

impl NewEvent {
    /// The record as first written: confirmed, not cancelled, stamped with the creation time.
    pub fn into_record(self, created_at: DateTime<Utc>) -> EventRecord {
        EventRecord {
            id: String::new(),
            title: self.title,
            date: Some(self.date),
            time: Some(self.time),
            location: self.location,
            description: self.description,
            category: Some(self.category),
            organizer_name: self.organizer_name,
            contact_number: self.contact_number,
            people_attending: Some(self.people_attending),
            is_confirmed: true,
            is_cancelled: false,
            check_in_time: None,
            check_out_time: None,
            timestamp: Some(created_at),
        }
    }
}

fn required<'a>(issues: &mut Vec<FieldIssue>, field: Field, raw: &'a str) -> Option<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        issues.push(FieldIssue::Missing { field });
        return None;
    }
    Some(trimmed)
}

fn invalid(issues: &mut Vec<FieldIssue>, field: Field, reason: impl Into<String>) {
    issues.push(FieldIssue::Invalid {
        field,
        reason: reason.into(),
    });
}

pub fn validate_draft(draft: &EventDraft) -> Result<NewEvent, ValidationError> {
    let mut issues = Vec::new();

    let title = required(&mut issues, Field::Title, &draft.title);

    let date = required(&mut issues, Field::Date, &draft.date).and_then(|raw| {
        let parsed = parse_date(raw);
        if parsed.is_none() {
            invalid(&mut issues, Field::Date, "must be a YYYY-MM-DD date");
        }
        parsed
    });

    let time = required(&mut issues, Field::Time, &draft.time).and_then(|raw| {
        let parsed = parse_time(raw);
        if parsed.is_none() {
            invalid(&mut issues, Field::Time, "must be an HH:MM time");
        }
        parsed
    });

    let location = required(&mut issues, Field::Location, &draft.location);
    let description = required(&mut issues, Field::Description, &draft.description);

    let category = required(&mut issues, Field::Category, &draft.category).and_then(|raw| {
        match raw.parse::<Category>() {
            Ok(category) => Some(category),
            Err(_) => {
                invalid(
                    &mut issues,
                    Field::Category,
                    "must be one of workshop, conference, concert",
                );
                None
            }
        }
    });

    let organizer_name = required(&mut issues, Field::OrganizerName, &draft.organizer_name);

    let contact_number = if draft.contact_number.is_empty() {
        issues.push(FieldIssue::Missing {
            field: Field::ContactNumber,
        });
        None
    } else if !is_valid_contact_number(&draft.contact_number) {
        invalid(
            &mut issues,
            Field::ContactNumber,
            format!("must be exactly {CONTACT_NUMBER_DIGITS} digits"),
        );
        None
    } else {
        Some(draft.contact_number.as_str())
    };

    let people_attending = match draft.people_attending {
        None => {
            issues.push(FieldIssue::Missing {
                field: Field::PeopleAttending,
            });
            None
        }
        Some(count) => match validate_attendee_count(count) {
            Ok(count) => Some(count),
            Err(issue) => {
                issues.push(issue);
                None
            }
        },
    };

    match (
        title,
        date,
        time,
        location,
        description,
        category,
        organizer_name,
        contact_number,
        people_attending,
    ) {
        (
            Some(title),
            Some(date),
            Some(time),
            Some(location),
            Some(description),
            Some(category),
            Some(organizer_name),
            Some(contact_number),
            Some(people_attending),
        ) if issues.is_empty() => Ok(NewEvent {
            title: title.to_string(),
            date,
            time,
            location: location.to_string(),
            description: description.to_string(),
            category,
            organizer_name: organizer_name.to_string(),
            contact_number: contact_number.to_string(),
            people_attending,
        }),
        _ => Err(ValidationError { issues }),
    }
}
