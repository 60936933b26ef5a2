// Field-level validation shared by event creation and attendee edits.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub const CONTACT_NUMBER_DIGITS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Title,
    Date,
    Time,
    Location,
    Description,
    Category,
    OrganizerName,
    ContactNumber,
    PeopleAttending,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Date => "date",
            Field::Time => "time",
            Field::Location => "location",
            Field::Description => "description",
            Field::Category => "category",
            Field::OrganizerName => "organizerName",
            Field::ContactNumber => "contactNumber",
            Field::PeopleAttending => "peopleAttending",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldIssue {
    Missing { field: Field },
    Invalid { field: Field, reason: String },
}

impl FieldIssue {
    pub fn field(&self) -> Field {
        match self {
            FieldIssue::Missing { field } | FieldIssue::Invalid { field, .. } => *field,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::Missing { field } => write!(f, "{field} is required"),
            FieldIssue::Invalid { field, reason } => write!(f, "{field} {reason}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", join_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn single(issue: FieldIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    pub fn fields(&self) -> Vec<Field> {
        self.issues.iter().map(FieldIssue::field).collect()
    }
}

impl From<FieldIssue> for ValidationError {
    fn from(issue: FieldIssue) -> Self {
        Self::single(issue)
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Exactly ten ASCII digits, nothing else; no trimming or separators.
pub fn is_valid_contact_number(raw: &str) -> bool {
    raw.len() == CONTACT_NUMBER_DIGITS && raw.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_attendee_count(count: i64) -> Result<u32, FieldIssue> {
    if count < 1 {
        return Err(FieldIssue::Invalid {
            field: Field::PeopleAttending,
            reason: format!("must be at least 1, got {count}"),
        });
    }
    u32::try_from(count).map_err(|_| FieldIssue::Invalid {
        field: Field::PeopleAttending,
        reason: format!("is too large: {count}"),
    })
}
