// Shared test fixture for the EventDraft command.

use crate::modules::events::core::draft::EventDraft;
use std::fs;

pub const EVENT_DRAFT_JSON: &str = "./src/tests/fixtures/json/event_draft.json";

pub struct EventDraftBuilder {
    inner: EventDraft,
}

impl Default for EventDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventDraftBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(EVENT_DRAFT_JSON).unwrap();
        let inner: EventDraft = serde_json::from_str(&json_str).unwrap();
        Self { inner }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn time(mut self, v: impl Into<String>) -> Self {
        self.inner.time = v.into();
        self
    }

    pub fn category(mut self, v: impl Into<String>) -> Self {
        self.inner.category = v.into();
        self
    }

    pub fn contact_number(mut self, v: impl Into<String>) -> Self {
        self.inner.contact_number = v.into();
        self
    }

    pub fn people_attending(mut self, v: Option<i64>) -> Self {
        self.inner.people_attending = v;
        self
    }

    pub fn build(self) -> EventDraft {
        self.inner
    }
}

#[cfg(test)]
mod event_draft_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = EventDraftBuilder::default().build();
        assert_eq!(built.title, "Intro to Rust Workshop");
        assert_eq!(built.date, "2030-06-15");
        assert_eq!(built.time, "18:30");
        assert_eq!(built.category, "workshop");
        assert_eq!(built.organizer_name, "Ada Lovelace");
        assert_eq!(built.contact_number, "9876543210");
        assert_eq!(built.people_attending, Some(25));
    }

    #[rstest]
    fn setters_override_fields() {
        let built = EventDraftBuilder::new()
            .title("Jazz night")
            .date("2030-07-01")
            .time("21:00")
            .category("concert")
            .contact_number("12345")
            .people_attending(None)
            .build();
        assert_eq!(built.title, "Jazz night");
        assert_eq!(built.date, "2030-07-01");
        assert_eq!(built.time, "21:00");
        assert_eq!(built.category, "concert");
        assert_eq!(built.contact_number, "12345");
        assert_eq!(built.people_attending, None);
    }
}
