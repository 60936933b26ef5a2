pub mod event_draft;
pub mod event_record;
