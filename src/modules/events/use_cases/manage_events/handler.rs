// Lifecycle command handler orchestrates every write to the events collection.
//
// Responsibilities
// - Validate input before anything is sent to the store.
// - Load the current record from the store and let the pure deciders check preconditions.
// - Issue exactly one partial update per transition and report what was written.

use crate::modules::events::application::errors::ApplicationError;
use crate::modules::events::core::draft::{EventDraft, validate_draft};
use crate::modules::events::core::patch::EventPatch;
use crate::modules::events::core::record::EventRecord;
use crate::modules::events::core::transitions::{
    decide_attendee_count, decide_cancel, decide_check_in, decide_check_out,
};
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::event_store::{EventStoreClient, StoreError};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// What a successful transition wrote, so callers can reflect it before the next snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Applied {
    pub id: String,
    pub patch: EventPatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    CheckIn,
    CheckOut,
    Cancel,
    EditAttendeeCount(i64),
}

pub struct LifecycleMutator<TStore>
where
    TStore: EventStoreClient + 'static,
{
    collection: String,
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
}

impl<TStore> LifecycleMutator<TStore>
where
    TStore: EventStoreClient + 'static,
{
    pub fn new(collection: impl Into<String>, store: Arc<TStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            collection: collection.into(),
            store,
            clock,
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub async fn create(&self, draft: &EventDraft) -> Result<String, ApplicationError> {
        let event = validate_draft(draft)
            .inspect_err(|error| debug!(%error, "event creation rejected"))?;
        let record = event.into_record(self.clock.now());
        let fields = record.to_stored().map_err(StoreError::from)?;
        let id = self.store.create(&self.collection, fields).await?;
        info!(event_id = %id, title = %record.title, "event created");
        Ok(id)
    }

    pub async fn check_in(&self, id: &str) -> Result<Applied, ApplicationError> {
        let record = self.load(id).await?;
        let patch = decide_check_in(&record, self.clock.now())
            .inspect_err(|reason| debug!(event_id = id, %reason, "check-in rejected"))?;
        self.write(id, patch).await
    }

    pub async fn check_out(&self, id: &str) -> Result<Applied, ApplicationError> {
        let record = self.load(id).await?;
        let patch = decide_check_out(&record, self.clock.now())
            .inspect_err(|reason| debug!(event_id = id, %reason, "check-out rejected"))?;
        self.write(id, patch).await
    }

    pub async fn cancel(&self, id: &str) -> Result<Applied, ApplicationError> {
        let record = self.load(id).await?;
        let patch = decide_cancel(&record)
            .inspect_err(|reason| debug!(event_id = id, %reason, "cancellation rejected"))?;
        self.write(id, patch).await
    }

    pub async fn edit_attendee_count(
        &self,
        id: &str,
        count: i64,
    ) -> Result<Applied, ApplicationError> {
        let patch = decide_attendee_count(count)
            .inspect_err(|issue| debug!(event_id = id, %issue, "attendee edit rejected"))?;
        self.load(id).await?;
        self.write(id, patch).await
    }

    pub async fn transition(
        &self,
        id: &str,
        transition: Transition,
    ) -> Result<Applied, ApplicationError> {
        match transition {
            Transition::CheckIn => self.check_in(id).await,
            Transition::CheckOut => self.check_out(id).await,
            Transition::Cancel => self.cancel(id).await,
            Transition::EditAttendeeCount(count) => self.edit_attendee_count(id, count).await,
        }
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApplicationError> {
        self.store.delete(&self.collection, id).await?;
        info!(event_id = id, "event deleted");
        Ok(())
    }

    async fn load(&self, id: &str) -> Result<EventRecord, ApplicationError> {
        let snapshot = self.store.get(&self.collection).await?;
        let value = snapshot
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let record = EventRecord::from_stored(id, value).map_err(StoreError::from)?;
        Ok(record)
    }

    async fn write(&self, id: &str, patch: EventPatch) -> Result<Applied, ApplicationError> {
        self.store
            .update(&self.collection, id, patch.to_fields())
            .await?;
        info!(event_id = id, transition = patch.name(), "event transition applied");
        Ok(Applied {
            id: id.to_string(),
            patch,
        })
    }
}
