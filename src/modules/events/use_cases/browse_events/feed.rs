// In-memory view of the latest events snapshot, as seen by the inbound adapters.
//
// Purpose
// - Hold the decoded collection from the most recent store push, numbered by revision.
// - Let a mutation's result show up immediately, until the store's own snapshot arrives.
//
// Responsibilities
// - Decode each snapshot at the boundary; malformed records are logged and left out.
// - Ignore a local result when a newer snapshot has replaced the one it was issued against.

use crate::modules::events::core::calendar::{CalendarEntry, calendar_entries, month_entries};
use crate::modules::events::core::classify::{Partition, Partitions, classify};
use crate::modules::events::core::record::{EventCollection, EventRecord, decode_snapshot};
use crate::modules::events::use_cases::manage_events::handler::Applied;
use crate::shared::infrastructure::event_store::Snapshot;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, warn};

#[derive(Default)]
struct FeedState {
    revision: u64,
    events: EventCollection,
}

#[derive(Default)]
pub struct EventFeed {
    state: RwLock<FeedState>,
}

impl EventFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the collection with `snapshot` and returns the new revision.
    pub async fn ingest(&self, snapshot: &Snapshot) -> u64 {
        let (events, rejected) = decode_snapshot(snapshot);
        for error in &rejected {
            warn!(%error, "skipping malformed event record");
        }
        let mut state = self.state.write().await;
        state.revision += 1;
        state.events = events;
        debug!(
            revision = state.revision,
            records = state.events.len(),
            rejected = rejected.len(),
            "events snapshot ingested"
        );
        state.revision
    }

    pub async fn revision(&self) -> u64 {
        self.state.read().await.revision
    }

    pub async fn collection(&self) -> EventCollection {
        self.state.read().await.events.clone()
    }

    pub async fn get(&self, id: &str) -> Option<EventRecord> {
        self.state.read().await.events.get(id).cloned()
    }

    /// Applies a mutation's result locally, unless the feed moved past `seen_revision`.
    /// Returns whether the patch was applied.
    pub async fn apply_local(&self, seen_revision: u64, applied: &Applied) -> bool {
        let mut state = self.state.write().await;
        if state.revision != seen_revision {
            debug!(
                event_id = %applied.id,
                seen_revision,
                revision = state.revision,
                "dropping stale local update"
            );
            return false;
        }
        match state.events.get_mut(&applied.id) {
            Some(record) => {
                applied.patch.apply_to(record);
                true
            }
            None => false,
        }
    }

    pub async fn partitions(&self, now: DateTime<Utc>, search: Option<&str>) -> Partitions {
        classify(&self.state.read().await.events, now, search)
    }

    pub async fn list(
        &self,
        partition: Partition,
        now: DateTime<Utc>,
        search: Option<&str>,
    ) -> Vec<EventRecord> {
        self.partitions(now, search)
            .await
            .into_partition(partition)
    }

    pub async fn calendar(&self, month: Option<(i32, u32)>) -> Vec<CalendarEntry> {
        let state = self.state.read().await;
        match month {
            Some((year, month)) => month_entries(&state.events, year, month),
            None => calendar_entries(&state.events),
        }
    }
}
