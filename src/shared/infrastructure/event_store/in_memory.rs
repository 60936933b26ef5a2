// In memory implementation of the EventStoreClient port.
//
// Purpose
// - Support handler tests and local runs without the hosted database.
//
// Responsibilities
// - Keep one snapshot per collection and a watch channel that republishes it after each write.
// - Count writes so tests can assert that a rejected mutation never reached the store.

use crate::shared::infrastructure::event_store::{EventStoreClient, Fields, Snapshot, StoreError};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{RwLock, watch};
use uuid::Uuid;

struct Collection {
    records: Snapshot,
    channel: watch::Sender<Snapshot>,
}

impl Collection {
    fn new() -> Self {
        let (channel, _) = watch::channel(Snapshot::new());
        Self {
            records: Snapshot::new(),
            channel,
        }
    }

    fn publish(&self) {
        self.channel.send_replace(self.records.clone());
    }
}

#[derive(Default)]
pub struct InMemoryEventStore {
    collections: RwLock<HashMap<String, Collection>>,
    writes: AtomicUsize,
    is_offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Seeds a record under a caller-chosen id, bypassing id generation.
    pub async fn insert_raw(&self, collection: &str, id: &str, record: Value) {
        let mut guard = self.collections.write().await;
        let entry = guard
            .entry(collection.to_string())
            .or_insert_with(Collection::new);
        entry.records.insert(id.to_string(), record);
        entry.publish();
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventStoreClient for InMemoryEventStore {
    async fn subscribe(&self, collection: &str) -> Result<watch::Receiver<Snapshot>, StoreError> {
        self.ensure_online()?;
        let mut guard = self.collections.write().await;
        let entry = guard
            .entry(collection.to_string())
            .or_insert_with(Collection::new);
        Ok(entry.channel.subscribe())
    }

    async fn create(&self, collection: &str, record: Fields) -> Result<String, StoreError> {
        self.ensure_online()?;
        let id = Uuid::now_v7().to_string();
        let mut guard = self.collections.write().await;
        let entry = guard
            .entry(collection.to_string())
            .or_insert_with(Collection::new);
        entry.records.insert(id.clone(), Value::Object(record));
        self.writes.fetch_add(1, Ordering::SeqCst);
        entry.publish();
        Ok(id)
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.collections.write().await;
        let entry = guard
            .get_mut(collection)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let record = entry
            .records
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let Value::Object(existing) = record else {
            return Err(StoreError::Malformed {
                id: id.to_string(),
                reason: "stored value is not an object".into(),
            });
        };
        existing.extend(fields);
        self.writes.fetch_add(1, Ordering::SeqCst);
        entry.publish();
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.collections.write().await;
        let entry = guard
            .get_mut(collection)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if entry.records.remove(id).is_none() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        entry.publish();
        Ok(())
    }

    async fn get(&self, collection: &str) -> Result<Snapshot, StoreError> {
        self.ensure_online()?;
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .map(|c| c.records.clone())
            .unwrap_or_default())
    }
}
