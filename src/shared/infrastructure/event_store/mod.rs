// Port for the realtime key-value store that owns the events collection.
//
// Records are flat JSON objects keyed by store-generated ids. The store is the
// single source of truth; subscribers always receive the full collection.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;
use tokio::sync::watch;

pub type Snapshot = BTreeMap<String, Value>;

pub type Fields = Map<String, Value>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("record {id} is malformed: {reason}")]
    Malformed { id: String, reason: String },

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventStoreClient: Send + Sync {
    /// Every write to `collection` publishes the full collection on the returned channel.
    /// The receiver starts out holding the current contents.
    async fn subscribe(&self, collection: &str) -> Result<watch::Receiver<Snapshot>, StoreError>;

    async fn create(&self, collection: &str, record: Fields) -> Result<String, StoreError>;

    /// Merges `fields` into the existing record; untouched fields stay as they are.
    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError>;

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    async fn get(&self, collection: &str) -> Result<Snapshot, StoreError>;
}

pub mod in_memory;
