// Feed runner consumes the store subscription and keeps the EventFeed current.
//
// Purpose
// - Push every snapshot the store publishes into the feed; the last one always wins.

use crate::modules::events::use_cases::browse_events::feed::EventFeed;
use crate::shared::infrastructure::event_store::{EventStoreClient, Snapshot, StoreError};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

/// Ingests each snapshot published after the receiver was last read, until the store
/// drops its side of the subscription. The initial load belongs to `connect_feed`.
pub async fn run_feed(mut receiver: watch::Receiver<Snapshot>, feed: Arc<EventFeed>) {
    while receiver.changed().await.is_ok() {
        let snapshot = receiver.borrow_and_update().clone();
        feed.ingest(&snapshot).await;
    }
    info!("events subscription closed");
}

/// Subscribes to `collection` and loads the current snapshot before returning the receiver.
pub async fn connect_feed<TStore>(
    store: &TStore,
    collection: &str,
    feed: &EventFeed,
) -> Result<watch::Receiver<Snapshot>, StoreError>
where
    TStore: EventStoreClient + ?Sized,
{
    let mut receiver = store.subscribe(collection).await?;
    let snapshot = receiver.borrow_and_update().clone();
    feed.ingest(&snapshot).await;
    Ok(receiver)
}
