use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::modules::events::use_cases::browse_events::feed::EventFeed;
use crate::modules::events::use_cases::browse_events::runner::{connect_feed, run_feed};
use crate::shared::infrastructure::event_store::{EventStoreClient, StoreError};

/// Connects the feed to `collection` and keeps it current on a background task.
pub async fn spawn_feed_runner<TStore>(
    store: &TStore,
    collection: &str,
    feed: Arc<EventFeed>,
) -> Result<JoinHandle<()>, StoreError>
where
    TStore: EventStoreClient + ?Sized,
{
    let receiver = connect_feed(store, collection, &feed).await?;
    Ok(tokio::spawn(run_feed(receiver, feed)))
}
