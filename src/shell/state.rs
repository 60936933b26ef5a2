use crate::modules::events::use_cases::browse_events::feed::EventFeed;
use crate::modules::events::use_cases::manage_events::handler::LifecycleMutator;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::auth::AuthService;
use crate::shared::infrastructure::auth::in_memory::InMemoryAuth;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InMemoryEventStore>,
    pub mutator: Arc<LifecycleMutator<InMemoryEventStore>>,
    pub feed: Arc<EventFeed>,
    pub auth: Arc<dyn AuthService>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Wires the in-memory store and auth; the feed starts empty until it is connected.
    pub fn in_memory(collection: &str, clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(InMemoryEventStore::new());
        Self::with_store(collection, store, clock)
    }

    pub fn with_store(
        collection: &str,
        store: Arc<InMemoryEventStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let mutator = Arc::new(LifecycleMutator::new(
            collection,
            store.clone(),
            clock.clone(),
        ));
        Self {
            store,
            mutator,
            feed: Arc::new(EventFeed::new()),
            auth: Arc::new(InMemoryAuth::new()),
            clock,
        }
    }
}
