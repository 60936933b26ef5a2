use crate::modules::events::core::classify::Partition;
use crate::modules::events::core::record::EventRecord;
use crate::modules::events::use_cases::browse_events::feed::EventFeed;
use crate::modules::events::use_cases::manage_events::handler::LifecycleMutator;
use crate::shared::core::clock::FixedClock;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shell::workers::spawn_feed_runner;
use crate::tests::fixtures::event_draft::EventDraftBuilder;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

const EVENTS: &str = "events";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 6, 15, 12, 0, 0).unwrap()
}

async fn wait_until<F>(feed: &EventFeed, check: F)
where
    F: Fn(&std::collections::BTreeMap<String, EventRecord>) -> bool,
{
    tokio::time::timeout(Duration::from_secs(1), async {
        while !check(&feed.collection().await) {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("feed never reached the expected state");
}

fn titles(records: &[EventRecord]) -> Vec<&str> {
    records.iter().map(|r| r.title.as_str()).collect()
}

#[tokio::test]
async fn browses_events_pushed_by_the_store() {
    let store = Arc::new(InMemoryEventStore::new());
    let feed = Arc::new(EventFeed::new());
    let mutator = LifecycleMutator::new(EVENTS, store.clone(), Arc::new(FixedClock(now())));
    let runner = spawn_feed_runner(&*store, EVENTS, feed.clone())
        .await
        .unwrap();

    let drafts = [
        ("Rust meetup", "2030-06-20"),
        ("Spring fair", "2030-05-01"),
        ("Rust hack night", "2030-07-01"),
        ("Midsummer gig", "2030-06-15"),
    ];
    let mut ids = Vec::new();
    for (title, date) in drafts {
        let draft = EventDraftBuilder::new().title(title).date(date).build();
        ids.push(mutator.create(&draft).await.unwrap());
    }
    mutator.cancel(&ids[2]).await.unwrap();
    store
        .insert_raw(EVENTS, "legacy", json!({ "title": "", "isConfirmed": true }))
        .await;

    wait_until(&feed, |events| {
        events.len() == 4 && events.get(&ids[2]).is_some_and(|r| r.is_cancelled)
    })
    .await;

    let partitions = feed.partitions(now(), None).await;
    assert_eq!(
        titles(partitions.get(Partition::Upcoming)),
        vec!["Rust meetup"]
    );
    assert_eq!(
        titles(partitions.get(Partition::Past)),
        vec!["Spring fair", "Midsummer gig"]
    );
    assert_eq!(
        titles(partitions.get(Partition::Cancelled)),
        vec!["Rust hack night"]
    );
    assert_eq!(partitions.get(Partition::Confirmed).len(), 3);

    let rust = feed.list(Partition::Upcoming, now(), Some("RUST")).await;
    assert_eq!(titles(&rust), vec!["Rust meetup"]);

    runner.abort();
}

#[tokio::test]
async fn drops_a_local_result_once_the_store_snapshot_arrives() {
    let store = Arc::new(InMemoryEventStore::new());
    let feed = Arc::new(EventFeed::new());
    let mutator = LifecycleMutator::new(EVENTS, store.clone(), Arc::new(FixedClock(now())));
    let id = mutator
        .create(&EventDraftBuilder::new().build())
        .await
        .unwrap();
    let runner = spawn_feed_runner(&*store, EVENTS, feed.clone())
        .await
        .unwrap();
    wait_until(&feed, |events| events.contains_key(&id)).await;

    let seen = feed.revision().await;
    let applied = mutator.check_in(&id).await.unwrap();
    wait_until(&feed, |events| {
        events.get(&id).is_some_and(|r| r.check_in_time.is_some())
    })
    .await;

    assert!(!feed.apply_local(seen, &applied).await);
    assert_eq!(feed.get(&id).await.unwrap().check_in_time, Some(now()));

    runner.abort();
}

#[tokio::test]
async fn removes_deleted_events_from_every_view() {
    let store = Arc::new(InMemoryEventStore::new());
    let feed = Arc::new(EventFeed::new());
    let mutator = LifecycleMutator::new(EVENTS, store.clone(), Arc::new(FixedClock(now())));
    let runner = spawn_feed_runner(&*store, EVENTS, feed.clone())
        .await
        .unwrap();
    let id = mutator
        .create(&EventDraftBuilder::new().build())
        .await
        .unwrap();
    wait_until(&feed, |events| events.contains_key(&id)).await;

    mutator.delete(&id).await.unwrap();
    wait_until(&feed, |events| events.is_empty()).await;

    let partitions = feed.partitions(now(), None).await;
    assert!(partitions.get(Partition::Confirmed).is_empty());
    assert!(feed.calendar(None).await.is_empty());

    runner.abort();
}
