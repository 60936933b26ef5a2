use crate::shared::core::clock::FixedClock;
use crate::shell::graphql::{AppSchema, schema};
use crate::shell::state::AppState;
use crate::shell::workers::spawn_feed_runner;
use chrono::{TimeZone, Utc};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

const EVENTS: &str = "events";

const CREATE: &str = r#"
mutation {
  createEvent(input: {
    title: "Jazz night",
    date: "2030-07-01",
    time: "21:00",
    location: "Blue Room",
    description: "Live quartet",
    category: "concert",
    organizerName: "Nina",
    contactNumber: "9876543210",
    peopleAttending: 80
  })
}
"#;

async fn make_schema() -> (AppState, AppSchema) {
    let clock = FixedClock(Utc.with_ymd_and_hms(2030, 6, 15, 12, 0, 0).unwrap());
    let state = AppState::in_memory(EVENTS, Arc::new(clock));
    spawn_feed_runner(&*state.store, EVENTS, state.feed.clone())
        .await
        .unwrap();
    let schema = schema(state.clone());
    (state, schema)
}

async fn execute(schema: &AppSchema, query: &str) -> (Value, Vec<String>) {
    let response = schema.execute(query).await;
    let errors = response.errors.iter().map(|e| e.message.clone()).collect();
    (response.data.into_json().unwrap(), errors)
}

async fn wait_for_events(state: &AppState, count: usize) {
    tokio::time::timeout(Duration::from_secs(1), async {
        while state.feed.collection().await.len() < count {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("feed never caught up");
}

#[tokio::test]
async fn creates_and_lists_an_event_over_graphql() {
    let (state, schema) = make_schema().await;
    let (data, errors) = execute(&schema, CREATE).await;
    assert!(errors.is_empty(), "{errors:?}");
    let id = data["createEvent"].as_str().unwrap().to_string();
    wait_for_events(&state, 1).await;

    let (data, _) = execute(
        &schema,
        r#"{ events(view: "upcoming", search: "jazz") { id title date time category peopleAttending isCancelled } }"#,
    )
    .await;
    assert_eq!(
        data["events"],
        json!([{
            "id": id,
            "title": "Jazz night",
            "date": "2030-07-01",
            "time": "21:00",
            "category": "concert",
            "peopleAttending": 80,
            "isCancelled": false
        }])
    );

    let (data, _) = execute(&schema, "{ calendar(year: 2030, month: 7) { id start end } }").await;
    assert_eq!(
        data["calendar"],
        json!([{ "id": id, "start": "2030-07-01", "end": "2030-07-01" }])
    );
}

#[tokio::test]
async fn reports_every_validation_issue_as_an_error() {
    let (state, schema) = make_schema().await;
    let (_, errors) = execute(
        &schema,
        r#"mutation { createEvent(input: { title: "", date: "", time: "", category: "opera", organizerName: "", contactNumber: "123" }) }"#,
    )
    .await;
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("validation failed"));
    assert!(errors[0].contains("contactNumber"));
    assert_eq!(state.store.write_count(), 0);
}

#[tokio::test]
async fn runs_the_lifecycle_over_graphql() {
    let (state, schema) = make_schema().await;
    let (data, _) = execute(&schema, CREATE).await;
    let id = data["createEvent"].as_str().unwrap().to_string();
    wait_for_events(&state, 1).await;

    let (_, errors) = execute(
        &schema,
        &format!(r#"mutation {{ checkOut(id: "{id}") }}"#),
    )
    .await;
    assert_eq!(errors, vec!["invalid transition: event is not checked in yet"]);

    for mutation in ["checkIn", "checkOut"] {
        let (data, errors) =
            execute(&schema, &format!(r#"mutation {{ {mutation}(id: "{id}") }}"#)).await;
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(data[mutation], json!(id));
    }

    let (_, errors) = execute(
        &schema,
        &format!(r#"mutation {{ cancelEvent(id: "{id}") }}"#),
    )
    .await;
    assert_eq!(
        errors,
        vec!["invalid transition: event cannot be cancelled after check-in"]
    );

    let (data, _) = execute(
        &schema,
        &format!(r#"mutation {{ editAttendeeCount(id: "{id}", count: 12) }}"#),
    )
    .await;
    assert_eq!(data["editAttendeeCount"], json!(id));

    let (data, _) = execute(
        &schema,
        &format!(r#"mutation {{ deleteEvent(id: "{id}") }}"#),
    )
    .await;
    assert_eq!(data["deleteEvent"], json!(true));
}

#[tokio::test]
async fn rejects_an_unknown_view() {
    let (_, schema) = make_schema().await;
    let (_, errors) = execute(&schema, r#"{ events(view: "archived") { id } }"#).await;
    assert_eq!(errors.len(), 1);
}
