use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::modules::events::core::classify::Partition;
use crate::modules::events::core::record::EventRecord;
use crate::shell::state::AppState;

/// A record as listed to clients, with its document id alongside the stored fields.
#[derive(Serialize)]
pub struct EventView {
    pub id: String,
    #[serde(flatten)]
    pub record: EventRecord,
}

impl From<EventRecord> for EventView {
    fn from(record: EventRecord) -> Self {
        Self {
            id: record.id.clone(),
            record,
        }
    }
}

#[derive(Deserialize)]
pub struct ListEventsParams {
    pub view: Option<String>,
    pub search: Option<String>,
}

#[derive(Deserialize)]
pub struct CalendarParams {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListEventsParams>,
) -> Response {
    let partition = match params.view.as_deref().map(str::parse::<Partition>) {
        None => Partition::default(),
        Some(Ok(p)) => p,
        Some(Err(e)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    let events: Vec<EventView> = state
        .feed
        .list(partition, state.clock.now(), params.search.as_deref())
        .await
        .into_iter()
        .map(EventView::from)
        .collect();
    Json(events).into_response()
}

pub async fn calendar(
    State(state): State<AppState>,
    Query(params): Query<CalendarParams>,
) -> Response {
    let month = match (params.year, params.month) {
        (Some(year), Some(month)) => Some((year, month)),
        (None, None) => None,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "year and month go together" })),
            )
                .into_response();
        }
    };
    Json(state.feed.calendar(month).await).into_response()
}
