use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::modules::events::application::errors::ApplicationError;
use crate::modules::events::core::draft::EventDraft;
use crate::modules::events::use_cases::manage_events::handler::Transition;
use crate::shared::infrastructure::event_store::StoreError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct CreateEventResponse {
    pub id: String,
}

#[derive(Deserialize)]
pub struct AttendeeCountBody {
    pub count: i64,
}

pub fn error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::Validation(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "issues": e.issues })),
        )
            .into_response(),
        ApplicationError::InvalidTransition(e) => (
            StatusCode::CONFLICT,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
        ApplicationError::Store(StoreError::NotFound(id)) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("event {id} not found") })),
        )
            .into_response(),
        ApplicationError::Store(e) => {
            error!(error = %e, "event store request failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<EventDraft>, JsonRejection>,
) -> Response {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.mutator.create(&draft).await {
        Ok(id) => (StatusCode::CREATED, Json(CreateEventResponse { id })).into_response(),
        Err(e) => error_response(e),
    }
}

async fn transition(state: &AppState, id: &str, transition: Transition) -> Response {
    let seen = state.feed.revision().await;
    match state.mutator.transition(id, transition).await {
        Ok(applied) => {
            state.feed.apply_local(seen, &applied).await;
            Json(applied).into_response()
        }
        Err(e) => error_response(e),
    }
}

pub async fn check_in(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    transition(&state, &id, Transition::CheckIn).await
}

pub async fn check_out(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    transition(&state, &id, Transition::CheckOut).await
}

pub async fn cancel(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    transition(&state, &id, Transition::Cancel).await
}

pub async fn edit_attendee_count(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<AttendeeCountBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    transition(&state, &id, Transition::EditAttendeeCount(body.count)).await
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.mutator.delete(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
