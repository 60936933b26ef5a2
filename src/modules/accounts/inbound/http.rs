use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::shared::infrastructure::auth::AuthError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ResetPasswordBody {
    pub email: String,
}

fn auth_error_response(error: AuthError) -> Response {
    let status = match &error {
        AuthError::InvalidEmail(_) | AuthError::WeakPassword { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AuthError::EmailInUse(_) => StatusCode::CONFLICT,
        AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthError::UnknownEmail(_) => StatusCode::NOT_FOUND,
        AuthError::Backend(_) => {
            error!(%error, "auth service request failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.auth.login(&body.email, &body.password).await {
        Ok(user) => {
            info!(email = %user.email, "user logged in");
            Json(user).into_response()
        }
        Err(e) => auth_error_response(e),
    }
}

pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.auth.signup(&body.email, &body.password).await {
        Ok(user) => {
            info!(email = %user.email, "account created");
            (StatusCode::CREATED, Json(user)).into_response()
        }
        Err(e) => auth_error_response(e),
    }
}

pub async fn reset_password(
    State(state): State<AppState>,
    body: Result<Json<ResetPasswordBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match state.auth.reset_password(&body.email).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(e) => auth_error_response(e),
    }
}

pub async fn logout(State(state): State<AppState>) -> Response {
    match state.auth.logout().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => auth_error_response(e),
    }
}

pub async fn me(State(state): State<AppState>) -> Response {
    match state.auth.current_user().await {
        Some(user) => Json(user).into_response(),
        None => StatusCode::UNAUTHORIZED.into_response(),
    }
}
