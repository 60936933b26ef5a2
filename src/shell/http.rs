use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::accounts::inbound::http as accounts_http;
use crate::modules::events::use_cases::browse_events::inbound::http as browse_http;
use crate::modules::events::use_cases::manage_events::inbound::http as manage_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/events", get(browse_http::list).post(manage_http::create))
        .route("/events/{id}", axum::routing::delete(manage_http::delete))
        .route("/events/{id}/check-in", post(manage_http::check_in))
        .route("/events/{id}/check-out", post(manage_http::check_out))
        .route("/events/{id}/cancel", post(manage_http::cancel))
        .route(
            "/events/{id}/attendees",
            put(manage_http::edit_attendee_count),
        )
        .route("/calendar", get(browse_http::calendar))
        .route("/auth/login", post(accounts_http::login))
        .route("/auth/signup", post(accounts_http::signup))
        .route("/auth/reset-password", post(accounts_http::reset_password))
        .route("/auth/logout", post(accounts_http::logout))
        .route("/auth/me", get(accounts_http::me))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
