//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON HTTP API: stateless grouping, keyword-agent
//! passthroughs, and per-session generation / selection / analysis.

pub mod keywords;
pub mod sessions;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{ErrorCode, error_body};
use crate::state::AppState;

/// Error half of every handler result.
pub type ApiError = (StatusCode, Json<Value>);

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/agent/health", get(keywords::agent_health))
        .route("/api/agents", get(keywords::list_agents))
        .route("/api/keywords/group", post(keywords::group))
        .route("/api/sessions", post(sessions::create))
        .route("/api/sessions/{id}", get(sessions::get))
        .route("/api/sessions/{id}/generate", post(sessions::generate))
        .route("/api/sessions/{id}/selection", post(sessions::select))
        .route("/api/sessions/{id}/analyze", post(sessions::analyze))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Pair an error with its status and JSON body.
pub(crate) fn api_error(status: StatusCode, err: &(impl ErrorCode + ?Sized)) -> ApiError {
    (status, Json(error_body(err)))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
