//! Agent session routes: generation, selection, and analysis.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::keywords::agent_error_status;
use super::{ApiError, api_error};
use crate::selection::{SELECTION_LIMIT, SelectionAction, SelectionState};
use crate::services::generate::{self, GenerateError};
use crate::services::session::{self, SessionError};
use crate::state::{AgentSession, AppState};

#[derive(Deserialize)]
pub struct GenerateBody {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub include_selected: bool,
}

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub selection: SelectionState,
    pub limit: usize,
    pub remaining: usize,
    pub changed: usize,
    pub rejected: usize,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub keywords: Vec<String>,
}

/// `POST /api/sessions`: start a new agent session.
pub async fn create(State(state): State<AppState>) -> (StatusCode, Json<AgentSession>) {
    (StatusCode::CREATED, Json(session::create_session(&state).await))
}

/// `GET /api/sessions/{id}`: session snapshot.
pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<AgentSession>, ApiError> {
    let session = session::get_session(&state, id)
        .await
        .map_err(session_error)?;
    Ok(Json(session))
}

/// `POST /api/sessions/{id}/generate`: generate keywords for a topic.
pub async fn generate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<GenerateBody>,
) -> Result<Json<AgentSession>, ApiError> {
    let current = session::get_session(&state, id)
        .await
        .map_err(session_error)?;
    let Some(agent) = state.agent.clone() else {
        return Err(generate_error(&GenerateError::NotConfigured));
    };

    let generated =
        generate::generate_keywords(agent.as_ref(), &body.topic, &current.selection, body.include_selected)
            .await
            .map_err(|e| generate_error(&e))?;

    let session = session::store_generated(&state, id, generated)
        .await
        .map_err(session_error)?;
    Ok(Json(session))
}

/// `POST /api/sessions/{id}/selection`: apply one selection action.
pub async fn select(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(action): Json<SelectionAction>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let (session, outcome) = session::apply_selection(&state, id, action)
        .await
        .map_err(session_error)?;
    Ok(Json(SelectionResponse {
        remaining: session.selection.remaining(),
        selection: session.selection,
        limit: SELECTION_LIMIT,
        changed: outcome.changed,
        rejected: outcome.rejected,
    }))
}

/// `POST /api/sessions/{id}/analyze`: submit the selection for analysis.
pub async fn analyze(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<AnalyzeResponse>, ApiError> {
    let keywords = session::analyze_selection(&state, id)
        .await
        .map_err(session_error)?;
    Ok(Json(AnalyzeResponse { keywords }))
}

pub(crate) fn session_error(err: SessionError) -> ApiError {
    let status = match err {
        SessionError::NotFound(_) => StatusCode::NOT_FOUND,
        SessionError::EmptySelection => StatusCode::BAD_REQUEST,
    };
    api_error(status, &err)
}

pub(crate) fn generate_error(err: &GenerateError) -> ApiError {
    let status = match err {
        GenerateError::EmptyTopic => StatusCode::BAD_REQUEST,
        GenerateError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        GenerateError::Agent(e) => agent_error_status(e),
    };
    api_error(status, err)
}

#[cfg(test)]
#[path = "sessions_test.rs"]
mod tests;
