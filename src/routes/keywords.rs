//! Stateless keyword routes and keyword-agent passthroughs.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{ApiError, api_error};
use crate::agent::{AgentError, AgentInfo};
use crate::keywords::{KeywordGroup, group_keywords};
use crate::services::generate::GenerateError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GroupBody {
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GroupResponse {
    pub groups: Vec<KeywordGroup>,
}

/// `POST /api/keywords/group`: group a flat keyword list.
pub async fn group(Json(body): Json<GroupBody>) -> Json<GroupResponse> {
    Json(GroupResponse { groups: group_keywords(&body.keywords) })
}

/// `GET /api/agents`: agents offered by the keyword service.
pub async fn list_agents(State(state): State<AppState>) -> Result<Json<Vec<AgentInfo>>, ApiError> {
    let Some(agent) = state.agent.as_ref() else {
        return Err(api_error(StatusCode::SERVICE_UNAVAILABLE, &GenerateError::NotConfigured));
    };
    let agents = agent
        .available_agents()
        .await
        .map_err(|e| api_error(agent_error_status(&e), &e))?;
    Ok(Json(agents))
}

/// `GET /api/agent/health`: is the keyword service answering?
pub async fn agent_health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let ok = match state.agent.as_ref() {
        Some(agent) => agent.health().await,
        None => false,
    };
    Json(json!({ "ok": ok }))
}

pub(crate) fn agent_error_status(err: &AgentError) -> StatusCode {
    match err {
        AgentError::Unreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
        AgentError::Rejected { .. } | AgentError::ApiParse(_) => StatusCode::BAD_GATEWAY,
        AgentError::ConfigParse(_) | AgentError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "keywords_test.rs"]
mod tests;
