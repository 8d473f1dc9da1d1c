//! Keyword agent: HTTP client for the remote keyword-generation service.
//!
//! DESIGN
//! ======
//! Thin `reqwest` wrapper over three endpoints: `POST /invoke`,
//! `GET /available-agents` and `GET /health`. Every call is a single attempt;
//! failures surface to the caller as an [`AgentError`] and the caller decides
//! what to show. Body parsing lives in pure functions for testability.

pub mod config;
pub mod types;

use std::time::Duration;

use tracing::{info, warn};

use config::AgentConfig;
pub use types::{AgentError, AgentInfo, InvokeResponse, KeywordSource};
use types::{AgentsEnvelope, DEFAULT_REJECTION_MESSAGE, GenerateRequest, RejectionBody};

// =============================================================================
// CLIENT
// =============================================================================

pub struct AgentClient {
    http: reqwest::Client,
    config: AgentConfig,
}

impl AgentClient {
    /// Build an agent client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the HTTP client fails.
    pub fn from_env() -> Result<Self, AgentError> {
        let config = AgentConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an agent client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: AgentConfig) -> Result<Self, AgentError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| AgentError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url)
    }
}

#[async_trait::async_trait]
impl KeywordSource for AgentClient {
    async fn generate(&self, topic: &str) -> Result<InvokeResponse, AgentError> {
        let body = GenerateRequest { topic, domain: &self.config.domain, agent_id: &self.config.agent_id };

        let response = self
            .http
            .post(self.url("invoke"))
            .json(&body)
            .send()
            .await
            .map_err(|e| AgentError::Unreachable(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AgentError::Unreachable(e.to_string()))?;

        if !(200..300).contains(&status) {
            warn!(status, "keyword service rejected request");
            return Err(rejection(status, &text));
        }

        let parsed = parse_invoke_response(&text)?;
        info!(topic, shape = response_shape(&parsed), "keyword service answered");
        Ok(parsed)
    }

    async fn available_agents(&self) -> Result<Vec<AgentInfo>, AgentError> {
        let response = self
            .http
            .get(self.url("available-agents"))
            .send()
            .await
            .map_err(|e| AgentError::Unreachable(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AgentError::Unreachable(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(rejection(status, &text));
        }

        Ok(parse_agents(&text))
    }

    async fn health(&self) -> bool {
        match self.http.get(self.url("health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!(error = %e, "keyword service health check failed");
                false
            }
        }
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_invoke_response(json: &str) -> Result<InvokeResponse, AgentError> {
    serde_json::from_str(json).map_err(|e| AgentError::ApiParse(e.to_string()))
}

/// Build a rejection error, preferring the body's `message` field.
fn rejection(status: u16, body: &str) -> AgentError {
    let message = serde_json::from_str::<RejectionBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());
    AgentError::Rejected { status, message }
}

/// Agents come wrapped in `{ success, data }`; anything else means none.
fn parse_agents(json: &str) -> Vec<AgentInfo> {
    match serde_json::from_str::<AgentsEnvelope>(json) {
        Ok(AgentsEnvelope { success: true, data: Some(agents) }) => agents,
        Ok(_) => Vec::new(),
        Err(e) => {
            warn!(error = %e, "unparseable available-agents body");
            Vec::new()
        }
    }
}

fn response_shape(response: &InvokeResponse) -> &'static str {
    match response {
        InvokeResponse::Clustered(_) => "clustered",
        InvokeResponse::Flat(_) => "flat",
        InvokeResponse::Other(_) => "other",
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
