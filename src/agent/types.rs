//! Keyword agent wire types, errors, and the source trait.

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;
use crate::keywords::{Keyword, KeywordGroup};

/// Message used when the service rejects a request without explaining why.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Failed to generate keywords";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by keyword agent operations.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The service could not be reached at all.
    #[error("keyword service is unreachable: {0}")]
    Unreachable(String),

    /// The service answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The response body could not be deserialized.
    #[error("keyword service response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ErrorCode for AgentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::Unreachable(_) => "E_AGENT_UNREACHABLE",
            Self::Rejected { .. } => "E_AGENT_REJECTED",
            Self::ApiParse(_) => "E_API_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Unreachable(_) | Self::Rejected { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// REQUEST
// =============================================================================

/// Body of `POST /invoke`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest<'a> {
    pub topic: &'a str,
    pub domain: &'a str,
    pub agent_id: &'a str,
}

// =============================================================================
// RESPONSE
// =============================================================================

/// One keyword inside a pre-clustered group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordPayload {
    pub keyword: String,
    #[serde(default)]
    pub search_volume: Option<u64>,
}

/// A pre-clustered group as returned by newer service versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterPayload {
    #[serde(alias = "name", alias = "group_name")]
    pub group: String,
    pub keywords: Vec<KeywordPayload>,
}

/// Body of a successful `POST /invoke`.
///
/// Variant order matters for untagged decoding: an array of objects is
/// clustered, an array of strings is flat, anything else carries no keywords.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InvokeResponse {
    Clustered(Vec<ClusterPayload>),
    Flat(Vec<String>),
    Other(serde_json::Value),
}

impl InvokeResponse {
    /// Convert pre-clustered payloads into display groups, keeping the
    /// service's order. Returns `None` for flat or unrecognized bodies.
    #[must_use]
    pub fn clustered_groups(&self) -> Option<Vec<KeywordGroup>> {
        let Self::Clustered(clusters) = self else {
            return None;
        };
        let groups = clusters
            .iter()
            .map(|cluster| KeywordGroup {
                name: cluster.group.clone(),
                keywords: cluster
                    .keywords
                    .iter()
                    .map(|k| Keyword::new(k.keyword.clone(), k.search_volume.unwrap_or(0)).to_string())
                    .collect(),
            })
            .collect();
        Some(groups)
    }
}

/// Error body returned with a non-success status.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RejectionBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// An agent listed by `GET /available-agents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentInfo {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AgentsEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<AgentInfo>>,
}

// =============================================================================
// KEYWORD SOURCE TRAIT
// =============================================================================

/// Anything that can generate keywords for a topic. Enables mocking in tests.
#[async_trait::async_trait]
pub trait KeywordSource: Send + Sync {
    /// Request keywords for `topic`. Exactly one attempt, no retries.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::Unreachable`] on network failure and
    /// [`AgentError::Rejected`] on a non-success status.
    async fn generate(&self, topic: &str) -> Result<InvokeResponse, AgentError>;

    /// List agents the service offers.
    ///
    /// # Errors
    ///
    /// Returns an [`AgentError`] if the request fails.
    async fn available_agents(&self) -> Result<Vec<AgentInfo>, AgentError>;

    /// `true` when the service answers its health probe.
    async fn health(&self) -> bool;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
