//! Generation service: topic → keyword agent → display groups.
//!
//! DESIGN
//! ======
//! Resolves the topic (falling back to the current selection when asked),
//! makes exactly one call to the keyword source, and normalizes either
//! response shape into a flat keyword list plus display groups. Flat
//! responses are grouped locally with [`group_keywords`].

use serde::Serialize;
use tracing::{info, warn};

use crate::agent::{AgentError, InvokeResponse, KeywordSource};
use crate::error::ErrorCode;
use crate::keywords::{KeywordGroup, group_keywords};
use crate::selection::SelectionState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Please enter a topic or select keywords to include")]
    EmptyTopic,
    #[error("keyword agent not configured")]
    NotConfigured,
    #[error(transparent)]
    Agent(#[from] AgentError),
}

impl ErrorCode for GenerateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyTopic => "E_EMPTY_TOPIC",
            Self::NotConfigured => "E_AGENT_NOT_CONFIGURED",
            Self::Agent(e) => e.error_code(),
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Agent(e) if e.retryable())
    }
}

/// Keywords produced by one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedKeywords {
    pub topic: String,
    pub keywords: Vec<String>,
    pub groups: Vec<KeywordGroup>,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Pick the topic to send: the typed topic, else the selection when
/// `include_selected` is set.
///
/// # Errors
///
/// Returns [`GenerateError::EmptyTopic`] when neither source has text.
pub fn resolve_topic(topic: &str, selection: &SelectionState, include_selected: bool) -> Result<String, GenerateError> {
    let typed = topic.trim();
    if !typed.is_empty() {
        return Ok(typed.to_owned());
    }
    if include_selected && !selection.is_empty() {
        return Ok(selection.derived_topic());
    }
    Err(GenerateError::EmptyTopic)
}

/// Generate keywords for a topic.
///
/// # Errors
///
/// Returns [`GenerateError::EmptyTopic`] if there is nothing to ask for, or
/// [`GenerateError::Agent`] if the keyword service call fails.
pub async fn generate_keywords(
    source: &dyn KeywordSource,
    topic: &str,
    selection: &SelectionState,
    include_selected: bool,
) -> Result<GeneratedKeywords, GenerateError> {
    let topic = resolve_topic(topic, selection, include_selected)?;
    let response = source.generate(&topic).await?;
    let (keywords, groups) = normalize_response(response);

    info!(%topic, keywords = keywords.len(), groups = groups.len(), "keywords generated");
    Ok(GeneratedKeywords { topic, keywords, groups })
}

/// Turn either response shape into (flat keywords, display groups).
#[must_use]
pub fn normalize_response(response: InvokeResponse) -> (Vec<String>, Vec<KeywordGroup>) {
    if let Some(groups) = response.clustered_groups() {
        let keywords = groups.iter().flat_map(|g| g.keywords.iter().cloned()).collect();
        return (keywords, groups);
    }
    match response {
        InvokeResponse::Flat(keywords) => {
            let groups = group_keywords(&keywords);
            (keywords, groups)
        }
        InvokeResponse::Clustered(_) => (Vec::new(), Vec::new()),
        InvokeResponse::Other(body) => {
            warn!(shape = json_shape(&body), "unrecognized keyword service body, no keywords");
            (Vec::new(), Vec::new())
        }
    }
}

fn json_shape(body: &serde_json::Value) -> &'static str {
    match body {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
