//! Keyword agent configuration parsed from environment variables.

use super::types::AgentError;

pub const DEFAULT_AGENT_BASE_URL: &str = "http://localhost:8897/agent";
pub const DEFAULT_AGENT_ID: &str = "ddc14fc3-3351-462d-b7e3-9da802fa87e1";
pub const DEFAULT_AGENT_DOMAIN: &str = "amazon.com";
pub const DEFAULT_AGENT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_AGENT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub base_url: String,
    pub agent_id: String,
    pub domain: String,
    pub timeouts: AgentTimeouts,
}

impl AgentConfig {
    /// Build typed agent config from environment variables.
    ///
    /// All optional:
    /// - `KEYWORD_AGENT_BASE_URL`: service root, trailing `/` trimmed
    /// - `KEYWORD_AGENT_ID`: opaque agent identifier sent with each request
    /// - `KEYWORD_AGENT_DOMAIN`: marketplace domain, default `amazon.com`
    /// - `KEYWORD_AGENT_REQUEST_TIMEOUT_SECS`: default 60
    /// - `KEYWORD_AGENT_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::ConfigParse`] if the base URL or agent id is blank.
    pub fn from_env() -> Result<Self, AgentError> {
        let base_url = std::env::var("KEYWORD_AGENT_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_AGENT_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        if base_url.is_empty() {
            return Err(AgentError::ConfigParse("KEYWORD_AGENT_BASE_URL is empty".into()));
        }

        let agent_id = std::env::var("KEYWORD_AGENT_ID").unwrap_or_else(|_| DEFAULT_AGENT_ID.to_string());
        if agent_id.trim().is_empty() {
            return Err(AgentError::ConfigParse("KEYWORD_AGENT_ID is empty".into()));
        }

        let domain = std::env::var("KEYWORD_AGENT_DOMAIN").unwrap_or_else(|_| DEFAULT_AGENT_DOMAIN.to_string());
        let timeouts = AgentTimeouts {
            request_secs: env_parse_u64("KEYWORD_AGENT_REQUEST_TIMEOUT_SECS", DEFAULT_AGENT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("KEYWORD_AGENT_CONNECT_TIMEOUT_SECS", DEFAULT_AGENT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { base_url, agent_id, domain, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
