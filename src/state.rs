//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the optional keyword-agent client and a map of live agent
//! sessions. A session is the serializable replacement for the widget's
//! component state: last topic, generated keywords, their groups, and the
//! current selection. Sessions live only in memory.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::agent::KeywordSource;
use crate::keywords::KeywordGroup;
use crate::selection::SelectionState;

// =============================================================================
// AGENT SESSION
// =============================================================================

/// Per-user keyword list state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSession {
    pub id: Uuid,
    /// Topic of the last successful generation.
    pub topic: Option<String>,
    /// Flat keywords from the last generation, in service order.
    pub keywords: Vec<String>,
    /// Display groups for `keywords`.
    pub groups: Vec<KeywordGroup>,
    pub selection: SelectionState,
    /// Keywords submitted by the last "save & analyze".
    pub analyzed: Option<Vec<String>>,
}

impl AgentSession {
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self { id, ..Self::default() }
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Keyword service client. `None` if the agent is not configured.
    pub agent: Option<Arc<dyn KeywordSource>>,
    pub sessions: Arc<RwLock<HashMap<Uuid, AgentSession>>>,
}

impl AppState {
    #[must_use]
    pub fn new(agent: Option<Arc<dyn KeywordSource>>) -> Self {
        Self { agent, sessions: Arc::new(RwLock::new(HashMap::new())) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
