//! Session service: create, read, and mutate in-memory agent sessions.
//!
//! DESIGN
//! ======
//! Every mutation takes the sessions write lock, applies one change, and
//! returns a snapshot clone so handlers never hold the lock while
//! serializing. Keyword generation runs *outside* the lock; only the result
//! is stored.

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ErrorCode;
use crate::selection::{ApplyOutcome, SelectionAction};
use crate::services::generate::GeneratedKeywords;
use crate::state::{AgentSession, AppState};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session not found: {0}")]
    NotFound(Uuid),
    #[error("no keywords selected")]
    EmptySelection,
}

impl ErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_SESSION_NOT_FOUND",
            Self::EmptySelection => "E_EMPTY_SELECTION",
        }
    }
}

/// Create a new empty session and return its snapshot.
pub async fn create_session(state: &AppState) -> AgentSession {
    let session = AgentSession::new(Uuid::new_v4());
    state.sessions.write().await.insert(session.id, session.clone());
    info!(session_id = %session.id, "session created");
    session
}

/// Snapshot an existing session.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] for unknown IDs.
pub async fn get_session(state: &AppState, id: Uuid) -> Result<AgentSession, SessionError> {
    state
        .sessions
        .read()
        .await
        .get(&id)
        .cloned()
        .ok_or(SessionError::NotFound(id))
}

/// Apply one selection action.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] for unknown IDs.
pub async fn apply_selection(
    state: &AppState,
    id: Uuid,
    action: SelectionAction,
) -> Result<(AgentSession, ApplyOutcome), SessionError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
    let outcome = session.selection.apply(action);
    debug!(
        session_id = %id,
        selected = session.selection.len(),
        changed = outcome.changed,
        rejected = outcome.rejected,
        "selection updated"
    );
    Ok((session.clone(), outcome))
}

/// Replace the session's generated keywords and groups.
///
/// The selection is left alone: selected keywords survive a regeneration.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] for unknown IDs.
pub async fn store_generated(
    state: &AppState,
    id: Uuid,
    generated: GeneratedKeywords,
) -> Result<AgentSession, SessionError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
    session.topic = Some(generated.topic);
    session.keywords = generated.keywords;
    session.groups = generated.groups;
    Ok(session.clone())
}

/// Submit the current selection for analysis and return what was submitted.
///
/// # Errors
///
/// Returns [`SessionError::NotFound`] for unknown IDs and
/// [`SessionError::EmptySelection`] when nothing is selected.
pub async fn analyze_selection(state: &AppState, id: Uuid) -> Result<Vec<String>, SessionError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
    if session.selection.is_empty() {
        return Err(SessionError::EmptySelection);
    }

    let submitted = session.selection.keywords().to_vec();
    info!(session_id = %id, count = submitted.len(), keywords = ?submitted, "selection submitted for analysis");
    session.analyzed = Some(submitted.clone());
    Ok(submitted)
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
