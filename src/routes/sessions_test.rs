use std::sync::Arc;

use super::*;
use crate::agent::AgentError;
use crate::state::test_helpers::{self, MockAgent};

fn generate_body(topic: &str, include_selected: bool) -> Json<GenerateBody> {
    Json(GenerateBody { topic: topic.into(), include_selected })
}

#[tokio::test]
async fn create_returns_created_session() {
    let state = test_helpers::test_app_state();
    let (status, Json(session)) = create(State(state.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(state.sessions.read().await.contains_key(&session.id));
}

#[tokio::test]
async fn get_unknown_session_is_404() {
    let state = test_helpers::test_app_state();
    let (status, Json(body)) = get(State(state), Path(Uuid::new_v4())).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E_SESSION_NOT_FOUND");
}

#[tokio::test]
async fn generate_stores_flat_keywords_and_groups() {
    let agent = Arc::new(MockAgent::flat(&["desk lamp (300)", "desk lamp led (1,000)", "frypan"]));
    let state = test_helpers::test_app_state_with_agent(agent);
    let id = test_helpers::seed_session(&state).await;

    let Json(session) = generate(State(state), Path(id), generate_body("desk lamp", false))
        .await
        .unwrap();
    assert_eq!(session.topic.as_deref(), Some("desk lamp"));
    assert_eq!(session.keywords.len(), 3);
    assert_eq!(session.groups[0].name, "General Desk");
    assert_eq!(session.groups[0].keywords, vec!["desk lamp led (1000)", "desk lamp (300)"]);
    assert_eq!(session.groups[1].name, "Other Keywords");
}

#[tokio::test]
async fn generate_without_agent_is_503() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_session(&state).await;
    let (status, Json(body)) = generate(State(state), Path(id), generate_body("lamp", false))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "E_AGENT_NOT_CONFIGURED");
}

#[tokio::test]
async fn generate_empty_topic_is_400() {
    let state = test_helpers::test_app_state_with_agent(Arc::new(MockAgent::new(Vec::new())));
    let id = test_helpers::seed_session(&state).await;
    let (status, Json(body)) = generate(State(state), Path(id), generate_body("  ", true))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please enter a topic or select keywords to include");
}

#[tokio::test]
async fn generate_rejection_is_502_with_service_message() {
    let agent = MockAgent::new(vec![Err(AgentError::Rejected { status: 400, message: "Topic too long".into() })]);
    let state = test_helpers::test_app_state_with_agent(Arc::new(agent));
    let id = test_helpers::seed_session(&state).await;

    let (status, Json(body)) = generate(State(state.clone()), Path(id), generate_body("lamp", false))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Topic too long");
    assert_eq!(body["retryable"], false);

    // A failed generation leaves the session untouched.
    let session = session::get_session(&state, id).await.unwrap();
    assert!(session.topic.is_none());
}

#[tokio::test]
async fn select_applies_action_and_reports_limit() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_session(&state).await;

    let action = SelectionAction::Toggle { keyword: "desk mat (10)".into() };
    let Json(response) = select(State(state), Path(id), Json(action)).await.unwrap();
    assert_eq!(response.limit, SELECTION_LIMIT);
    assert_eq!(response.remaining, SELECTION_LIMIT - 1);
    assert_eq!(response.changed, 1);
    assert_eq!(response.rejected, 0);
    assert!(response.selection.contains("desk mat (10)"));
}

#[tokio::test]
async fn analyze_empty_selection_is_400() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_session(&state).await;
    let (status, Json(body)) = analyze(State(state), Path(id)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E_EMPTY_SELECTION");
}

#[tokio::test]
async fn analyze_returns_selection() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_session(&state).await;
    let action = SelectionAction::Add { keyword: "desk mat".into() };
    select(State(state.clone()), Path(id), Json(action)).await.unwrap();

    let Json(response) = analyze(State(state), Path(id)).await.unwrap();
    assert_eq!(response.keywords, vec!["desk mat"]);
}
