use super::*;
use crate::keywords::KeywordGroup;
use crate::selection::SELECTION_LIMIT;
use crate::state::test_helpers;

fn add(keyword: &str) -> SelectionAction {
    SelectionAction::Add { keyword: keyword.to_owned() }
}

#[tokio::test]
async fn create_then_get_session() {
    let state = test_helpers::test_app_state();
    let created = create_session(&state).await;
    let fetched = get_session(&state, created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_unknown_session_is_not_found() {
    let state = test_helpers::test_app_state();
    let id = Uuid::new_v4();
    let err = get_session(&state, id).await.unwrap_err();
    assert!(matches!(err, SessionError::NotFound(missing) if missing == id));
    assert_eq!(err.error_code(), "E_SESSION_NOT_FOUND");
}

#[tokio::test]
async fn apply_selection_persists_in_session() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_session(&state).await;

    let (snapshot, outcome) = apply_selection(&state, id, add("desk mat (10)")).await.unwrap();
    assert_eq!(outcome.changed, 1);
    assert_eq!(snapshot.selection.keywords(), ["desk mat (10)"]);

    let fetched = get_session(&state, id).await.unwrap();
    assert!(fetched.selection.contains("desk mat (10)"));
}

#[tokio::test]
async fn apply_selection_respects_limit() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_session(&state).await;
    for i in 0..SELECTION_LIMIT {
        apply_selection(&state, id, add(&format!("k{i}"))).await.unwrap();
    }

    let (snapshot, outcome) = apply_selection(&state, id, add("overflow")).await.unwrap();
    assert_eq!(outcome.rejected, 1);
    assert_eq!(snapshot.selection.len(), SELECTION_LIMIT);
}

#[tokio::test]
async fn store_generated_keeps_selection() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_session(&state).await;
    apply_selection(&state, id, add("old pick")).await.unwrap();

    let generated = GeneratedKeywords {
        topic: "lamp".into(),
        keywords: vec!["lamp (1)".into()],
        groups: vec![KeywordGroup { name: "General Lamp".into(), keywords: vec!["lamp (1)".into()] }],
    };
    let session = store_generated(&state, id, generated).await.unwrap();
    assert_eq!(session.topic.as_deref(), Some("lamp"));
    assert_eq!(session.groups.len(), 1);
    assert!(session.selection.contains("old pick"));
}

#[tokio::test]
async fn analyze_requires_selection() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_session(&state).await;
    let err = analyze_selection(&state, id).await.unwrap_err();
    assert!(matches!(err, SessionError::EmptySelection));
}

#[tokio::test]
async fn analyze_records_submitted_keywords() {
    let state = test_helpers::test_app_state();
    let id = test_helpers::seed_session(&state).await;
    apply_selection(&state, id, add("a")).await.unwrap();
    apply_selection(&state, id, add("b")).await.unwrap();

    let submitted = analyze_selection(&state, id).await.unwrap();
    assert_eq!(submitted, vec!["a", "b"]);
    let session = get_session(&state, id).await.unwrap();
    assert_eq!(session.analyzed, Some(vec!["a".to_owned(), "b".to_owned()]));
}
