use super::*;

fn kw(s: &str) -> String {
    s.to_owned()
}

fn filled(n: usize) -> SelectionState {
    let mut state = SelectionState::new();
    for i in 0..n {
        state.apply(SelectionAction::Add { keyword: format!("keyword {i}") });
    }
    state
}

#[test]
fn toggle_adds_then_removes() {
    let mut state = SelectionState::new();
    let added = state.apply(SelectionAction::Toggle { keyword: kw("desk lamp (10)") });
    assert_eq!(added, ApplyOutcome { changed: 1, rejected: 0 });
    assert!(state.contains("desk lamp (10)"));

    let removed = state.apply(SelectionAction::Toggle { keyword: kw("desk lamp (10)") });
    assert_eq!(removed.changed, 1);
    assert!(state.is_empty());
}

#[test]
fn add_is_idempotent() {
    let mut state = SelectionState::new();
    state.apply(SelectionAction::Add { keyword: kw("a") });
    let again = state.apply(SelectionAction::Add { keyword: kw("a") });
    assert_eq!(again, ApplyOutcome::default());
    assert_eq!(state.len(), 1);
}

#[test]
fn selection_keeps_insertion_order() {
    let mut state = SelectionState::new();
    for k in ["c", "a", "b"] {
        state.apply(SelectionAction::Add { keyword: kw(k) });
    }
    assert_eq!(state.keywords(), ["c", "a", "b"]);
}

#[test]
fn add_past_limit_is_rejected() {
    let mut state = filled(SELECTION_LIMIT);
    assert!(state.is_full());
    assert_eq!(state.remaining(), 0);

    let outcome = state.apply(SelectionAction::Add { keyword: kw("one more") });
    assert_eq!(outcome, ApplyOutcome { changed: 0, rejected: 1 });
    assert_eq!(state.len(), SELECTION_LIMIT);

    let toggled = state.apply(SelectionAction::Toggle { keyword: kw("one more") });
    assert_eq!(toggled.rejected, 1);
    assert!(!state.contains("one more"));
}

#[test]
fn remove_allowed_when_full() {
    let mut state = filled(SELECTION_LIMIT);
    let outcome = state.apply(SelectionAction::Remove { keyword: kw("keyword 0") });
    assert_eq!(outcome.changed, 1);
    assert_eq!(state.remaining(), 1);
}

#[test]
fn remove_missing_is_noop() {
    let mut state = filled(3);
    let outcome = state.apply(SelectionAction::Remove { keyword: kw("nope") });
    assert_eq!(outcome, ApplyOutcome::default());
    assert_eq!(state.len(), 3);
}

#[test]
fn clear_empties_selection() {
    let mut state = filled(7);
    let outcome = state.apply(SelectionAction::Clear);
    assert_eq!(outcome.changed, 7);
    assert!(state.is_empty());
}

#[test]
fn toggle_group_selects_all_when_none_selected() {
    let mut state = SelectionState::new();
    let outcome = state.apply(SelectionAction::ToggleGroup { keywords: vec![kw("a"), kw("b"), kw("c")] });
    assert_eq!(outcome, ApplyOutcome { changed: 3, rejected: 0 });
    assert_eq!(state.keywords(), ["a", "b", "c"]);
}

#[test]
fn toggle_group_with_partial_selection_unselects_group() {
    let mut state = SelectionState::new();
    state.apply(SelectionAction::Add { keyword: kw("outside") });
    state.apply(SelectionAction::Add { keyword: kw("b") });

    let outcome = state.apply(SelectionAction::ToggleGroup { keywords: vec![kw("a"), kw("b"), kw("c")] });
    assert_eq!(outcome.changed, 1);
    assert_eq!(state.keywords(), ["outside"]);
}

#[test]
fn toggle_group_fills_up_to_limit_in_order() {
    let mut state = filled(SELECTION_LIMIT - 2);
    let outcome = state.apply(SelectionAction::ToggleGroup { keywords: vec![kw("x"), kw("y"), kw("z")] });
    assert_eq!(outcome, ApplyOutcome { changed: 2, rejected: 1 });
    assert!(state.contains("x"));
    assert!(state.contains("y"));
    assert!(!state.contains("z"));
    assert!(state.is_full());
}

#[test]
fn derived_topic_strips_volumes() {
    let mut state = SelectionState::new();
    state.apply(SelectionAction::Add { keyword: kw("standing desk (1,200)") });
    state.apply(SelectionAction::Add { keyword: kw("desk mat") });
    assert_eq!(state.derived_topic(), "standing desk, desk mat");
}

#[test]
fn action_json_shape() {
    let action: SelectionAction = serde_json::from_str(r#"{"action":"toggle","keyword":"desk mat"}"#).unwrap();
    assert_eq!(action, SelectionAction::Toggle { keyword: kw("desk mat") });

    let action: SelectionAction = serde_json::from_str(r#"{"action":"clear"}"#).unwrap();
    assert_eq!(action, SelectionAction::Clear);

    let action: SelectionAction =
        serde_json::from_str(r#"{"action":"toggle_group","keywords":["a","b"]}"#).unwrap();
    assert_eq!(action, SelectionAction::ToggleGroup { keywords: vec![kw("a"), kw("b")] });
}
