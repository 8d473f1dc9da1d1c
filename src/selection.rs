//! Selected-keyword state.
//!
//! DESIGN
//! ======
//! The widget's selection is an insertion-ordered set capped at
//! [`SELECTION_LIMIT`] entries. All mutations go through
//! [`SelectionState::apply`] with a serializable [`SelectionAction`], so the
//! cap and clear-all rules can be exercised without any UI.
//!
//! Unselecting is always allowed; selecting past the cap is silently
//! refused and reported back in [`ApplyOutcome::rejected`].

use serde::{Deserialize, Serialize};

use crate::keywords::strip_volume;

pub const SELECTION_LIMIT: usize = 50;

/// A single update to the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SelectionAction {
    /// Select if absent, unselect if present.
    Toggle { keyword: String },
    Add { keyword: String },
    Remove { keyword: String },
    Clear,
    /// Group checkbox: unselect the whole group if any member is selected,
    /// otherwise select members in order until the cap is hit.
    ToggleGroup { keywords: Vec<String> },
}

/// What an applied action did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplyOutcome {
    /// Keywords added or removed.
    pub changed: usize,
    /// Keywords that could not be added because the selection was full.
    pub rejected: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected: Vec<String>,
}

impl SelectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.selected
    }

    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.selected.iter().any(|k| k == keyword)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.selected.len() >= SELECTION_LIMIT
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        SELECTION_LIMIT.saturating_sub(self.selected.len())
    }

    /// Apply one action and report what changed.
    pub fn apply(&mut self, action: SelectionAction) -> ApplyOutcome {
        match action {
            SelectionAction::Toggle { keyword } => {
                if self.contains(&keyword) {
                    self.remove(&keyword)
                } else {
                    self.add(keyword)
                }
            }
            SelectionAction::Add { keyword } => self.add(keyword),
            SelectionAction::Remove { keyword } => self.remove(&keyword),
            SelectionAction::Clear => {
                let changed = self.selected.len();
                self.selected.clear();
                ApplyOutcome { changed, rejected: 0 }
            }
            SelectionAction::ToggleGroup { keywords } => self.toggle_group(keywords),
        }
    }

    /// Topic text built from the selection: volumes stripped, comma joined.
    #[must_use]
    pub fn derived_topic(&self) -> String {
        self.selected
            .iter()
            .map(|k| strip_volume(k).trim())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn add(&mut self, keyword: String) -> ApplyOutcome {
        if self.contains(&keyword) {
            return ApplyOutcome::default();
        }
        if self.is_full() {
            return ApplyOutcome { changed: 0, rejected: 1 };
        }
        self.selected.push(keyword);
        ApplyOutcome { changed: 1, rejected: 0 }
    }

    fn remove(&mut self, keyword: &str) -> ApplyOutcome {
        let before = self.selected.len();
        self.selected.retain(|k| k != keyword);
        ApplyOutcome { changed: before - self.selected.len(), rejected: 0 }
    }

    fn toggle_group(&mut self, keywords: Vec<String>) -> ApplyOutcome {
        let any_selected = keywords.iter().any(|k| self.contains(k));
        if any_selected {
            let before = self.selected.len();
            self.selected.retain(|k| !keywords.contains(k));
            return ApplyOutcome { changed: before - self.selected.len(), rejected: 0 };
        }

        let mut outcome = ApplyOutcome::default();
        for keyword in keywords {
            let step = self.add(keyword);
            outcome.changed += step.changed;
            outcome.rejected += step.rejected;
        }
        outcome
    }
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;
