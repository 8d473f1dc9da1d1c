//! Keyword text / search-volume parsing.
//!
//! A keyword may carry a trailing `(digits)` suffix, e.g.
//! `"wireless headphones (12,400)"`. Thousands separators are stripped before
//! the number is read. Anything that does not match is treated as plain text
//! with a volume of zero; parsing never fails.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A keyword split into its text and search volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub text: String,
    pub search_volume: u64,
}

impl Keyword {
    #[must_use]
    pub fn new(text: impl Into<String>, search_volume: u64) -> Self {
        Self { text: text.into(), search_volume }
    }

    /// Parse a raw keyword string.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match split_volume(raw) {
            Some((text, search_volume)) => Self { text: text.to_owned(), search_volume },
            None => Self { text: raw.to_owned(), search_volume: 0 },
        }
    }

    /// Lowercased text, the form every pattern and token match runs against.
    #[must_use]
    pub fn normalized(&self) -> String {
        self.text.to_lowercase()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text, self.search_volume)
    }
}

/// Return only the keyword text of a raw keyword, dropping any volume suffix.
#[must_use]
pub fn strip_volume(raw: &str) -> &str {
    split_volume(raw).map_or(raw, |(text, _)| text)
}

/// Split `"<text> (<digits>)"` into text and volume.
///
/// At least one whitespace character must precede `(`. Commas may only sit
/// between digit runs (`1,234` but not `12,` or `1,,2`). The text must be
/// non-empty once trailing whitespace is removed.
fn split_volume(raw: &str) -> Option<(&str, u64)> {
    let body = raw.strip_suffix(')')?;
    let open = body.rfind('(')?;
    let digits = &body[open + 1..];

    let well_formed = digits
        .split(',')
        .all(|run| !run.is_empty() && run.chars().all(|c| c.is_ascii_digit()));
    if !well_formed {
        return None;
    }

    let head = &body[..open];
    if !head.ends_with(char::is_whitespace) {
        return None;
    }
    let text = head.trim_end();
    if text.is_empty() {
        return None;
    }

    let cleaned: String = digits.chars().filter(char::is_ascii_digit).collect();
    let volume = cleaned.parse::<u64>().ok()?;
    Some((text, volume))
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
