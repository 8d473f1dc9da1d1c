//! Semantic + frequency-based keyword grouping.
//!
//! ALGORITHM
//! =========
//! 1. Parse every raw keyword into text and search volume.
//! 2. Derive a topic label from the most frequent token shared by at least
//!    two keywords.
//! 3. Walk the pattern table in priority order (`General {topic}` first);
//!    each keyword is claimed by the first pattern set that matches it.
//! 4. Cluster the leftovers around their most frequent long tokens
//!    (`{Token} Related`), then sweep the rest into `Other Keywords`.
//! 5. Sort each group by descending volume (stable) and re-attach volumes.
//!
//! Every input keyword lands in exactly one group and no group is empty.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::parse::Keyword;
use super::patterns::SEMANTIC_PATTERNS;

/// Name of the catch-all group for keywords nothing else claimed.
pub const OTHER_GROUP_NAME: &str = "Other Keywords";

/// Topic label used when there are no keywords at all.
const EMPTY_TOPIC: &str = "Keywords";

/// Topic tokens must be longer than this many characters.
const TOPIC_MIN_TOKEN_CHARS: usize = 2;

/// A topic token must appear in at least this many distinct keywords.
const TOPIC_MIN_KEYWORDS: usize = 2;

/// Fallback tokens must be longer than this many characters.
const FALLBACK_MIN_TOKEN_CHARS: usize = 3;

/// At most this many frequent tokens form fallback groups.
const FALLBACK_MAX_TOKENS: usize = 5;

/// A fallback token only forms a group if it claims at least this many.
const FALLBACK_MIN_GROUP_SIZE: usize = 2;

/// A named group of formatted keywords, sorted by descending search volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub name: String,
    pub keywords: Vec<String>,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Partition raw keyword strings into named display groups.
#[must_use]
pub fn group_keywords<S: AsRef<str>>(raw: &[S]) -> Vec<KeywordGroup> {
    let keywords: Vec<Keyword> = raw.iter().map(|k| Keyword::parse(k.as_ref())).collect();
    if keywords.is_empty() {
        return Vec::new();
    }

    let normalized: Vec<String> = keywords.iter().map(Keyword::normalized).collect();
    let topic = main_topic(&keywords);
    let mut claimed = vec![false; keywords.len()];
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();

    // Semantic pass.
    let general_term = topic.to_lowercase();
    let general_name = format!("General {topic}");
    let general = claim(&normalized, &mut claimed, |text| text.contains(general_term.as_str()));
    if !general.is_empty() {
        groups.push((general_name, general));
    }

    for pattern in SEMANTIC_PATTERNS {
        let members = claim(&normalized, &mut claimed, |text| pattern.matches(text));
        if !members.is_empty() {
            groups.push((pattern.name.to_owned(), members));
        }
    }

    // Frequency pass over what is left.
    for token in frequent_leftover_tokens(&normalized, &claimed) {
        let candidates: Vec<usize> = (0..normalized.len())
            .filter(|&i| !claimed[i] && normalized[i].contains(token.as_str()))
            .collect();
        if candidates.len() < FALLBACK_MIN_GROUP_SIZE {
            continue;
        }
        for &i in &candidates {
            claimed[i] = true;
        }
        groups.push((format!("{} Related", capitalize(&token)), candidates));
    }

    let other: Vec<usize> = (0..keywords.len()).filter(|&i| !claimed[i]).collect();
    if !other.is_empty() {
        groups.push((OTHER_GROUP_NAME.to_owned(), other));
    }

    debug!(keywords = keywords.len(), groups = groups.len(), %topic, "grouped keywords");

    groups
        .into_iter()
        .map(|(name, members)| KeywordGroup { name, keywords: format_members(&keywords, members) })
        .collect()
}

// =============================================================================
// TOPIC
// =============================================================================

/// Derive the dynamic topic label for a keyword list.
///
/// Picks the most frequent token (longer than two characters) that appears
/// in at least two keywords; ties go to the token seen first. Falls back to
/// the first word of the first keyword, then to `"Keywords"`.
#[must_use]
pub fn main_topic(keywords: &[Keyword]) -> String {
    let Some(first) = keywords.first() else {
        return EMPTY_TOPIC.to_owned();
    };

    let mut counts = TokenCounts::default();
    for keyword in keywords {
        let normalized = keyword.normalized();
        let mut seen_here: Vec<&str> = Vec::new();
        for token in normalized.split_whitespace() {
            if token.chars().count() <= TOPIC_MIN_TOKEN_CHARS {
                continue;
            }
            let first_in_keyword = !seen_here.contains(&token);
            if first_in_keyword {
                seen_here.push(token);
            }
            counts.record(token, first_in_keyword);
        }
    }

    let best = counts
        .entries
        .iter()
        .filter(|entry| entry.keywords >= TOPIC_MIN_KEYWORDS)
        .fold(None::<&TokenCount>, |best, entry| match best {
            Some(b) if b.occurrences >= entry.occurrences => Some(b),
            _ => Some(entry),
        });

    if let Some(entry) = best {
        return capitalize(&entry.token);
    }

    first
        .text
        .split_whitespace()
        .next()
        .map_or_else(|| EMPTY_TOPIC.to_owned(), capitalize)
}

// =============================================================================
// HELPERS
// =============================================================================

struct TokenCount {
    token: String,
    occurrences: usize,
    keywords: usize,
}

/// Token counters in first-seen order.
#[derive(Default)]
struct TokenCounts {
    entries: Vec<TokenCount>,
    index: HashMap<String, usize>,
}

impl TokenCounts {
    fn record(&mut self, token: &str, first_in_keyword: bool) {
        let slot = match self.index.get(token) {
            Some(&slot) => slot,
            None => {
                self.index.insert(token.to_owned(), self.entries.len());
                self.entries.push(TokenCount { token: token.to_owned(), occurrences: 0, keywords: 0 });
                self.entries.len() - 1
            }
        };
        let entry = &mut self.entries[slot];
        entry.occurrences += 1;
        if first_in_keyword {
            entry.keywords += 1;
        }
    }
}

/// Claim every unclaimed keyword that satisfies `matches`, in input order.
fn claim(normalized: &[String], claimed: &mut [bool], matches: impl Fn(&str) -> bool) -> Vec<usize> {
    let mut members = Vec::new();
    for (i, text) in normalized.iter().enumerate() {
        if !claimed[i] && matches(text) {
            claimed[i] = true;
            members.push(i);
        }
    }
    members
}

/// Up to [`FALLBACK_MAX_TOKENS`] leftover tokens seen more than once, most frequent first.
fn frequent_leftover_tokens(normalized: &[String], claimed: &[bool]) -> Vec<String> {
    let mut counts = TokenCounts::default();
    for (i, text) in normalized.iter().enumerate() {
        if claimed[i] {
            continue;
        }
        for token in text.split_whitespace() {
            if token.chars().count() > FALLBACK_MIN_TOKEN_CHARS {
                counts.record(token, false);
            }
        }
    }

    let mut entries = counts.entries;
    // Stable: equal counts keep first-seen order.
    entries.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
    entries
        .into_iter()
        .filter(|entry| entry.occurrences > 1)
        .take(FALLBACK_MAX_TOKENS)
        .map(|entry| entry.token)
        .collect()
}

fn format_members(keywords: &[Keyword], mut members: Vec<usize>) -> Vec<String> {
    members.sort_by(|&a, &b| keywords[b].search_volume.cmp(&keywords[a].search_volume));
    members.into_iter().map(|i| keywords[i].to_string()).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "group_test.rs"]
mod tests;
