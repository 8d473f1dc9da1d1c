//! Priority-ordered semantic pattern table.
//!
//! Matching is a case-insensitive substring test against the keyword text,
//! so `"top"` also matches `"laptop"` and `"vs"` matches `"canvs"`. The
//! first pattern set (in table order) that matches a keyword claims it.

/// A named set of substrings that buckets keywords into one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticPattern {
    pub name: &'static str,
    pub terms: &'static [&'static str],
}

impl SemanticPattern {
    /// `true` when `normalized` (already lowercased) contains any term.
    #[must_use]
    pub fn matches(&self, normalized: &str) -> bool {
        self.terms.iter().any(|term| normalized.contains(term))
    }
}

/// Static pattern sets that follow the dynamic `General {topic}` group.
pub const SEMANTIC_PATTERNS: &[SemanticPattern] = &[
    SemanticPattern {
        name: "Cheap/Affordable Options",
        terms: &["cheap", "budget", "affordable", "inexpensive"],
    },
    SemanticPattern { name: "Best/Top Rated", terms: &["best", "top", "highest rated"] },
    SemanticPattern { name: "Reviews & Ratings", terms: &["review", "rating", "feedback"] },
    SemanticPattern { name: "Use Cases", terms: &["for ", "use case", "purpose"] },
    SemanticPattern {
        name: "Features & Benefits",
        terms: &[
            "waterproof",
            "wireless",
            "bluetooth",
            "noise cancelling",
            "noise canceling",
            "battery",
            "long lasting",
        ],
    },
    SemanticPattern {
        name: "Comparisons",
        terms: &["vs", "versus", "alternatives", "competitors", "similar"],
    },
    SemanticPattern {
        name: "Shopping",
        terms: &["price", "cost", "discount", "sale", "deal", "buy", "purchase"],
    },
];
