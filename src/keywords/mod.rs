//! Keyword grouping engine.
//!
//! Turns a flat list of keyword strings (optionally suffixed with a
//! `(search volume)`) into named groups for display. Used whenever the
//! keyword service answers with a flat list instead of pre-clustered groups.
//!
//! The engine is pure: no I/O, no shared state, safe to call from any
//! handler concurrently.

pub mod group;
pub mod parse;
pub mod patterns;

pub use group::{KeywordGroup, OTHER_GROUP_NAME, group_keywords, main_topic};
pub use parse::{Keyword, strip_volume};
