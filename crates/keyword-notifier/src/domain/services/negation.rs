//! Negation guard
//!
//! Known limitation: this is a fixed heuristic for a single keyword. Messages
//! saying "not dd" or "no dd" are suppressed whichever keyword triggered the
//! match. There is no per-keyword negation and the phrase list is not
//! configurable.

use once_cell::sync::Lazy;
use regex::Regex;

static DD_NEGATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:not|no)\s+dd\b").expect("Invalid negation pattern"));

/// Vetoes matches on explicit negation of "dd"
pub struct NegationGuard;

impl NegationGuard {
    /// Whether `content` contains "not dd" / "no dd" (any case, any whitespace run)
    pub fn vetoes(content: &str) -> bool {
        DD_NEGATION.is_match(content)
    }
}
