//! Marker catalogs and the deterministic fallback counter.
//!
//! The fallback is intentionally crude: literal non-overlapping
//! substring counting with no word-boundary or morphological awareness
//! ("um" inside "umbrella" counts). That imprecision is an accepted
//! approximation kept for parity with the semantic classifier path, not
//! a bug to fix; tests pin it down explicitly.

use serde::{Deserialize, Serialize};

/// Default hesitation (trailing-off) patterns.
const DEFAULT_HESITATIONS: &[&str] = &[
    "kind of",
    "sort of",
    "i guess",
    "or something",
    "and stuff",
    "you know what i mean",
    "if that makes sense",
];

/// Default filler interjections.
const DEFAULT_FILLERS: &[&str] = &[
    "um", "uh", "er", "like,", "you know", "i mean", "actually", "basically",
];

/// The two fixed marker catalogs the classifier and the fallback share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerCatalogs {
    /// Hesitation turn-ending patterns.
    pub hesitations: Vec<String>,
    /// Filler interjections.
    pub fillers: Vec<String>,
}

impl Default for MarkerCatalogs {
    fn default() -> Self {
        Self {
            hesitations: DEFAULT_HESITATIONS.iter().map(|s| s.to_string()).collect(),
            fillers: DEFAULT_FILLERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MarkerCatalogs {
    /// Create catalogs from custom marker lists.
    pub fn new(hesitations: Vec<String>, fillers: Vec<String>) -> Self {
        Self {
            hesitations,
            fillers,
        }
    }
}

/// Count non-overlapping literal occurrences of `needle` in `haystack`,
/// case-insensitively.
fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack
        .to_lowercase()
        .matches(&needle.to_lowercase())
        .count()
}

/// Sum occurrences of every marker in a catalog against the raw text.
pub fn count_markers(text: &str, markers: &[String]) -> usize {
    markers
        .iter()
        .map(|marker| count_occurrences(text, marker))
        .sum()
}
