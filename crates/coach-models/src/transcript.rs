//! Word-timestamp transcript types.
//!
//! Transcripts are produced by an external speech-to-text engine and
//! consumed by the speech rhythm analyzer. Word ordering is temporal;
//! start times are assumed non-decreasing but not enforced here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single transcribed word with its time span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WordTimestamp {
    /// The transcribed word text.
    #[serde(rename = "word")]
    pub text: String,

    /// Start time in seconds.
    pub start_sec: f64,

    /// End time in seconds.
    pub end_sec: f64,
}

impl WordTimestamp {
    /// Create a new word timestamp.
    pub fn new(text: impl Into<String>, start_sec: f64, end_sec: f64) -> Self {
        Self {
            text: text.into(),
            start_sec,
            end_sec,
        }
    }

    /// Spoken duration of this word in seconds.
    pub fn duration_sec(&self) -> f64 {
        (self.end_sec - self.start_sec).max(0.0)
    }
}

/// A full transcript: concatenated text, per-word timestamps, and the
/// total spoken duration reported by the speech-to-text engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Transcript {
    /// Concatenated transcript text.
    pub full_text: String,

    /// Per-word timestamps in temporal order.
    pub words: Vec<WordTimestamp>,

    /// Total duration in seconds (end of the last word, or the engine's
    /// reported audio duration when available).
    pub duration_sec: f64,
}

impl Transcript {
    /// Create a transcript from its parts.
    pub fn new(full_text: impl Into<String>, words: Vec<WordTimestamp>, duration_sec: f64) -> Self {
        Self {
            full_text: full_text.into(),
            words,
            duration_sec,
        }
    }

    /// Number of transcribed words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// True when there is nothing to analyze (no words and no duration).
    pub fn is_empty(&self) -> bool {
        self.words.is_empty() && self.duration_sec <= 0.0
    }
}
