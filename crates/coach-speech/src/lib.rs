#![deny(unreachable_patterns)]
//! Speech rhythm and speaking-habit analysis for PresentCoach.
//!
//! Takes a word-timestamp transcript and produces `SpeechMetrics`:
//! words per minute, pause structure, and hesitation/filler counts.
//! Semantic pattern detection is pluggable through the
//! `SpeechPatternClassifier` trait, with a deterministic catalog-based
//! fallback when the classifier is unavailable or finds nothing.

pub mod analyze;
pub mod classifier;
pub mod patterns;
pub mod rhythm;

pub use analyze::{analyze_transcript, SpeechAnalysisConfig};
pub use classifier::{ClassifierOutcome, NoopClassifier, SpeechPatternClassifier, SpeechPatterns};
pub use patterns::{count_markers, MarkerCatalogs};
pub use rhythm::{analyze_rhythm, RhythmConfig, RhythmMetrics};
