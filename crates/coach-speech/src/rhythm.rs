//! Pause and rhythm analysis over a word-timestamp sequence.
//!
//! Pure and idempotent: the same input always yields the same output,
//! and the input is never mutated.

use coach_models::{PauseEvent, WordTimestamp};
use serde::{Deserialize, Serialize};

/// Round to two decimal places, zeroing non-finite values.
fn round2(value: f64) -> f64 {
    if value.is_finite() {
        (value * 100.0).round() / 100.0
    } else {
        0.0
    }
}

/// Configuration for pause detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RhythmConfig {
    /// Inter-word gap at or above this many seconds counts as a long
    /// pause and emits a `PauseEvent`.
    ///
    /// - Lower values (1.0-1.5s): flags most thinking pauses
    /// - Default (2.0s): only clearly noticeable silences
    /// - Higher values (3.0s+): only dramatic/lost-the-thread pauses
    pub pause_threshold_sec: f64,
}

impl Default for RhythmConfig {
    fn default() -> Self {
        Self {
            pause_threshold_sec: 2.0,
        }
    }
}

impl RhythmConfig {
    /// Create config from environment variables
    /// (`PAUSE_THRESHOLD_SEC`), falling back to the defaults.
    pub fn from_env() -> Self {
        Self {
            pause_threshold_sec: std::env::var("PAUSE_THRESHOLD_SEC")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2.0),
        }
    }

    /// Builder-style setter for the long-pause threshold.
    pub fn with_pause_threshold_sec(mut self, threshold: f64) -> Self {
        self.pause_threshold_sec = threshold.max(0.0);
        self
    }
}

/// Rhythm metrics over one transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct RhythmMetrics {
    /// Words per minute, rounded. Zero when the duration is zero.
    pub wpm: u32,

    /// Mean of ALL positive inter-word gaps (independent of the
    /// long-pause threshold), rounded to two decimals. 0.0 when none.
    pub avg_pause_duration: f64,

    /// Number of long pauses.
    pub long_pause_count: usize,

    /// Long pauses in order of occurrence.
    pub pause_events: Vec<PauseEvent>,
}

/// Compute WPM and pause structure from word timestamps.
///
/// Degenerate input (no words, zero duration) yields zero defaults and
/// never raises a division error.
pub fn analyze_rhythm(
    words: &[WordTimestamp],
    duration_sec: f64,
    config: &RhythmConfig,
) -> RhythmMetrics {
    let wpm = if duration_sec > 0.0 {
        (words.len() as f64 / duration_sec * 60.0).round() as u32
    } else {
        0
    };

    let mut all_positive_gaps: Vec<f64> = Vec::new();
    let mut pause_events: Vec<PauseEvent> = Vec::new();

    for pair in words.windows(2) {
        let gap = pair[1].start_sec - pair[0].end_sec;
        if gap > 0.0 {
            all_positive_gaps.push(gap);
        }
        if gap >= config.pause_threshold_sec {
            pause_events.push(PauseEvent {
                start_sec: round2(pair[0].end_sec),
                end_sec: round2(pair[1].start_sec),
                duration_sec: round2(gap),
            });
        }
    }

    let avg_pause_duration = if all_positive_gaps.is_empty() {
        0.0
    } else {
        round2(all_positive_gaps.iter().sum::<f64>() / all_positive_gaps.len() as f64)
    };

    RhythmMetrics {
        wpm,
        avg_pause_duration,
        long_pause_count: pause_events.len(),
        pause_events,
    }
}
