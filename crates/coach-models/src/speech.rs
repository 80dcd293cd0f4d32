//! Speech rhythm and speaking-habit metrics.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A long pause between two adjacent words.
///
/// Emitted for inter-word gaps that meet or exceed the long-pause
/// threshold; ordered by occurrence. All fields are rounded to two
/// decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PauseEvent {
    /// End of the word preceding the pause, in seconds.
    pub start_sec: f64,

    /// Start of the word following the pause, in seconds.
    pub end_sec: f64,

    /// Pause length in seconds.
    pub duration_sec: f64,
}

/// Speech metrics computed once per transcript; immutable afterward.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SpeechMetrics {
    /// Words per minute, rounded. Zero when the duration is zero.
    pub wpm: u32,

    /// Mean of ALL positive inter-word gaps in seconds (not only the
    /// long ones), rounded to two decimals. Zero when no gaps exist.
    pub avg_pause_duration: f64,

    /// Number of pauses meeting the long-pause threshold.
    pub long_pause_count: usize,

    /// Long pauses in order of occurrence.
    pub pause_events: Vec<PauseEvent>,

    /// Number of hesitation (trailing-off) markers detected.
    pub hesitation_count: usize,

    /// Number of filler interjections detected.
    pub filler_count: usize,

    /// Detected hesitation instances, when the classifier provided them.
    pub hesitation_list: Vec<String>,

    /// Detected filler instances, when the classifier provided them.
    pub filler_list: Vec<String>,

    /// The raw transcript text the classifier was given.
    pub raw_text: String,

    /// Transcript text with detected markers removed, for downstream
    /// logic analysis. Falls back to the raw text when the classifier
    /// produced no cleaned variant.
    pub text_for_logic_analysis: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_metrics_round_trip() {
        let metrics = SpeechMetrics {
            wpm: 120,
            avg_pause_duration: 1.1,
            long_pause_count: 1,
            pause_events: vec![PauseEvent {
                start_sec: 4.0,
                end_sec: 6.5,
                duration_sec: 2.5,
            }],
            hesitation_count: 2,
            filler_count: 3,
            hesitation_list: vec!["kind of".to_string()],
            filler_list: vec!["um".to_string()],
            raw_text: "um so kind of".to_string(),
            text_for_logic_analysis: "so".to_string(),
        };

        let json = serde_json::to_string(&metrics).unwrap();
        let back: SpeechMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(back.wpm, 120);
        assert_eq!(back.pause_events.len(), 1);
        assert_eq!(back.pause_events[0], metrics.pause_events[0]);
    }
}
