//! Transcript analysis orchestrator.
//!
//! Combines the pure rhythm analyzer with the speech-pattern classifier
//! and applies the per-category fallback: any category the classifier
//! leaves at zero (including when the classifier is unavailable or the
//! attempt fails) is re-counted deterministically from the marker
//! catalogs.

use coach_models::{SpeechMetrics, Transcript};
use tracing::{debug, warn};

use crate::classifier::{ClassifierOutcome, SpeechPatternClassifier, SpeechPatterns};
use crate::patterns::{count_markers, MarkerCatalogs};
use crate::rhythm::{analyze_rhythm, RhythmConfig};

/// Configuration for the full transcript analysis.
#[derive(Debug, Clone, Default)]
pub struct SpeechAnalysisConfig {
    /// Pause detection settings.
    pub rhythm: RhythmConfig,

    /// Hesitation and filler catalogs shared by the classifier and the
    /// fallback counter.
    pub catalogs: MarkerCatalogs,
}

impl SpeechAnalysisConfig {
    /// Create config from environment variables, falling back to the
    /// defaults.
    pub fn from_env() -> Self {
        Self {
            rhythm: RhythmConfig::from_env(),
            catalogs: MarkerCatalogs::default(),
        }
    }
}

/// Analyze one transcript: rhythm metrics plus speaking-habit counts.
///
/// Classifier unavailability or failure never fails the analysis; the
/// deterministic fallback carries the affected categories instead.
pub async fn analyze_transcript<C>(
    transcript: &Transcript,
    classifier: &C,
    config: &SpeechAnalysisConfig,
) -> SpeechMetrics
where
    C: SpeechPatternClassifier + ?Sized,
{
    let rhythm = analyze_rhythm(&transcript.words, transcript.duration_sec, &config.rhythm);

    let patterns = if transcript.full_text.trim().is_empty() {
        SpeechPatterns::default()
    } else {
        match classifier
            .classify(&transcript.full_text, &config.catalogs)
            .await
        {
            ClassifierOutcome::Ok(patterns) => patterns,
            ClassifierOutcome::Unavailable => {
                debug!(
                    classifier = classifier.name(),
                    "pattern classifier unavailable, using catalog counting"
                );
                SpeechPatterns::default()
            }
            ClassifierOutcome::Failed(message) => {
                warn!(
                    classifier = classifier.name(),
                    error = %message,
                    "pattern classification failed, using catalog counting"
                );
                SpeechPatterns::default()
            }
        }
    };

    // Each category falls back independently: a zero from the classifier
    // is indistinguishable from a missed detection, so it is re-counted.
    let hesitation_count = if patterns.hesitation_count == 0 {
        count_markers(&transcript.full_text, &config.catalogs.hesitations)
    } else {
        patterns.hesitation_count
    };
    let filler_count = if patterns.filler_count == 0 {
        count_markers(&transcript.full_text, &config.catalogs.fillers)
    } else {
        patterns.filler_count
    };

    let text_for_logic_analysis = patterns
        .cleaned_text
        .unwrap_or_else(|| transcript.full_text.clone());

    SpeechMetrics {
        wpm: rhythm.wpm,
        avg_pause_duration: rhythm.avg_pause_duration,
        long_pause_count: rhythm.long_pause_count,
        pause_events: rhythm.pause_events,
        hesitation_count,
        filler_count,
        hesitation_list: patterns.hesitation_list,
        filler_list: patterns.filler_list,
        raw_text: transcript.full_text.clone(),
        text_for_logic_analysis,
    }
}
