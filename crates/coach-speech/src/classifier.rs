//! Speech-pattern classifier capability.
//!
//! The semantic classifier (an external text-understanding service) is
//! consumed through `SpeechPatternClassifier`, never implemented here.
//! Outcomes are explicit: `Unavailable` (no credentials/configuration)
//! and `Failed` (transient error) both route the caller to the
//! deterministic fallback; neither is surfaced as an analysis failure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::patterns::MarkerCatalogs;

/// Detected speech patterns from the semantic classifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeechPatterns {
    /// Number of hesitation (trailing-off) markers detected.
    pub hesitation_count: usize,

    /// Number of filler interjections detected.
    pub filler_count: usize,

    /// Detected hesitation instances.
    pub hesitation_list: Vec<String>,

    /// Detected filler instances.
    pub filler_list: Vec<String>,

    /// Transcript text with the detected markers removed, for downstream
    /// logic analysis. None when the classifier did not produce one.
    pub cleaned_text: Option<String>,
}

/// Result of one classification attempt.
#[derive(Debug, Clone)]
pub enum ClassifierOutcome {
    /// Classification succeeded (counts may still be zero).
    Ok(SpeechPatterns),
    /// The classifier is not configured (e.g. no credentials).
    Unavailable,
    /// The classifier was configured but the attempt failed.
    Failed(String),
}

impl ClassifierOutcome {
    /// Successful patterns, if any.
    pub fn patterns(self) -> Option<SpeechPatterns> {
        match self {
            Self::Ok(patterns) => Some(patterns),
            Self::Unavailable | Self::Failed(_) => None,
        }
    }
}

/// Capability interface for semantic speech-pattern detection.
#[async_trait]
pub trait SpeechPatternClassifier: Send + Sync {
    /// Detect hesitation and filler markers in the text against the
    /// given catalogs.
    async fn classify(&self, text: &str, catalogs: &MarkerCatalogs) -> ClassifierOutcome;

    /// Classifier name for logging.
    fn name(&self) -> &'static str;
}

/// Classifier stub that is never available. Used when no external
/// service is configured; the fallback counter then carries the run.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClassifier;

#[async_trait]
impl SpeechPatternClassifier for NoopClassifier {
    async fn classify(&self, _text: &str, _catalogs: &MarkerCatalogs) -> ClassifierOutcome {
        ClassifierOutcome::Unavailable
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_is_unavailable() {
        let classifier = NoopClassifier;
        let outcome = classifier.classify("text", &MarkerCatalogs::default()).await;
        assert!(matches!(outcome, ClassifierOutcome::Unavailable));
        assert!(outcome.patterns().is_none());
    }

    #[test]
    fn test_patterns_parse_from_service_payload() {
        let body = r#"{
            "hesitation_count": 2,
            "filler_count": 1,
            "hesitation_list": ["kind of", "i guess"],
            "filler_list": ["um"],
            "cleaned_text": "so we could start"
        }"#;
        let patterns: SpeechPatterns = serde_json::from_str(body).unwrap();
        assert_eq!(patterns.hesitation_count, 2);
        assert_eq!(patterns.cleaned_text.as_deref(), Some("so we could start"));
    }

    #[test]
    fn test_outcome_patterns_extraction() {
        let patterns = SpeechPatterns {
            hesitation_count: 1,
            ..Default::default()
        };
        assert_eq!(
            ClassifierOutcome::Ok(patterns).patterns().unwrap().hesitation_count,
            1
        );
        assert!(ClassifierOutcome::Failed("timeout".into()).patterns().is_none());
    }
}
