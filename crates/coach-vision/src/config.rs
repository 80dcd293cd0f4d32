//! Configuration for the video analysis pipeline.
//!
//! Classification boundaries (zone thirds, evaluation bands) are fixed
//! logic in the accumulators; the values here are the tunable knobs.

use serde::{Deserialize, Serialize};

/// Configuration for one video analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum detector confidence for accepting a landmark set (0.0-1.0).
    ///
    /// Passed through to the landmark detector; detections below this are
    /// treated as absent observations.
    pub min_detection_confidence: f32,

    /// Normalized eye-center displacement on either axis that counts as a
    /// gaze movement between the two most recent detections.
    pub gaze_movement_threshold: f64,

    /// Half-extent of the frontal "center hit" box around frame center.
    ///
    /// Intentionally looser than the 0.33-0.66 zone split: this measures
    /// "roughly facing the camera", not "looking at the center third".
    pub center_box_half_extent: f64,

    /// Approximate number of points kept in the downsampled gaze trace.
    pub trace_target_len: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_detection_confidence: 0.4,
            gaze_movement_threshold: 0.05,
            center_box_half_extent: 0.25,
            trace_target_len: 20,
        }
    }
}

impl AnalysisConfig {
    /// Builder-style setter for the detection confidence threshold.
    pub fn with_min_detection_confidence(mut self, confidence: f32) -> Self {
        self.min_detection_confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Builder-style setter for the gaze movement threshold.
    pub fn with_gaze_movement_threshold(mut self, threshold: f64) -> Self {
        self.gaze_movement_threshold = threshold.max(0.0);
        self
    }

    /// Builder-style setter for the trace length.
    pub fn with_trace_target_len(mut self, len: usize) -> Self {
        self.trace_target_len = len.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert!((config.min_detection_confidence - 0.4).abs() < f32::EPSILON);
        assert!((config.center_box_half_extent - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.trace_target_len, 20);
    }

    #[test]
    fn test_confidence_clamping() {
        let config = AnalysisConfig::default().with_min_detection_confidence(1.5);
        assert!((config.min_detection_confidence - 1.0).abs() < f32::EPSILON);

        let config = AnalysisConfig::default().with_min_detection_confidence(-0.2);
        assert!(config.min_detection_confidence.abs() < f32::EPSILON);
    }

    #[test]
    fn test_trace_len_floor() {
        let config = AnalysisConfig::default().with_trace_target_len(0);
        assert_eq!(config.trace_target_len, 1);
    }
}
