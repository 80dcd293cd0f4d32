//! Video behavioral metrics.
//!
//! Output of the frame analysis pipeline. All numeric fields are finite
//! (non-finite intermediates are clamped at the pipeline boundary) and
//! rounded for stable serialization. Each block carries a short
//! qualitative evaluation derived from fixed thresholds.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Source video metadata attached to the metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VideoMetadata {
    /// Frames per second of the source.
    pub fps: f64,

    /// Frame width in pixels.
    pub width: u32,

    /// Frame height in pixels.
    pub height: u32,

    /// Total frames processed.
    pub frame_count: u64,

    /// Duration in seconds (frame_count / fps; zero when fps is zero).
    pub duration_sec: f64,
}

/// A downsampled gaze trace sample in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TracePoint {
    pub x: f64,
    pub y: f64,
}

/// Share of gaze detections falling into each horizontal third of the
/// frame. Sums to ~1.0 whenever at least one face was detected, and to
/// 0.0 otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ZoneDistribution {
    pub left: f64,
    pub center: f64,
    pub right: f64,
}

impl ZoneDistribution {
    /// Sum of the three shares.
    pub fn sum(&self) -> f64 {
        self.left + self.center + self.right
    }
}

/// Gaze behavior over the whole video.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GazeMetrics {
    /// Fraction of ALL frames where the eye center sat in the frontal
    /// box around frame center. Frames without a face detection count in
    /// the denominator, diluting the ratio.
    pub center_ratio: f64,

    /// Horizontal zone distribution, normalized over detections only.
    pub distribution: ZoneDistribution,

    /// Gaze movements per second (eye-center jumps beyond the movement
    /// threshold between the two most recent detections).
    pub movement_rate_per_sec: f64,

    /// Downsampled eye-center trace (~20 points) for visualization.
    pub trace: Vec<TracePoint>,

    /// Qualitative interpretation derived from the center ratio.
    pub interpretation: String,
}

/// Posture stability over the whole video.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PostureMetrics {
    /// Stability score in [0, 1]; 1.0 means no measurable sway.
    pub stability: f64,

    /// Population standard deviation of the shoulder-center x positions.
    pub shoulder_std_x: f64,

    /// Population standard deviation of the shoulder-center y positions.
    pub shoulder_std_y: f64,

    /// Mean absolute shoulder roll in degrees.
    pub mean_roll_deg: f64,

    /// Qualitative evaluation derived from the stability score.
    pub evaluation: String,
}

/// Gesture activity over the whole video.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GestureMetrics {
    /// Mean frame-to-frame Euclidean change of the full pose landmark
    /// vector, a proxy for gesture activity.
    pub motion_energy: f64,

    /// Qualitative evaluation against the recommended activity band.
    pub evaluation: String,

    /// Fixed remark about natural gesture frequency.
    pub interpretation: String,
}

/// Hand visibility and spread over the whole video.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HandMetrics {
    /// Fraction of all frames with at least one hand visible.
    pub visibility_ratio: f64,

    /// Mean distance between the two hand centroids when both hands were
    /// visible. A proxy for gesture size, not movement over time.
    pub inter_hand_spread: f64,

    /// Qualitative evaluation against the recommended visibility band.
    pub evaluation: String,

    /// Fixed remark citing the recommended visibility band.
    pub interpretation: String,
}

/// Head orientation over the whole video.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HeadPoseMetrics {
    /// Mean absolute head roll in degrees, from the eye-corner vector.
    pub roll_mean_deg: f64,

    /// Mean absolute yaw proxy in degrees, from the nose offset relative
    /// to frame center. An approximation, not a 3D pose estimate.
    pub yaw_mean_deg: f64,

    /// Qualitative evaluation derived from the roll/yaw means.
    pub evaluation: String,

    /// Fixed interpretation text.
    pub interpretation: String,
}

/// Aggregate behavioral metrics for one analyzed video.
///
/// Produced once when the frame stream is exhausted; immutable afterward.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct VideoMetrics {
    /// Source metadata.
    pub metadata: VideoMetadata,

    /// Gaze block.
    pub gaze: GazeMetrics,

    /// Posture block.
    pub posture: PostureMetrics,

    /// Gesture block.
    pub gesture: GestureMetrics,

    /// Hand block.
    pub hands: HandMetrics,

    /// Head-pose block.
    pub head_pose: HeadPoseMetrics,
}
