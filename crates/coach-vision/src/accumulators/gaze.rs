//! Gaze accumulator: frontal ratio, zone distribution, movement rate.
//!
//! Two deliberately distinct definitions of "center" are in play:
//! - the frontal hit box (|x-0.5| and |y-0.5| under the configured
//!   half-extent, default 0.25) answers "is the speaker roughly facing
//!   the camera" and feeds `center_ratio`;
//! - the horizontal thirds split (0.33 / 0.66) answers "which third of
//!   the frame is the gaze in" and feeds the zone distribution.
//! They overlap but measure different things; do not unify them.

use coach_models::{GazeMetrics, TracePoint, ZoneDistribution};

use crate::config::AnalysisConfig;
use crate::landmarks::{FaceLandmarks, Point};
use crate::stats::{round2, safe_ratio};

/// Boundary between the left and center thirds.
const ZONE_LEFT_BOUNDARY: f64 = 0.33;
/// Boundary between the center and right thirds.
const ZONE_RIGHT_BOUNDARY: f64 = 0.66;
/// Center ratio below this suggests the speaker rarely faces the camera.
const LOW_FRONTAL_THRESHOLD: f64 = 0.15;

/// Running gaze state over the frame stream.
#[derive(Debug, Default)]
pub struct GazeAccumulator {
    center_hits: u64,
    zone_left: u64,
    zone_center: u64,
    zone_right: u64,
    movement_count: u64,
    /// Eye center of the most recent detection, which may be several
    /// video frames back when detection drops intermittently.
    prev_eye_center: Option<Point>,
    trace: Vec<Point>,
}

impl GazeAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one frame's face observation. Absent detections leave
    /// every counter and the previous eye center untouched.
    pub fn observe(&mut self, face: Option<&FaceLandmarks>, config: &AnalysisConfig) {
        let Some(face) = face else {
            return;
        };

        let eye_center = face.eye_center();

        if eye_center.x < ZONE_LEFT_BOUNDARY {
            self.zone_left += 1;
        } else if eye_center.x < ZONE_RIGHT_BOUNDARY {
            self.zone_center += 1;
        } else {
            self.zone_right += 1;
        }

        let half = config.center_box_half_extent;
        if (eye_center.x - 0.5).abs() < half && (eye_center.y - 0.5).abs() < half {
            self.center_hits += 1;
        }

        if let Some(prev) = self.prev_eye_center {
            let threshold = config.gaze_movement_threshold;
            if (eye_center.x - prev.x).abs() > threshold
                || (eye_center.y - prev.y).abs() > threshold
            {
                self.movement_count += 1;
            }
        }
        // Overwrite unconditionally so movement is measured between the
        // two most recent detections, not adjacent video frames.
        self.prev_eye_center = Some(eye_center);

        self.trace.push(eye_center);
    }

    /// Number of frames that produced a zone classification.
    fn detection_count(&self) -> u64 {
        self.zone_left + self.zone_center + self.zone_right
    }

    /// Reduce to the final gaze block.
    ///
    /// `total_frames` is the full frame count, detections or not: frames
    /// without a face dilute `center_ratio` by design.
    pub fn reduce(self, total_frames: u64, duration_sec: f64, config: &AnalysisConfig) -> GazeMetrics {
        let detections = self.detection_count() as f64;
        let center_ratio = round2(safe_ratio(self.center_hits as f64, total_frames as f64));

        let distribution = ZoneDistribution {
            left: round2(safe_ratio(self.zone_left as f64, detections)),
            center: round2(safe_ratio(self.zone_center as f64, detections)),
            right: round2(safe_ratio(self.zone_right as f64, detections)),
        };

        let movement_rate_per_sec = round2(safe_ratio(self.movement_count as f64, duration_sec));

        let interpretation = if center_ratio < LOW_FRONTAL_THRESHOLD {
            "Low frontal gaze; delivery may be oriented toward a live audience rather than the camera."
        } else {
            "Frontal gaze holds well; suitable for camera-facing delivery."
        }
        .to_string();

        GazeMetrics {
            center_ratio,
            distribution,
            movement_rate_per_sec,
            trace: downsample_trace(&self.trace, config.trace_target_len),
            interpretation,
        }
    }
}

/// Take every Nth trace point so the output holds about `target` points
/// regardless of video length.
fn downsample_trace(trace: &[Point], target: usize) -> Vec<TracePoint> {
    if trace.is_empty() {
        return Vec::new();
    }
    let step = (trace.len() / target.max(1)).max(1);
    trace
        .iter()
        .step_by(step)
        .map(|p| TracePoint { x: p.x, y: p.y })
        .collect()
}
