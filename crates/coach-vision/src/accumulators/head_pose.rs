//! Head-pose accumulator: roll from the eye line, yaw from nose offset.
//!
//! The yaw value is a deliberate simplification: it measures the nose
//! tip's horizontal offset from frame center, not a 3D head pose. It
//! tracks "how far off-center is the face pointing" well enough for
//! coaching feedback.

use coach_models::HeadPoseMetrics;

use crate::landmarks::FaceLandmarks;
use crate::stats::{mean, round2};

/// Mean roll below this reads as level.
const ROLL_STABLE_DEG: f64 = 5.0;
/// Mean yaw proxy below this reads as centered.
const YAW_STABLE_DEG: f64 = 15.0;

/// Running head-pose state over the frame stream.
#[derive(Debug, Default)]
pub struct HeadPoseAccumulator {
    abs_rolls_deg: Vec<f64>,
    abs_yaws_deg: Vec<f64>,
}

impl HeadPoseAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one frame's face observation.
    pub fn observe(&mut self, face: Option<&FaceLandmarks>) {
        let Some(face) = face else {
            return;
        };

        let dy = face.right_eye_corner.y - face.left_eye_corner.y;
        let dx = face.right_eye_corner.x - face.left_eye_corner.x;
        self.abs_rolls_deg.push(dy.atan2(dx).to_degrees().abs());

        let yaw = (face.nose_tip.x - 0.5).atan2(0.5).to_degrees();
        self.abs_yaws_deg.push(yaw.abs());
    }

    /// Reduce to the final head-pose block.
    pub fn reduce(self) -> HeadPoseMetrics {
        let roll_mean_deg = round2(mean(&self.abs_rolls_deg));
        let yaw_mean_deg = round2(mean(&self.abs_yaws_deg));

        let evaluation = if roll_mean_deg < ROLL_STABLE_DEG && yaw_mean_deg < YAW_STABLE_DEG {
            "stable"
        } else {
            "imbalanced"
        }
        .to_string();

        HeadPoseMetrics {
            roll_mean_deg,
            yaw_mean_deg,
            evaluation,
            interpretation: "A level head with the face oriented toward the camera reads as \
                             attentive; sustained tilt or turn pulls focus from the message."
                .to_string(),
        }
    }
}
