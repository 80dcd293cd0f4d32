//! Posture accumulator: shoulder-center spread and shoulder roll.

use coach_models::PostureMetrics;

use crate::landmarks::PoseLandmarks;
use crate::stats::{mean, population_std, round2, round3};

/// Stability above this reads as a stable stance.
const STABLE_THRESHOLD: f64 = 0.7;
/// Roll contribution is normalized by this many degrees.
const ROLL_NORMALIZER_DEG: f64 = 45.0;

/// Running posture state over the frame stream.
#[derive(Debug, Default)]
pub struct PostureAccumulator {
    center_xs: Vec<f64>,
    center_ys: Vec<f64>,
    abs_rolls_deg: Vec<f64>,
}

impl PostureAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one frame's pose observation.
    pub fn observe(&mut self, pose: Option<&PoseLandmarks>) {
        let Some(pose) = pose else {
            return;
        };

        let center = pose.shoulder_center();
        self.center_xs.push(center.x);
        self.center_ys.push(center.y);

        let dy = pose.right_shoulder.y - pose.left_shoulder.y;
        let dx = pose.right_shoulder.x - pose.left_shoulder.x;
        self.abs_rolls_deg.push(shoulder_roll_deg(dy, dx).abs());
    }

    /// Reduce to the final posture block.
    pub fn reduce(self) -> PostureMetrics {
        let std_x = population_std(&self.center_xs);
        let std_y = population_std(&self.center_ys);
        let mean_roll = mean(&self.abs_rolls_deg);

        let stability = (1.0 - (std_x + std_y + mean_roll / ROLL_NORMALIZER_DEG)).clamp(0.0, 1.0);

        let evaluation = if stability > STABLE_THRESHOLD {
            "Stance is stable."
        } else {
            "Visible swaying; try anchoring your weight evenly."
        }
        .to_string();

        PostureMetrics {
            stability: round2(stability),
            shoulder_std_x: round3(std_x),
            shoulder_std_y: round3(std_y),
            mean_roll_deg: round2(mean_roll),
            evaluation,
        }
    }
}

/// Shoulder-line angle in degrees, wrapped into (-90, 90].
///
/// A line has two angle representations 180 degrees apart; wrapping
/// removes that ambiguity so left-to-right and right-to-left shoulder
/// orderings produce the same roll.
fn shoulder_roll_deg(dy: f64, dx: f64) -> f64 {
    let mut deg = dy.atan2(dx).to_degrees();
    if deg > 90.0 {
        deg -= 180.0;
    } else if deg <= -90.0 {
        deg += 180.0;
    }
    deg
}
