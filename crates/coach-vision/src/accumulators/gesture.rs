//! Gesture accumulator: motion energy of the full pose vector.
//!
//! Distinct from the hand accumulator's inter-hand spread: motion energy
//! is a frame-to-frame delta, not a static distance.

use coach_models::GestureMetrics;

use crate::landmarks::PoseLandmarks;
use crate::stats::{mean, round3};

/// Recommended motion-energy band (inclusive on both ends).
const ADEQUATE_MIN: f64 = 0.15;
const ADEQUATE_MAX: f64 = 0.35;

/// Running gesture state over the frame stream.
#[derive(Debug, Default)]
pub struct GestureAccumulator {
    motion_samples: Vec<f64>,
    /// Full landmark vector of the most recent detection. Left untouched
    /// on misses, so a delta can span multiple real frames when detection
    /// drops intermittently.
    prev_points: Option<PoseLandmarks>,
}

impl GestureAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one frame's pose observation.
    pub fn observe(&mut self, pose: Option<&PoseLandmarks>) {
        let Some(pose) = pose else {
            return;
        };

        if let Some(prev) = &self.prev_points {
            self.motion_samples.push(pose.vector_delta(prev));
        }
        self.prev_points = Some(pose.clone());
    }

    /// Reduce to the final gesture block.
    pub fn reduce(self) -> GestureMetrics {
        let motion_energy = round3(mean(&self.motion_samples));

        let evaluation = if (ADEQUATE_MIN..=ADEQUATE_MAX).contains(&motion_energy) {
            "adequate"
        } else {
            "needs adjustment"
        }
        .to_string();

        GestureMetrics {
            motion_energy,
            evaluation,
            interpretation: "Speakers rated most natural gesture regularly but not constantly; \
                             moderate, varied hand and arm motion supports the message."
                .to_string(),
        }
    }
}
