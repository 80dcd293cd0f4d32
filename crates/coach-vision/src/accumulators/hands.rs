//! Hand accumulator: visibility ratio and inter-hand spread.
//!
//! "Spread" is the distance between the two hand centroids within one
//! frame, a proxy for gesture size. It is not movement over time; that
//! is the gesture accumulator's motion energy.

use coach_models::HandMetrics;

use crate::landmarks::HandLandmarks;
use crate::stats::{mean, round2, round3, safe_ratio};

/// Recommended visibility band (inclusive on both ends).
const BALANCED_MIN: f64 = 0.4;
const BALANCED_MAX: f64 = 0.9;

/// Running hand state over the frame stream.
#[derive(Debug, Default)]
pub struct HandAccumulator {
    visible_frames: u64,
    spread_samples: Vec<f64>,
}

impl HandAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one frame's hand observations (zero to two hands).
    pub fn observe(&mut self, hands: &[HandLandmarks]) {
        if !hands.is_empty() {
            self.visible_frames += 1;
        }

        if hands.len() == 2 {
            if let (Some(a), Some(b)) = (hands[0].centroid(), hands[1].centroid()) {
                self.spread_samples.push(a.distance_to(&b));
            }
        }
    }

    /// Reduce to the final hand block.
    pub fn reduce(self, total_frames: u64) -> HandMetrics {
        let visibility_ratio = round2(safe_ratio(self.visible_frames as f64, total_frames as f64));

        let evaluation = if visibility_ratio < BALANCED_MIN {
            "too little"
        } else if visibility_ratio > BALANCED_MAX {
            "too much"
        } else {
            "balanced"
        }
        .to_string();

        HandMetrics {
            visibility_ratio,
            inter_hand_spread: round3(mean(&self.spread_samples)),
            evaluation,
            interpretation: "Hands visible in roughly 40-90% of the delivery reads as open and \
                             engaged without distracting from the content."
                .to_string(),
        }
    }
}
