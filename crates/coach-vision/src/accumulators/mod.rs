//! Per-metric signal accumulators.
//!
//! Each accumulator consumes one frame's observation (or its absence)
//! and keeps running counters plus growing sample lists. State is owned
//! exclusively by the analysis run and threaded explicitly through the
//! frame fold; the only cross-frame memory any accumulator holds is the
//! single "previous observation" cell its contract declares.
//!
//! Reduction converts the running state into a rounded metrics block
//! with a rule-based qualitative label. Every reduction tolerates zero
//! frames and zero detections.

pub mod gaze;
pub mod gesture;
pub mod hands;
pub mod head_pose;
pub mod posture;

pub use gaze::GazeAccumulator;
pub use gesture::GestureAccumulator;
pub use hands::HandAccumulator;
pub use head_pose::HeadPoseAccumulator;
pub use posture::PostureAccumulator;
