//! Shared data models for PresentCoach analysis.
//!
//! This crate provides Serde-serializable types for:
//! - Word-timestamp transcripts and pause events
//! - Speech rhythm metrics (WPM, pauses, fillers)
//! - Video behavioral metrics (gaze, posture, gesture, hands, head pose)

pub mod speech;
pub mod transcript;
pub mod video;

// Re-export common types
pub use speech::{PauseEvent, SpeechMetrics};
pub use transcript::{Transcript, WordTimestamp};
pub use video::{
    GazeMetrics, GestureMetrics, HandMetrics, HeadPoseMetrics, PostureMetrics, TracePoint,
    VideoMetadata, VideoMetrics, ZoneDistribution,
};
