#![deny(unreachable_patterns)]
//! Video behavioral analysis pipeline for PresentCoach.
//!
//! This crate provides:
//! - The `LandmarkDetector` capability trait for pluggable face/pose/hand
//!   detectors
//! - Five per-frame signal accumulators (gaze, posture, gesture, hands,
//!   head pose) and their reduction into `VideoMetrics`
//! - The sequential frame-fold orchestrator
//! - A per-job progress handle for external pollers
//! - An OpenCV-backed video file source behind the `opencv` feature

pub mod accumulators;
pub mod config;
pub mod detector;
pub mod error;
pub mod landmarks;
pub mod pipeline;
pub mod progress;
pub mod source;
pub mod stats;

pub use accumulators::{
    GazeAccumulator, GestureAccumulator, HandAccumulator, HeadPoseAccumulator, PostureAccumulator,
};
pub use config::AnalysisConfig;
pub use detector::{observe_frame, LandmarkDetector, NullDetector};
pub use error::{VisionError, VisionResult};
pub use landmarks::{FaceLandmarks, FrameObservation, HandLandmarks, Point, PoseLandmarks};
pub use pipeline::analyze_source;
#[cfg(feature = "opencv")]
pub use pipeline::analyze_video;
pub use progress::ProgressHandle;
pub use source::{FrameSource, SourceMetadata, VecFrameSource};
#[cfg(feature = "opencv")]
pub use source::VideoFileSource;
