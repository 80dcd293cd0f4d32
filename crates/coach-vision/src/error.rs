//! Error types for video analysis.

use thiserror::Error;

/// Result type for video analysis operations.
pub type VisionResult<T> = Result<T, VisionError>;

/// Errors that can occur during video analysis.
///
/// Per-frame detection misses are NOT errors; they are valid absent
/// observations and never appear here.
#[derive(Debug, Error)]
pub enum VisionError {
    #[error("Video source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Failed to read frame {frame_index}: {message}")]
    FrameRead { frame_index: u64, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VisionError {
    /// Create a source-unavailable error.
    pub fn source_unavailable(message: impl Into<String>) -> Self {
        Self::SourceUnavailable(message.into())
    }

    /// Create a frame-read error.
    pub fn frame_read(frame_index: u64, message: impl Into<String>) -> Self {
        Self::FrameRead {
            frame_index,
            message: message.into(),
        }
    }
}
