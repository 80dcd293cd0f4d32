//! Frame source abstraction.
//!
//! The pipeline folds over any `FrameSource`; the bundled OpenCV-backed
//! file source is behind the `opencv` feature so the core stays buildable
//! without system OpenCV.

use serde::{Deserialize, Serialize};

use crate::error::VisionResult;
use crate::stats::safe_ratio;

/// Static properties of a video source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Frames per second.
    pub fps: f64,
    /// Total frame count as reported by the container. May be zero for
    /// streams that do not report it; the pipeline tracks the actual
    /// count itself.
    pub frame_count: u64,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

impl SourceMetadata {
    /// Duration in seconds (frame_count / fps; zero when fps is zero).
    pub fn duration_sec(&self) -> f64 {
        safe_ratio(self.frame_count as f64, self.fps)
    }
}

/// A readable video source yielding sequential decoded color frames.
///
/// Implementations must release decoder resources when dropped, on every
/// exit path including early failure.
pub trait FrameSource {
    /// The decoded frame type handed to the landmark detector.
    type Frame;

    /// Source properties, available before the first frame is read.
    fn metadata(&self) -> SourceMetadata;

    /// Read the next frame. `Ok(None)` signals stream exhaustion.
    fn next_frame(&mut self) -> VisionResult<Option<Self::Frame>>;
}

/// An in-memory frame source, mainly for tests and pre-decoded input.
pub struct VecFrameSource<F> {
    metadata: SourceMetadata,
    frames: std::vec::IntoIter<F>,
}

impl<F> VecFrameSource<F> {
    /// Create a source over pre-decoded frames.
    pub fn new(metadata: SourceMetadata, frames: Vec<F>) -> Self {
        Self {
            metadata,
            frames: frames.into_iter(),
        }
    }
}

impl<F> FrameSource for VecFrameSource<F> {
    type Frame = F;

    fn metadata(&self) -> SourceMetadata {
        self.metadata
    }

    fn next_frame(&mut self) -> VisionResult<Option<F>> {
        Ok(self.frames.next())
    }
}

/// OpenCV-backed video file source.
#[cfg(feature = "opencv")]
pub use self::opencv_source::VideoFileSource;

#[cfg(feature = "opencv")]
mod opencv_source {
    use std::path::Path;

    use opencv::prelude::{MatTraitConst, VideoCaptureTrait, VideoCaptureTraitConst};
    use opencv::videoio::{
        VideoCapture, CAP_ANY, CAP_PROP_FPS, CAP_PROP_FRAME_COUNT, CAP_PROP_FRAME_HEIGHT,
        CAP_PROP_FRAME_WIDTH,
    };

    use super::{FrameSource, SourceMetadata};
    use crate::error::{VisionError, VisionResult};

    /// Sequential decoded frames from a video file on disk.
    pub struct VideoFileSource {
        capture: VideoCapture,
        metadata: SourceMetadata,
        frames_read: u64,
    }

    impl VideoFileSource {
        /// Open a video file. Fails fast with `SourceUnavailable` when the
        /// container cannot be opened.
        pub fn open(path: &Path) -> VisionResult<Self> {
            let mut capture = VideoCapture::from_file(path.to_str().unwrap_or(""), CAP_ANY)
                .map_err(|e| VisionError::source_unavailable(format!("open video: {e}")))?;

            if !capture.is_opened().unwrap_or(false) {
                capture.release().ok();
                return Err(VisionError::source_unavailable(format!(
                    "cannot open video: {}",
                    path.display()
                )));
            }

            let prop = |id: i32| capture.get(id).unwrap_or(0.0);
            let metadata = SourceMetadata {
                fps: prop(CAP_PROP_FPS),
                frame_count: prop(CAP_PROP_FRAME_COUNT).max(0.0) as u64,
                width: prop(CAP_PROP_FRAME_WIDTH).max(0.0) as u32,
                height: prop(CAP_PROP_FRAME_HEIGHT).max(0.0) as u32,
            };

            Ok(Self {
                capture,
                metadata,
                frames_read: 0,
            })
        }
    }

    impl FrameSource for VideoFileSource {
        type Frame = opencv::core::Mat;

        fn metadata(&self) -> SourceMetadata {
            self.metadata
        }

        fn next_frame(&mut self) -> VisionResult<Option<Self::Frame>> {
            let mut frame = opencv::core::Mat::default();
            let read_ok = self
                .capture
                .read(&mut frame)
                .map_err(|e| VisionError::frame_read(self.frames_read, e.to_string()))?;

            if !read_ok || frame.empty() {
                return Ok(None);
            }

            self.frames_read += 1;
            Ok(Some(frame))
        }
    }

    impl Drop for VideoFileSource {
        fn drop(&mut self) {
            self.capture.release().ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_duration() {
        let metadata = SourceMetadata {
            fps: 30.0,
            frame_count: 300,
            width: 1280,
            height: 720,
        };
        assert!((metadata.duration_sec() - 10.0).abs() < 1e-9);

        let zero_fps = SourceMetadata {
            fps: 0.0,
            ..metadata
        };
        assert_eq!(zero_fps.duration_sec(), 0.0);
    }

    #[test]
    fn test_vec_source_exhausts() {
        let metadata = SourceMetadata {
            fps: 30.0,
            frame_count: 2,
            width: 64,
            height: 64,
        };
        let mut source = VecFrameSource::new(metadata, vec![1u32, 2u32]);
        assert_eq!(source.next_frame().unwrap(), Some(1));
        assert_eq!(source.next_frame().unwrap(), Some(2));
        assert_eq!(source.next_frame().unwrap(), None);
    }
}
