//! The video analysis orchestrator.
//!
//! One sequential decode-and-analyze pass: each frame goes through the
//! landmark detectors, the resulting observation feeds all five
//! accumulators independently, and the progress handle is ticked. When
//! the stream is exhausted the accumulators reduce into the final
//! `VideoMetrics`.
//!
//! Multiple pipeline runs may execute concurrently in one process; each
//! must be given its own `ProgressHandle`.

use coach_models::{VideoMetadata, VideoMetrics};
use tracing::{debug, info};

use crate::accumulators::{
    GazeAccumulator, GestureAccumulator, HandAccumulator, HeadPoseAccumulator, PostureAccumulator,
};
use crate::config::AnalysisConfig;
use crate::detector::{observe_frame, LandmarkDetector};
use crate::error::VisionResult;
use crate::progress::ProgressHandle;
use crate::source::FrameSource;
use crate::stats::{round2, safe_ratio};

/// Analyze every frame of an open source and reduce to video metrics.
///
/// Fails only when the source itself fails mid-stream; per-frame
/// detection misses are absorbed as absent observations. Tolerates an
/// empty stream: every ratio reduces to its documented zero default.
pub fn analyze_source<S, D>(
    source: &mut S,
    detector: &mut D,
    config: &AnalysisConfig,
    progress: &ProgressHandle,
) -> VisionResult<VideoMetrics>
where
    S: FrameSource,
    D: LandmarkDetector<S::Frame> + ?Sized,
{
    let source_meta = source.metadata();
    let expected_frames = source_meta.frame_count;

    progress.reset();
    progress.set_stage("analyzing frames");

    debug!(
        fps = source_meta.fps,
        expected_frames,
        width = source_meta.width,
        height = source_meta.height,
        detector = detector.name(),
        "Starting video behavioral analysis"
    );

    let mut gaze = GazeAccumulator::new();
    let mut posture = PostureAccumulator::new();
    let mut gesture = GestureAccumulator::new();
    let mut hands = HandAccumulator::new();
    let mut head_pose = HeadPoseAccumulator::new();

    let mut frame_count: u64 = 0;
    while let Some(frame) = source.next_frame()? {
        let observation = observe_frame(detector, &frame);

        gaze.observe(observation.face.as_ref(), config);
        posture.observe(observation.pose.as_ref());
        gesture.observe(observation.pose.as_ref());
        hands.observe(&observation.hands);
        head_pose.observe(observation.face.as_ref());

        frame_count += 1;
        progress.tick(frame_count, expected_frames);
    }

    progress.set_stage("reducing");

    // Containers sometimes misreport their frame count; the processed
    // count is authoritative for all denominators.
    let duration_sec = safe_ratio(frame_count as f64, source_meta.fps);
    let metadata = VideoMetadata {
        fps: source_meta.fps,
        width: source_meta.width,
        height: source_meta.height,
        frame_count,
        duration_sec: round2(duration_sec),
    };

    let metrics = VideoMetrics {
        gaze: gaze.reduce(frame_count, duration_sec, config),
        posture: posture.reduce(),
        gesture: gesture.reduce(),
        hands: hands.reduce(frame_count),
        head_pose: head_pose.reduce(),
        metadata,
    };

    progress.set(100);
    progress.set_stage("done");

    info!(
        frames = frame_count,
        duration_sec = metrics.metadata.duration_sec,
        gaze_center_ratio = metrics.gaze.center_ratio,
        posture_stability = metrics.posture.stability,
        hand_visibility = metrics.hands.visibility_ratio,
        "Video behavioral analysis complete"
    );

    Ok(metrics)
}

/// Open a video file and analyze it end to end.
///
/// A source that cannot be opened is a fatal `SourceUnavailable` for the
/// job; no partial metrics are produced. The capture is released on
/// every exit path.
#[cfg(feature = "opencv")]
pub fn analyze_video<D>(
    path: &std::path::Path,
    detector: &mut D,
    config: &AnalysisConfig,
    progress: &ProgressHandle,
) -> VisionResult<VideoMetrics>
where
    D: LandmarkDetector<opencv::core::Mat> + ?Sized,
{
    let mut source = crate::source::VideoFileSource::open(path)?;
    analyze_source(&mut source, detector, config, progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::NullDetector;
    use crate::source::{SourceMetadata, VecFrameSource};

    fn metadata(frame_count: u64) -> SourceMetadata {
        SourceMetadata {
            fps: 30.0,
            frame_count,
            width: 640,
            height: 360,
        }
    }

    #[test]
    fn test_empty_stream_reduces_to_zero_defaults() {
        let mut source = VecFrameSource::new(metadata(0), Vec::<u32>::new());
        let mut detector = NullDetector;
        let progress = ProgressHandle::new();

        let metrics = analyze_source(
            &mut source,
            &mut detector,
            &AnalysisConfig::default(),
            &progress,
        )
        .unwrap();

        assert_eq!(metrics.metadata.frame_count, 0);
        assert_eq!(metrics.metadata.duration_sec, 0.0);
        assert_eq!(metrics.gaze.center_ratio, 0.0);
        assert_eq!(metrics.hands.visibility_ratio, 0.0);
        // Completion still parks progress at 100.
        assert_eq!(progress.get(), 100);
    }

    #[test]
    fn test_no_detections_still_count_frames() {
        let frames: Vec<u32> = (0..90).collect();
        let mut source = VecFrameSource::new(metadata(90), frames);
        let mut detector = NullDetector;
        let progress = ProgressHandle::new();

        let metrics = analyze_source(
            &mut source,
            &mut detector,
            &AnalysisConfig::default(),
            &progress,
        )
        .unwrap();

        assert_eq!(metrics.metadata.frame_count, 90);
        assert!((metrics.metadata.duration_sec - 3.0).abs() < 1e-9);
        assert_eq!(metrics.gaze.center_ratio, 0.0);
        assert_eq!(metrics.gaze.distribution.sum(), 0.0);
        assert_eq!(progress.get(), 100);
    }
}
