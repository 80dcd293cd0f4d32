//! End-to-end pipeline tests over scripted frame sources and detectors.

use coach_vision::{
    analyze_source, AnalysisConfig, FaceLandmarks, FrameSource, HandLandmarks, LandmarkDetector,
    Point, PoseLandmarks, ProgressHandle, SourceMetadata, VecFrameSource, VisionError,
    VisionResult,
};

/// Detector scripted per frame index. Frames are their own indices.
struct ScriptedDetector {
    /// Frames at or beyond this index lose the face detection.
    face_until: u64,
}

impl LandmarkDetector<u64> for ScriptedDetector {
    fn detect_face(&mut self, frame: &u64) -> Option<FaceLandmarks> {
        if *frame < self.face_until {
            Some(FaceLandmarks {
                left_eye_corner: Point::new(0.45, 0.5),
                right_eye_corner: Point::new(0.55, 0.5),
                nose_tip: Point::new(0.5, 0.6),
            })
        } else {
            None
        }
    }

    fn detect_pose(&mut self, _frame: &u64) -> Option<PoseLandmarks> {
        let left = Point::new(0.4, 0.6);
        let right = Point::new(0.6, 0.6);
        Some(PoseLandmarks {
            left_shoulder: left,
            right_shoulder: right,
            points: vec![left, right],
        })
    }

    fn detect_hands(&mut self, _frame: &u64) -> Vec<HandLandmarks> {
        let hand = |x: f64| {
            HandLandmarks::new(vec![
                Point::new(x - 0.01, 0.8),
                Point::new(x + 0.01, 0.8),
                Point::new(x, 0.81),
            ])
        };
        vec![hand(0.3), hand(0.6)]
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

fn source_of(frame_count: u64, fps: f64) -> VecFrameSource<u64> {
    let metadata = SourceMetadata {
        fps,
        frame_count,
        width: 1280,
        height: 720,
    };
    VecFrameSource::new(metadata, (0..frame_count).collect())
}

#[test]
fn test_ten_second_clip_reduces_every_block() {
    // 300 frames at 30 fps; the face drops out for the last second.
    let mut source = source_of(300, 30.0);
    let mut detector = ScriptedDetector { face_until: 270 };
    let progress = ProgressHandle::new();

    let metrics = analyze_source(
        &mut source,
        &mut detector,
        &AnalysisConfig::default(),
        &progress,
    )
    .unwrap();

    assert_eq!(metrics.metadata.frame_count, 300);
    assert!((metrics.metadata.duration_sec - 10.0).abs() < 1e-9);

    // Centered face in 270 of 300 frames; misses dilute the ratio but
    // not the zone distribution.
    assert!((metrics.gaze.center_ratio - 0.9).abs() < 1e-9);
    assert!((metrics.gaze.distribution.center - 1.0).abs() < 1e-9);
    assert_eq!(metrics.gaze.movement_rate_per_sec, 0.0);
    assert!(!metrics.gaze.trace.is_empty());

    // Motionless level shoulders.
    assert!((metrics.posture.stability - 1.0).abs() < 1e-9);
    assert_eq!(metrics.posture.mean_roll_deg, 0.0);

    // A frozen pose has zero motion energy, below the recommended band.
    assert_eq!(metrics.gesture.motion_energy, 0.0);
    assert_eq!(metrics.gesture.evaluation, "needs adjustment");

    // Two hands every frame: spread is their centroid distance, and
    // full visibility exceeds the recommended ceiling.
    assert!((metrics.hands.visibility_ratio - 1.0).abs() < 1e-9);
    assert!((metrics.hands.inter_hand_spread - 0.3).abs() < 1e-6);
    assert_eq!(metrics.hands.evaluation, "too much");

    assert_eq!(metrics.head_pose.roll_mean_deg, 0.0);
    assert_eq!(metrics.head_pose.yaw_mean_deg, 0.0);
    assert_eq!(metrics.head_pose.evaluation, "stable");

    assert_eq!(progress.get(), 100);
    assert_eq!(progress.stage(), "done");
}

#[test]
fn test_metrics_serialize_to_finite_json() {
    let mut source = source_of(30, 30.0);
    let mut detector = ScriptedDetector { face_until: 30 };
    let progress = ProgressHandle::new();

    let metrics = analyze_source(
        &mut source,
        &mut detector,
        &AnalysisConfig::default(),
        &progress,
    )
    .unwrap();

    // serde_json refuses NaN/Infinity; success here proves every output
    // number is finite.
    let json = serde_json::to_value(&metrics).unwrap();
    assert_eq!(json["metadata"]["frame_count"], 30);
    assert!(json["gaze"]["center_ratio"].is_number());
}

/// Source that fails mid-stream after two good frames.
struct FailingSource {
    yielded: u64,
}

impl FrameSource for FailingSource {
    type Frame = u64;

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            fps: 30.0,
            frame_count: 10,
            width: 640,
            height: 360,
        }
    }

    fn next_frame(&mut self) -> VisionResult<Option<u64>> {
        if self.yielded < 2 {
            self.yielded += 1;
            Ok(Some(self.yielded))
        } else {
            Err(VisionError::frame_read(self.yielded, "decoder stall"))
        }
    }
}

#[test]
fn test_mid_stream_failure_propagates() {
    let mut source = FailingSource { yielded: 0 };
    let mut detector = ScriptedDetector { face_until: u64::MAX };
    let progress = ProgressHandle::new();

    let err = analyze_source(
        &mut source,
        &mut detector,
        &AnalysisConfig::default(),
        &progress,
    )
    .unwrap_err();

    assert!(matches!(err, VisionError::FrameRead { frame_index: 2, .. }));
    // The run never completed: progress must not be parked at 100.
    assert!(progress.get() < 100);
}
