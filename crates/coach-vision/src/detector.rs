//! Landmark detector capability trait.
//!
//! The detectors themselves (face mesh, pose, hand models) live outside
//! this crate; the pipeline consumes them through `LandmarkDetector`.
//! A per-frame miss is a valid "no observation" result, never an error,
//! so the detector methods return options rather than results.

use crate::landmarks::{FaceLandmarks, FrameObservation, HandLandmarks, PoseLandmarks};

/// Pluggable landmark detection over frames of type `F`.
///
/// Implementations are pure per frame (no cross-frame state required by
/// the contract) but take `&mut self` because real model runtimes hold
/// mutable session state.
pub trait LandmarkDetector<F> {
    /// Detect face landmarks, with at least eye-corner and nose-tip
    /// points. None when no face cleared the confidence threshold.
    fn detect_face(&mut self, frame: &F) -> Option<FaceLandmarks>;

    /// Detect pose landmarks, with at least left/right shoulder points.
    fn detect_pose(&mut self, frame: &F) -> Option<PoseLandmarks>;

    /// Detect zero to two hands.
    fn detect_hands(&mut self, frame: &F) -> Vec<HandLandmarks>;

    /// Detector name for logging.
    fn name(&self) -> &'static str {
        "landmark_detector"
    }
}

/// Run all three detectors against one frame.
///
/// Detectors are independent; a miss from one never suppresses another.
pub fn observe_frame<F, D: LandmarkDetector<F> + ?Sized>(
    detector: &mut D,
    frame: &F,
) -> FrameObservation {
    let mut hands = detector.detect_hands(frame);
    hands.truncate(2);
    FrameObservation {
        face: detector.detect_face(frame),
        pose: detector.detect_pose(frame),
        hands,
    }
}

/// Detector that never detects anything. Useful as a baseline and in
/// tests of the no-observation paths.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDetector;

impl<F> LandmarkDetector<F> for NullDetector {
    fn detect_face(&mut self, _frame: &F) -> Option<FaceLandmarks> {
        None
    }

    fn detect_pose(&mut self, _frame: &F) -> Option<PoseLandmarks> {
        None
    }

    fn detect_hands(&mut self, _frame: &F) -> Vec<HandLandmarks> {
        Vec::new()
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::Point;

    struct FixedDetector;

    impl LandmarkDetector<u32> for FixedDetector {
        fn detect_face(&mut self, _frame: &u32) -> Option<FaceLandmarks> {
            Some(FaceLandmarks {
                left_eye_corner: Point::new(0.45, 0.5),
                right_eye_corner: Point::new(0.55, 0.5),
                nose_tip: Point::new(0.5, 0.6),
            })
        }

        fn detect_pose(&mut self, _frame: &u32) -> Option<PoseLandmarks> {
            None
        }

        fn detect_hands(&mut self, _frame: &u32) -> Vec<HandLandmarks> {
            // Three "hands" - observe_frame must cap at two
            vec![
                HandLandmarks::new(vec![Point::new(0.1, 0.8)]),
                HandLandmarks::new(vec![Point::new(0.9, 0.8)]),
                HandLandmarks::new(vec![Point::new(0.5, 0.9)]),
            ]
        }
    }

    #[test]
    fn test_null_detector_observes_nothing() {
        let mut detector = NullDetector;
        let observation = observe_frame(&mut detector, &0u32);
        assert!(observation.is_empty());
    }

    #[test]
    fn test_observe_frame_caps_hands_at_two() {
        let mut detector = FixedDetector;
        let observation = observe_frame(&mut detector, &0u32);
        assert!(observation.face.is_some());
        assert!(observation.pose.is_none());
        assert_eq!(observation.hands.len(), 2);
    }
}
