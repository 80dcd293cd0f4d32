//! Landmark types produced by external detectors.
//!
//! All coordinates are normalized to [0, 1] image space. The pipeline
//! never inspects pixels; it consumes only these reduced landmark sets.

use serde::{Deserialize, Serialize};

/// A normalized 2D landmark point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between two points.
    pub fn midpoint(a: Point, b: Point) -> Point {
        Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Face landmarks reduced to the points the accumulators need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLandmarks {
    /// Outer corner of the left eye.
    pub left_eye_corner: Point,
    /// Outer corner of the right eye.
    pub right_eye_corner: Point,
    /// Nose tip.
    pub nose_tip: Point,
}

impl FaceLandmarks {
    /// Midpoint of the two eye corners.
    pub fn eye_center(&self) -> Point {
        Point::midpoint(self.left_eye_corner, self.right_eye_corner)
    }
}

/// Pose landmarks: the shoulder pair plus the full body point vector.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseLandmarks {
    pub left_shoulder: Point,
    pub right_shoulder: Point,
    /// All detected body points, used for motion energy.
    pub points: Vec<Point>,
}

impl PoseLandmarks {
    /// Midpoint of the shoulder pair.
    pub fn shoulder_center(&self) -> Point {
        Point::midpoint(self.left_shoulder, self.right_shoulder)
    }

    /// Euclidean norm of the difference to another pose vector, treating
    /// both as flattened 2D coordinate vectors. Compares up to the
    /// shorter length if the detector returned differing point counts.
    pub fn vector_delta(&self, other: &PoseLandmarks) -> f64 {
        self.points
            .iter()
            .zip(other.points.iter())
            .map(|(a, b)| (a.x - b.x).powi(2) + (a.y - b.y).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

/// One detected hand: a point cloud usable to compute a centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    pub points: Vec<Point>,
}

impl HandLandmarks {
    /// Create hand landmarks from points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Centroid of the point cloud; None for an empty cloud.
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let sum_x: f64 = self.points.iter().map(|p| p.x).sum();
        let sum_y: f64 = self.points.iter().map(|p| p.y).sum();
        Some(Point::new(sum_x / n, sum_y / n))
    }
}

/// Everything the detectors produced for one frame.
///
/// Ephemeral: produced and consumed within one frame iteration. Absent
/// detections are valid observations, not errors.
#[derive(Debug, Clone, Default)]
pub struct FrameObservation {
    pub face: Option<FaceLandmarks>,
    pub pose: Option<PoseLandmarks>,
    /// Zero to two detected hands.
    pub hands: Vec<HandLandmarks>,
}

impl FrameObservation {
    /// True when no detector produced anything for this frame.
    pub fn is_empty(&self) -> bool {
        self.face.is_none() && self.pose.is_none() && self.hands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_and_distance() {
        let a = Point::new(0.2, 0.4);
        let b = Point::new(0.6, 0.8);
        let mid = Point::midpoint(a, b);
        assert!((mid.x - 0.4).abs() < 1e-12);
        assert!((mid.y - 0.6).abs() < 1e-12);
        assert!((a.distance_to(&b) - (0.32f64).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_eye_center() {
        let face = FaceLandmarks {
            left_eye_corner: Point::new(0.4, 0.5),
            right_eye_corner: Point::new(0.6, 0.5),
            nose_tip: Point::new(0.5, 0.6),
        };
        let center = face.eye_center();
        assert!((center.x - 0.5).abs() < 1e-12);
        assert!((center.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_pose_vector_delta() {
        let pose = |dx: f64| PoseLandmarks {
            left_shoulder: Point::new(0.4, 0.5),
            right_shoulder: Point::new(0.6, 0.5),
            points: vec![Point::new(0.1 + dx, 0.1), Point::new(0.2 + dx, 0.2)],
        };
        let delta = pose(0.0).vector_delta(&pose(0.3));
        // Two points each moved 0.3 in x: sqrt(2 * 0.09)
        assert!((delta - (0.18f64).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_hand_centroid() {
        let hand = HandLandmarks::new(vec![Point::new(0.0, 0.0), Point::new(0.4, 0.2)]);
        let centroid = hand.centroid().unwrap();
        assert!((centroid.x - 0.2).abs() < 1e-12);
        assert!((centroid.y - 0.1).abs() < 1e-12);

        assert!(HandLandmarks::new(vec![]).centroid().is_none());
    }

    #[test]
    fn test_empty_observation() {
        assert!(FrameObservation::default().is_empty());
    }
}
