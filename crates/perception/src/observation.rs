//! Per-frame observation types

use serde::{Deserialize, Serialize};

use crate::PerceptionError;

/// A named 2D/3D point in normalized image coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Which hand the provider saw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandSide {
    Left,
    Right,
}

/// Ordered facial landmark set (face-mesh topology)
///
/// The provider guarantees a complete set whenever it reports a face, so the
/// named accessors are infallible once construction has succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceLandmarks {
    points: Vec<Landmark>,
}

impl FaceLandmarks {
    /// Nose tip index in the face-mesh topology
    pub const NOSE_TIP: usize = 1;
    /// Left mouth corner index
    pub const LEFT_MOUTH_CORNER: usize = 61;
    /// Right mouth corner index
    pub const RIGHT_MOUTH_CORNER: usize = 291;

    /// Minimum point count covering all reference indices
    pub const MIN_POINTS: usize = Self::RIGHT_MOUTH_CORNER + 1;

    pub fn new(points: Vec<Landmark>) -> Result<Self, PerceptionError> {
        if points.len() < Self::MIN_POINTS {
            return Err(PerceptionError::IncompleteLandmarks {
                expected: Self::MIN_POINTS,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    pub fn nose_tip(&self) -> Landmark {
        self.points[Self::NOSE_TIP]
    }

    pub fn left_mouth_corner(&self) -> Landmark {
        self.points[Self::LEFT_MOUTH_CORNER]
    }

    pub fn right_mouth_corner(&self) -> Landmark {
        self.points[Self::RIGHT_MOUTH_CORNER]
    }

    pub fn points(&self) -> &[Landmark] {
        &self.points
    }
}

/// Ordered 21-point hand landmark set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandLandmarks {
    points: Vec<Landmark>,
}

impl HandLandmarks {
    /// Wrist index (countdown overlays anchor here)
    pub const WRIST: usize = 0;
    /// Fingertip indices, ordered [Thumb, Index, Middle, Ring, Pinky]
    pub const TIP_IDS: [usize; 5] = [4, 8, 12, 16, 20];
    /// Thumb interphalangeal joint, compared against the tip for openness
    pub const THUMB_IP: usize = 3;

    /// Point count of the hand topology
    pub const POINT_COUNT: usize = 21;

    pub fn new(points: Vec<Landmark>) -> Result<Self, PerceptionError> {
        if points.len() < Self::POINT_COUNT {
            return Err(PerceptionError::IncompleteLandmarks {
                expected: Self::POINT_COUNT,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    pub fn point(&self, index: usize) -> Landmark {
        self.points[index]
    }

    pub fn wrist(&self) -> Landmark {
        self.points[Self::WRIST]
    }

    pub fn points(&self) -> &[Landmark] {
        &self.points
    }
}

/// Everything the provider reports about a single frame
///
/// Produced fresh each frame and discarded after processing; no component
/// retains it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameObservation {
    /// Whether a body was detected anywhere in the frame
    pub body_present: bool,

    /// Facial landmarks, when a face is visible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face: Option<FaceLandmarks>,

    /// Observed hands with handedness (provider is configured for one hand)
    pub hands: Vec<(HandLandmarks, HandSide)>,
}

impl FrameObservation {
    /// Nothing observed: no body, no face, no hands
    pub fn empty() -> Self {
        Self::default()
    }

    /// A body with no face or hands in view
    pub fn body_only() -> Self {
        Self {
            body_present: true,
            ..Self::default()
        }
    }
}
