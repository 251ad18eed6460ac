//! Perception boundary for the patient monitor
//!
//! Everything the core decision logic knows about a video frame arrives
//! through this crate as abstract per-frame facts:
//! - Body present / absent
//! - Facial landmark set (when a face is visible)
//! - Hand landmark sets with handedness
//!
//! Landmark extraction itself (pose, face mesh, hand tracking) lives in an
//! external collaborator behind the [`PerceptionProvider`] trait.

pub mod fingers;
pub mod observation;
pub mod provider;

pub use fingers::{finger_state, FingerState};
pub use observation::{FaceLandmarks, FrameObservation, HandLandmarks, HandSide, Landmark};
pub use provider::{PerceptionProvider, ScriptedProvider};

use thiserror::Error;

/// Perception error types
#[derive(Error, Debug)]
pub enum PerceptionError {
    #[error("Frame acquisition failed: {0}")]
    Acquisition(String),

    #[error("Incomplete landmark set: expected {expected} points, got {actual}")]
    IncompleteLandmarks { expected: usize, actual: usize },
}
