//! Hand gesture recognition
//!
//! A patient expresses a need by holding a finger pattern toward the camera:
//! - [`GestureClassifier`] maps a per-frame finger openness vector to a
//!   symbolic label via a fixed lookup table (two named presets exist).
//! - [`GestureHoldTracker`] debounces those per-frame labels: a label must be
//!   held continuously past a dwell time before it is confirmed, and a
//!   confirmed label stays on display until a different one replaces it.

pub mod classifier;
pub mod config;
pub mod hold;
pub mod label;

pub use classifier::{GestureClassifier, GestureMap};
pub use config::{GestureConfig, GesturePreset};
pub use hold::{GestureHoldTracker, HoldReport};
pub use label::GestureLabel;
