//! Gesture recognition configuration

use serde::{Deserialize, Serialize};

/// Which finger-pattern mapping table to use.
///
/// The two presets diverge on the thumb-only pattern: the emergency preset
/// treats it as an emergency trigger, the benign preset remaps it to a
/// position-adjustment request. They are deliberately kept as separate named
/// tables rather than merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GesturePreset {
    #[default]
    Emergency,
    Benign,
}

/// Gesture recognition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Seconds a gesture must be held before it is confirmed
    pub gesture_hold_seconds: f32,

    /// Mapping table preset
    pub gesture_preset: GesturePreset,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            gesture_hold_seconds: 3.0,
            gesture_preset: GesturePreset::Emergency,
        }
    }
}
