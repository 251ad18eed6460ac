//! Vitals configuration

use serde::{Deserialize, Serialize};

/// Vitals configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalsConfig {
    /// Seconds the body must be gone before the fall alert fires
    pub body_missing_threshold_seconds: f32,

    /// Mouth asymmetry cutoff for the stroke alert
    pub face_asymmetry_threshold: f32,
}

impl Default for VitalsConfig {
    fn default() -> Self {
        Self {
            body_missing_threshold_seconds: 5.0,
            face_asymmetry_threshold: 0.03,
        }
    }
}

impl VitalsConfig {
    /// Create strict config (lower thresholds, earlier alerts)
    pub fn strict() -> Self {
        Self {
            body_missing_threshold_seconds: 3.0,
            face_asymmetry_threshold: 0.02,
        }
    }

    /// Create lenient config (higher thresholds, fewer false alarms)
    pub fn lenient() -> Self {
        Self {
            body_missing_threshold_seconds: 8.0,
            face_asymmetry_threshold: 0.05,
        }
    }
}
