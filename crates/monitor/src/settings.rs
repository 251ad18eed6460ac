//! Runtime settings

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use gesture::{GestureConfig, GesturePreset};
use vitals::VitalsConfig;

/// Flat settings for the monitor binary.
///
/// Layered: struct defaults, then an optional `patient-monitor.toml` in the
/// working directory, then `MONITOR_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seconds the body must be gone before the fall alert fires
    pub body_missing_threshold_seconds: f32,

    /// Mouth asymmetry cutoff for the stroke alert
    pub face_asymmetry_threshold: f32,

    /// Seconds a gesture must be held before it is confirmed
    pub gesture_hold_seconds: f32,

    /// Finger-pattern mapping table: `emergency` or `benign`
    pub gesture_preset: GesturePreset,

    /// Demo loop pacing (frames per second)
    pub frame_rate: u32,

    /// Emit display states as JSON lines instead of console text
    pub json_output: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            body_missing_threshold_seconds: 5.0,
            face_asymmetry_threshold: 0.03,
            gesture_hold_seconds: 3.0,
            gesture_preset: GesturePreset::Emergency,
            frame_rate: 30,
            json_output: false,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("patient-monitor").required(false))
            .add_source(Environment::with_prefix("MONITOR").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn vitals(&self) -> VitalsConfig {
        VitalsConfig {
            body_missing_threshold_seconds: self.body_missing_threshold_seconds,
            face_asymmetry_threshold: self.face_asymmetry_threshold,
        }
    }

    pub fn gesture(&self) -> GestureConfig {
        GestureConfig {
            gesture_hold_seconds: self.gesture_hold_seconds,
            gesture_preset: self.gesture_preset,
        }
    }
}
