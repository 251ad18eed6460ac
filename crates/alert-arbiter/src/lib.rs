//! Alert arbitration
//!
//! Combines the per-frame outputs of the presence tracker, the asymmetry
//! scorer, and the gesture hold tracker into one prioritized [`DisplayState`].
//! Pure function of this frame's inputs: the result is rebuilt from scratch
//! every tick and never partially mutated.

use serde::Serialize;

use gesture::HoldReport;
use vitals::PresenceReport;

/// High-level alert classes competing for the banner slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertKind {
    /// Body gone past the absence threshold
    Fall,
    /// Facial asymmetry above the stroke threshold
    Stroke,
}

impl AlertKind {
    pub fn banner_text(&self) -> &'static str {
        match self {
            Self::Fall => "FALL DETECTED / PATIENT MISSING",
            Self::Stroke => "POSSIBLE STROKE DETECTED",
        }
    }
}

/// Banner priority, highest first. Adding a fourth alert class is a data
/// change here, not a logic change in [`arbitrate`].
pub const BANNER_PRIORITY: [AlertKind; 2] = [AlertKind::Fall, AlertKind::Stroke];

/// Status line color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum StatusColor {
    #[default]
    Normal,
    Alert,
}

/// Status line text before any gesture has been confirmed
pub const DEFAULT_STATUS: &str = "Monitoring Active";

/// What the presentation layer renders for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    /// Highest-priority active alert banner, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<&'static str>,

    /// Always-visible status line (confirmed gesture or the default text)
    pub status_text: String,

    /// Status line color; Alert only for an emergency confirmation
    pub status_color: StatusColor,

    /// Gesture hold countdown, drawn near the hand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown_text: Option<String>,

    /// Pre-threshold body search countdown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
}

/// Compose this frame's display from the three tracker outputs.
///
/// The banner goes to the first entry of [`BANNER_PRIORITY`] whose condition
/// holds. The status line is independent of the banner: both can be visible
/// at once, and the countdown texts are advisory only.
pub fn arbitrate(
    presence: &PresenceReport,
    asymmetry: Option<f32>,
    gesture: &HoldReport,
    asymmetry_threshold: f32,
) -> DisplayState {
    let stroke_active = asymmetry.is_some_and(|score| score > asymmetry_threshold);

    let banner = BANNER_PRIORITY
        .iter()
        .find(|kind| match kind {
            AlertKind::Fall => presence.alert_active,
            AlertKind::Stroke => stroke_active,
        })
        .map(AlertKind::banner_text);

    let (status_text, status_color) = match gesture.confirmed {
        Some(label) => {
            let color = if label.is_emergency() {
                StatusColor::Alert
            } else {
                StatusColor::Normal
            };
            (label.display_text().to_string(), color)
        }
        None => (DEFAULT_STATUS.to_string(), StatusColor::Normal),
    };

    let countdown_text = gesture
        .countdown
        .map(|seconds| format!("Holding: {seconds}s"));

    let search_text = presence
        .searching
        .map(|remaining| format!("Searching Body: {}s", remaining.as_secs()));

    DisplayState {
        banner,
        status_text,
        status_color,
        countdown_text,
        search_text,
    }
}
