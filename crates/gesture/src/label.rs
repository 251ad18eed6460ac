//! Gesture labels

use serde::{Deserialize, Serialize};

/// Meaning of a recognized finger pattern
///
/// "No gesture" is represented as `Option::None` at call sites, not as a
/// variant: an unmatched pattern is a legitimate non-result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureLabel {
    /// Urgent attention needed (thumb-only pattern in the emergency preset)
    Emergency,
    NeedWater,
    WantRestroom,
    WantMedicine,
    AdjustPosition,
    CallCaregiver,
    Uncomfortable,
}

impl GestureLabel {
    /// Text shown on the status line once this label is confirmed
    pub fn display_text(&self) -> &'static str {
        match self {
            Self::Emergency => "EMERGENCY: THUMB TRIGGERED",
            Self::NeedWater => "Need Water/Food",
            Self::WantRestroom => "Want Restroom",
            Self::WantMedicine => "Want Medicine",
            Self::AdjustPosition => "Adjust Position",
            Self::CallCaregiver => "Call Caregiver",
            Self::Uncomfortable => "Uncomfortable",
        }
    }

    /// Whether a confirmation of this label should color the status line red
    pub fn is_emergency(&self) -> bool {
        matches!(self, Self::Emergency)
    }
}

impl std::fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_text())
    }
}
