//! Table-driven gesture classification

use perception::FingerState;
use serde::{Deserialize, Serialize};

use crate::config::GesturePreset;
use crate::label::GestureLabel;

/// Ordered finger-pattern to label mapping.
///
/// Pure data: classification is a first-exact-match scan, so adding or
/// remapping a gesture is a table change, not a logic change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureMap {
    rows: Vec<(FingerState, GestureLabel)>,
}

impl GestureMap {
    pub fn new(rows: Vec<(FingerState, GestureLabel)>) -> Self {
        Self { rows }
    }

    /// Mapping where the thumb-only pattern is an emergency trigger
    pub fn emergency_preset() -> Self {
        Self::new(vec![
            (
                FingerState::new([true, false, false, false, false]),
                GestureLabel::Emergency,
            ),
            (
                FingerState::new([true, true, false, false, false]),
                GestureLabel::NeedWater,
            ),
            (
                FingerState::new([false, true, false, false, false]),
                GestureLabel::WantRestroom,
            ),
            (
                FingerState::new([false, false, true, true, true]),
                GestureLabel::WantMedicine,
            ),
            (
                FingerState::new([true, false, true, true, true]),
                GestureLabel::AdjustPosition,
            ),
            (
                FingerState::new([false, true, true, false, false]),
                GestureLabel::CallCaregiver,
            ),
            (
                FingerState::new([true, true, true, false, false]),
                GestureLabel::Uncomfortable,
            ),
        ])
    }

    /// Mapping where the thumb-only pattern is a benign position request
    pub fn benign_preset() -> Self {
        Self::new(vec![
            (
                FingerState::new([true, false, false, false, false]),
                GestureLabel::AdjustPosition,
            ),
            (
                FingerState::new([true, true, false, false, false]),
                GestureLabel::NeedWater,
            ),
            (
                FingerState::new([false, true, false, false, false]),
                GestureLabel::WantRestroom,
            ),
            (
                FingerState::new([false, false, true, true, true]),
                GestureLabel::WantMedicine,
            ),
            (
                FingerState::new([false, true, true, false, false]),
                GestureLabel::CallCaregiver,
            ),
            (
                FingerState::new([true, true, true, false, false]),
                GestureLabel::Uncomfortable,
            ),
        ])
    }

    pub fn from_preset(preset: GesturePreset) -> Self {
        match preset {
            GesturePreset::Emergency => Self::emergency_preset(),
            GesturePreset::Benign => Self::benign_preset(),
        }
    }

    pub fn rows(&self) -> &[(FingerState, GestureLabel)] {
        &self.rows
    }
}

/// Stateless classifier over a fixed mapping table
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    map: GestureMap,
}

impl GestureClassifier {
    pub fn new(map: GestureMap) -> Self {
        Self { map }
    }

    pub fn from_preset(preset: GesturePreset) -> Self {
        Self::new(GestureMap::from_preset(preset))
    }

    /// Look up a finger pattern. Unmatched patterns are "no gesture".
    pub fn classify(&self, fingers: FingerState) -> Option<GestureLabel> {
        self.map
            .rows
            .iter()
            .find(|(pattern, _)| *pattern == fingers)
            .map(|(_, label)| *label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn all_vectors() -> impl Iterator<Item = FingerState> {
        (0u8..32).map(|bits| {
            let mut open = [false; 5];
            for (finger, flag) in open.iter_mut().enumerate() {
                *flag = bits & (1 << finger) != 0;
            }
            FingerState::new(open)
        })
    }

    #[test]
    fn emergency_preset_maps_thumb_only_to_emergency() {
        let classifier = GestureClassifier::from_preset(GesturePreset::Emergency);
        assert_eq!(
            classifier.classify(FingerState::new([true, false, false, false, false])),
            Some(GestureLabel::Emergency)
        );
    }

    #[test]
    fn benign_preset_remaps_thumb_only_and_drops_emergency() {
        let classifier = GestureClassifier::from_preset(GesturePreset::Benign);
        assert_eq!(
            classifier.classify(FingerState::new([true, false, false, false, false])),
            Some(GestureLabel::AdjustPosition)
        );
        for fingers in all_vectors() {
            assert_ne!(classifier.classify(fingers), Some(GestureLabel::Emergency));
        }
    }

    #[test]
    fn shared_rows_agree_across_presets() {
        let emergency = GestureClassifier::from_preset(GesturePreset::Emergency);
        let benign = GestureClassifier::from_preset(GesturePreset::Benign);
        let shared = [
            ([true, true, false, false, false], GestureLabel::NeedWater),
            ([false, true, false, false, false], GestureLabel::WantRestroom),
            ([false, false, true, true, true], GestureLabel::WantMedicine),
            ([false, true, true, false, false], GestureLabel::CallCaregiver),
            ([true, true, true, false, false], GestureLabel::Uncomfortable),
        ];
        for (open, label) in shared {
            let fingers = FingerState::new(open);
            assert_eq!(emergency.classify(fingers), Some(label));
            assert_eq!(benign.classify(fingers), Some(label));
        }
    }

    #[test]
    fn all_32_vectors_classify_exhaustively() {
        for preset in [GesturePreset::Emergency, GesturePreset::Benign] {
            let classifier = GestureClassifier::from_preset(preset);
            let matched = all_vectors()
                .filter(|fingers| classifier.classify(*fingers).is_some())
                .count();
            let expected = classifier.map.rows().len();
            assert_eq!(matched, expected);
        }
    }

    #[test]
    fn unmatched_patterns_are_no_gesture() {
        let classifier = GestureClassifier::from_preset(GesturePreset::Emergency);
        assert_eq!(classifier.classify(FingerState::new([true; 5])), None);
        assert_eq!(classifier.classify(FingerState::new([false; 5])), None);
    }

    proptest! {
        #[test]
        fn classification_is_total_and_deterministic(bits in 0u8..32) {
            let mut open = [false; 5];
            for (finger, flag) in open.iter_mut().enumerate() {
                *flag = bits & (1 << finger) != 0;
            }
            let fingers = FingerState::new(open);
            let classifier = GestureClassifier::from_preset(GesturePreset::Emergency);
            let first = classifier.classify(fingers);
            let second = classifier.classify(fingers);
            prop_assert_eq!(first, second);
        }
    }
}
