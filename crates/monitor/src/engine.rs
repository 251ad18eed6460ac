//! Per-frame monitoring engine

use std::time::{Duration, Instant};

use alert_arbiter::{arbitrate, DisplayState};
use gesture::{GestureClassifier, GestureConfig, GestureHoldTracker};
use perception::{finger_state, FrameObservation};
use vitals::{mouth_asymmetry, PresenceTracker, VitalsConfig};

/// Wires the trackers into one frame-synchronous pipeline.
///
/// One call to [`MonitorEngine::process`] handles exactly one frame, run to
/// completion. All tracker state lives here and is touched from nowhere else,
/// so no locking is involved.
pub struct MonitorEngine {
    classifier: GestureClassifier,
    presence: PresenceTracker,
    hold: GestureHoldTracker,
    asymmetry_threshold: f32,
}

impl MonitorEngine {
    pub fn new(vitals: &VitalsConfig, gesture: &GestureConfig) -> Self {
        Self {
            classifier: GestureClassifier::from_preset(gesture.gesture_preset),
            presence: PresenceTracker::new(Duration::from_secs_f32(
                vitals.body_missing_threshold_seconds,
            )),
            hold: GestureHoldTracker::new(Duration::from_secs_f32(gesture.gesture_hold_seconds)),
            asymmetry_threshold: vitals.face_asymmetry_threshold,
        }
    }

    /// Process one frame's observation into a display state.
    ///
    /// Callers must NOT invoke this for failed or missing frames: skipping
    /// the call is what keeps tracker state from advancing on a bad tick.
    pub fn process(&mut self, observation: &FrameObservation, now: Instant) -> DisplayState {
        let presence = self.presence.update(observation.body_present, now);

        let asymmetry = observation.face.as_ref().map(mouth_asymmetry);

        // Single hand supported; the provider is configured for one.
        let observed = observation
            .hands
            .first()
            .and_then(|(hand, side)| self.classifier.classify(finger_state(hand, *side)));
        let hold = self.hold.update(observed, now);

        arbitrate(&presence, asymmetry, &hold, self.asymmetry_threshold)
    }

    /// Reset all tracker state (patient change)
    pub fn reset(&mut self) {
        self.presence.reset();
        self.hold.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{face_with_droop, gesture_hand, symmetric_face};
    use alert_arbiter::{AlertKind, StatusColor, DEFAULT_STATUS};
    use perception::HandSide;

    fn engine() -> MonitorEngine {
        MonitorEngine::new(&VitalsConfig::default(), &GestureConfig::default())
    }

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    /// Body absent for 6s with a 5s threshold: alert fires just past 5s and
    /// clears the frame the body reappears.
    #[test]
    fn fall_alert_fires_past_threshold_and_clears_on_return() {
        let mut engine = engine();
        let start = Instant::now();

        let display = engine.process(&FrameObservation::empty(), start);
        assert!(display.banner.is_none());
        assert_eq!(display.search_text.as_deref(), Some("Searching Body: 5s"));

        let display = engine.process(&FrameObservation::empty(), start + secs(4.5));
        assert!(display.banner.is_none());

        let display = engine.process(&FrameObservation::empty(), start + secs(5.01));
        assert_eq!(display.banner, Some(AlertKind::Fall.banner_text()));
        assert!(display.search_text.is_none());

        let display = engine.process(&FrameObservation::empty(), start + secs(6.0));
        assert_eq!(display.banner, Some(AlertKind::Fall.banner_text()));

        let display = engine.process(&FrameObservation::body_only(), start + secs(6.1));
        assert!(display.banner.is_none());
    }

    /// Thumb-only pattern held for 3.5s under the default (emergency) preset:
    /// countdown at 1s reads 2s, confirmation lands just past 3s and sticks.
    #[test]
    fn emergency_gesture_confirms_after_hold() {
        let mut engine = engine();
        let start = Instant::now();
        let thumb = [true, false, false, false, false];

        let frame = |open| {
            let mut observation = FrameObservation::body_only();
            observation.hands = vec![(gesture_hand(open, HandSide::Right), HandSide::Right)];
            observation
        };

        let display = engine.process(&frame(thumb), start);
        assert_eq!(display.status_text, DEFAULT_STATUS);

        let display = engine.process(&frame(thumb), start + secs(1.0));
        assert_eq!(display.countdown_text.as_deref(), Some("Holding: 2s"));
        assert_eq!(display.status_text, DEFAULT_STATUS);

        let display = engine.process(&frame(thumb), start + secs(3.1));
        assert_eq!(display.status_text, "EMERGENCY: THUMB TRIGGERED");
        assert_eq!(display.status_color, StatusColor::Alert);

        // Hand gone: status is sticky
        let display = engine.process(&FrameObservation::body_only(), start + secs(3.5));
        assert_eq!(display.status_text, "EMERGENCY: THUMB TRIGGERED");
        assert_eq!(display.status_color, StatusColor::Alert);
    }

    #[test]
    fn fall_banner_outranks_stroke_banner() {
        let mut engine = engine();
        let start = Instant::now();

        // Face visible and asymmetric while the body reads as absent
        let mut observation = FrameObservation::empty();
        observation.face = Some(face_with_droop(0.08));

        engine.process(&observation, start);
        let display = engine.process(&observation, start + secs(5.5));
        assert_eq!(display.banner, Some(AlertKind::Fall.banner_text()));
    }

    #[test]
    fn stroke_banner_from_asymmetric_face() {
        let mut engine = engine();
        let start = Instant::now();

        let mut observation = FrameObservation::body_only();
        observation.face = Some(face_with_droop(0.08));
        let display = engine.process(&observation, start);
        assert_eq!(display.banner, Some(AlertKind::Stroke.banner_text()));

        let mut observation = FrameObservation::body_only();
        observation.face = Some(symmetric_face());
        let display = engine.process(&observation, start + secs(0.1));
        assert!(display.banner.is_none());
    }

    #[test]
    fn unmatched_pattern_drops_hold_but_not_status() {
        let mut engine = engine();
        let start = Instant::now();
        let water = [true, true, false, false, false];

        let frame = |open| {
            let mut observation = FrameObservation::body_only();
            observation.hands = vec![(gesture_hand(open, HandSide::Left), HandSide::Left)];
            observation
        };

        engine.process(&frame(water), start);
        let display = engine.process(&frame(water), start + secs(3.2));
        assert_eq!(display.status_text, "Need Water/Food");
        assert_eq!(display.status_color, StatusColor::Normal);

        // Open palm matches no table row: no countdown, status unchanged
        let display = engine.process(&frame([true; 5]), start + secs(3.5));
        assert!(display.countdown_text.is_none());
        assert_eq!(display.status_text, "Need Water/Food");
    }
}
