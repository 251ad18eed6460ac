//! Body presence tracking

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

/// Per-frame presence output
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PresenceReport {
    /// Fall alert is active (body gone past threshold)
    pub alert_active: bool,

    /// Time left before the alert fires, while absent and pre-threshold.
    /// `None` when the body is present or the alert has already fired.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searching: Option<Duration>,
}

/// Debounces body absence into a fall alert.
///
/// Two states: present, or absent since a recorded instant. The alert is
/// level-triggered: it reports active on every frame the body remains gone
/// past the threshold, and clears the first frame the body is seen again.
#[derive(Debug)]
pub struct PresenceTracker {
    threshold: Duration,
    absence_started: Option<Instant>,
    alert_active: bool,
}

impl PresenceTracker {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            absence_started: None,
            alert_active: false,
        }
    }

    /// Advance one frame.
    ///
    /// `now` must come from a monotonic clock and be non-decreasing across
    /// calls; the tracker never reads the clock itself.
    pub fn update(&mut self, body_present: bool, now: Instant) -> PresenceReport {
        if body_present {
            if self.alert_active {
                info!("body reacquired, fall alert cleared");
            } else if self.absence_started.is_some() {
                debug!("body reacquired before threshold");
            }
            self.absence_started = None;
            self.alert_active = false;
            return PresenceReport {
                alert_active: false,
                searching: None,
            };
        }

        let since = *self.absence_started.get_or_insert(now);
        let elapsed = now.duration_since(since);

        if elapsed > self.threshold {
            if !self.alert_active {
                info!(elapsed_s = elapsed.as_secs_f32(), "fall alert raised");
            }
            self.alert_active = true;
            PresenceReport {
                alert_active: true,
                searching: None,
            }
        } else {
            PresenceReport {
                alert_active: false,
                searching: Some(self.threshold - elapsed),
            }
        }
    }

    /// Forget any tracked absence (on patient change)
    pub fn reset(&mut self) {
        self.absence_started = None;
        self.alert_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> PresenceTracker {
        PresenceTracker::new(Duration::from_secs_f32(5.0))
    }

    #[test]
    fn present_body_never_alerts() {
        let mut presence = tracker();
        let start = Instant::now();
        for i in 0..10 {
            let report = presence.update(true, start + Duration::from_millis(i * 33));
            assert!(!report.alert_active);
            assert!(report.searching.is_none());
        }
    }

    #[test]
    fn absence_counts_down_then_alerts_past_threshold() {
        let mut presence = tracker();
        let start = Instant::now();

        let report = presence.update(false, start);
        assert!(!report.alert_active);
        assert_eq!(report.searching, Some(Duration::from_secs_f32(5.0)));

        let report = presence.update(false, start + Duration::from_secs_f32(4.9));
        assert!(!report.alert_active);
        let remaining = report.searching.unwrap();
        assert!(remaining <= Duration::from_secs_f32(0.11));

        let report = presence.update(false, start + Duration::from_secs_f32(5.01));
        assert!(report.alert_active);
        assert!(report.searching.is_none());
    }

    #[test]
    fn alert_is_level_triggered_while_absent() {
        let mut presence = tracker();
        let start = Instant::now();
        presence.update(false, start);

        for i in 0..30 {
            let now = start + Duration::from_secs_f32(5.1) + Duration::from_millis(i * 33);
            assert!(presence.update(false, now).alert_active);
        }
    }

    #[test]
    fn reappearing_body_clears_alert_immediately() {
        let mut presence = tracker();
        let start = Instant::now();
        presence.update(false, start);
        assert!(presence.update(false, start + Duration::from_secs(6)).alert_active);

        let report = presence.update(true, start + Duration::from_secs_f32(6.1));
        assert!(!report.alert_active);

        // A fresh absence starts its own countdown from scratch
        let report = presence.update(false, start + Duration::from_secs_f32(6.2));
        assert!(!report.alert_active);
        assert_eq!(report.searching, Some(Duration::from_secs_f32(5.0)));
    }

    proptest::proptest! {
        #[test]
        fn never_alerts_before_threshold(elapsed_ms in 0u64..5000) {
            let mut presence = tracker();
            let start = Instant::now();
            presence.update(false, start);
            let report = presence.update(false, start + Duration::from_millis(elapsed_ms));
            proptest::prop_assert!(!report.alert_active);
            proptest::prop_assert!(report.searching.is_some());
        }
    }
}
