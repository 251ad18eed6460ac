//! Hold-to-confirm gesture debouncing

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use crate::label::GestureLabel;

/// Per-frame hold tracker output
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoldReport {
    /// Sticky confirmed status; survives the hand leaving the frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed: Option<GestureLabel>,

    /// Label currently being held, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holding: Option<GestureLabel>,

    /// Whole seconds left (ceil) before the held label confirms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown: Option<u32>,
}

/// Debounces per-frame gesture labels into a confirmed status.
///
/// A label must be observed continuously past the hold time before it
/// confirms. The confirmed status is sticky: losing the hand or seeing an
/// unmatched pattern drops the in-progress hold but keeps the last confirmed
/// label on display until a different label is held long enough to replace it.
#[derive(Debug)]
pub struct GestureHoldTracker {
    hold_time: Duration,
    current: Option<(GestureLabel, Instant)>,
    confirmed: Option<GestureLabel>,
}

impl GestureHoldTracker {
    pub fn new(hold_time: Duration) -> Self {
        Self {
            hold_time,
            current: None,
            confirmed: None,
        }
    }

    /// Advance one frame with the label observed this frame (if any).
    ///
    /// `now` must come from a monotonic clock and be non-decreasing across
    /// calls.
    pub fn update(&mut self, observed: Option<GestureLabel>, now: Instant) -> HoldReport {
        let Some(label) = observed else {
            // No hand, or an unmatched pattern: drop the hold, keep the
            // sticky confirmed status.
            if self.current.take().is_some() {
                debug!("gesture hold dropped");
            }
            return self.report(None, None);
        };

        match self.current {
            Some((held, since)) if held == label => {
                let elapsed = now.duration_since(since);
                if elapsed > self.hold_time {
                    if self.confirmed != Some(label) {
                        info!(gesture = %label, "gesture confirmed");
                        self.confirmed = Some(label);
                    }
                    self.report(Some(label), None)
                } else {
                    let seconds_left =
                        (self.hold_time.as_secs_f32() - elapsed.as_secs_f32()).ceil() as u32;
                    self.report(Some(label), Some(seconds_left))
                }
            }
            _ => {
                // New label: restart the dwell timer. No countdown is shown
                // on the transition frame.
                debug!(gesture = %label, "gesture hold started");
                self.current = Some((label, now));
                self.report(Some(label), None)
            }
        }
    }

    /// Clear both the hold in progress and the sticky status (patient change)
    pub fn reset(&mut self) {
        self.current = None;
        self.confirmed = None;
    }

    fn report(&self, holding: Option<GestureLabel>, countdown: Option<u32>) -> HoldReport {
        HoldReport {
            confirmed: self.confirmed,
            holding,
            countdown,
        }
    }
}
