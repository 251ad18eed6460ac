//! Finger openness derivation from hand landmark geometry

use serde::{Deserialize, Serialize};

use crate::observation::{HandLandmarks, HandSide};

/// Open flags for the five fingers, ordered [Thumb, Index, Middle, Ring, Pinky]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FingerState(pub [bool; 5]);

impl FingerState {
    pub const fn new(open: [bool; 5]) -> Self {
        Self(open)
    }

    pub fn open_count(&self) -> usize {
        self.0.iter().filter(|&&open| open).count()
    }
}

/// Derive finger openness for one hand.
///
/// The thumb is mirror-safe: its tip extends along x away from the palm, in a
/// direction that depends on handedness. The other four fingers are open when
/// the tip sits above (smaller y than) the pip joint two indices below it.
pub fn finger_state(hand: &HandLandmarks, side: HandSide) -> FingerState {
    let tip = hand.point(HandLandmarks::TIP_IDS[0]);
    let ip = hand.point(HandLandmarks::THUMB_IP);
    let thumb_open = match side {
        HandSide::Left => tip.x < ip.x,
        HandSide::Right => tip.x > ip.x,
    };

    let mut open = [false; 5];
    open[0] = thumb_open;
    for finger in 1..5 {
        let tip_id = HandLandmarks::TIP_IDS[finger];
        open[finger] = hand.point(tip_id).y < hand.point(tip_id - 2).y;
    }

    FingerState(open)
}
