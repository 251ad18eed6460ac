//! Synthetic observations for the demo and scenario tests
//!
//! Real deployments plug a camera-backed provider in behind the
//! [`PerceptionProvider`] trait; the demo binary replays this script instead.

use perception::{
    FaceLandmarks, FingerState, FrameObservation, HandLandmarks, HandSide, Landmark,
    ScriptedProvider,
};

/// Build a hand whose landmark geometry derives to the given finger pattern
pub fn gesture_hand(open: [bool; 5], side: HandSide) -> HandLandmarks {
    let mut points = vec![Landmark::new(0.5, 0.8, 0.0); HandLandmarks::POINT_COUNT];

    let thumb_dx = match (side, open[0]) {
        (HandSide::Left, true) | (HandSide::Right, false) => -0.1,
        (HandSide::Left, false) | (HandSide::Right, true) => 0.1,
    };
    points[HandLandmarks::THUMB_IP] = Landmark::new(0.5, 0.7, 0.0);
    points[HandLandmarks::TIP_IDS[0]] = Landmark::new(0.5 + thumb_dx, 0.7, 0.0);

    for finger in 1..5 {
        let tip_id = HandLandmarks::TIP_IDS[finger];
        points[tip_id - 2] = Landmark::new(0.5, 0.5, 0.0);
        let tip_y = if open[finger] { 0.3 } else { 0.6 };
        points[tip_id] = Landmark::new(0.5, tip_y, 0.0);
    }

    let hand = HandLandmarks::new(points).expect("fixed-size point set");
    debug_assert_eq!(
        perception::finger_state(&hand, side),
        FingerState::new(open)
    );
    hand
}

/// Symmetric face: both mouth corners level below the nose
pub fn symmetric_face() -> FaceLandmarks {
    face_with_droop(0.0)
}

/// Face with the right mouth corner drooping by `droop` below the left
pub fn face_with_droop(droop: f32) -> FaceLandmarks {
    let mut points = vec![Landmark::default(); FaceLandmarks::MIN_POINTS];
    points[FaceLandmarks::NOSE_TIP] = Landmark::new(0.5, 0.4, 0.0);
    points[FaceLandmarks::LEFT_MOUTH_CORNER] = Landmark::new(0.4, 0.6, 0.0);
    points[FaceLandmarks::RIGHT_MOUTH_CORNER] = Landmark::new(0.6, 0.6 + droop, 0.0);
    FaceLandmarks::new(points).expect("fixed-size point set")
}

/// Demo scenario at the given frame rate:
/// calm monitoring, an emergency thumb hold, a dropped frame, a stroke-like
/// droop, then the patient out of frame long enough to trip the fall alert.
pub fn demo_script(frame_rate: u32) -> ScriptedProvider {
    let fps = frame_rate.max(1);
    let frames_for = |seconds: f32| (seconds * fps as f32) as u32;
    let mut provider = ScriptedProvider::default();

    // 2s: patient resting, face symmetric
    for _ in 0..frames_for(2.0) {
        let mut observation = FrameObservation::body_only();
        observation.face = Some(symmetric_face());
        provider.push(observation);
    }

    // 4s: thumb-only gesture held well past the 3s dwell
    for _ in 0..frames_for(4.0) {
        let mut observation = FrameObservation::body_only();
        observation.hands = vec![(
            gesture_hand([true, false, false, false, false], HandSide::Right),
            HandSide::Right,
        )];
        provider.push(observation);
    }

    // One frame the camera fails to deliver
    provider.push_failure("demo: frame dropped");

    // 2s: mouth droop above the stroke threshold
    for _ in 0..frames_for(2.0) {
        let mut observation = FrameObservation::body_only();
        observation.face = Some(face_with_droop(0.08));
        provider.push(observation);
    }

    // 7s: patient out of frame, past the 5s fall threshold
    for _ in 0..frames_for(7.0) {
        provider.push(FrameObservation::empty());
    }

    // 1s: patient back, alert clears
    for _ in 0..frames_for(1.0) {
        provider.push(FrameObservation::body_only());
    }

    provider
}
