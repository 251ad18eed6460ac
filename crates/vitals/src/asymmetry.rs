//! Mouth asymmetry scoring

use perception::FaceLandmarks;

/// Score how unevenly the mouth corners sit relative to the nose tip.
///
/// Each corner's vertical distance from the nose is measured; the score is the
/// absolute difference between the two sides. Zero for a symmetric face,
/// larger the more one corner droops.
pub fn mouth_asymmetry(face: &FaceLandmarks) -> f32 {
    let nose = face.nose_tip();
    let left_rel = (face.left_mouth_corner().y - nose.y).abs();
    let right_rel = (face.right_mouth_corner().y - nose.y).abs();
    (left_rel - right_rel).abs()
}
