//! Joint angle calculation using dot product
//!
//! Calculates the angle at a joint from the two rays leaving it,
//! e.g. elbow→shoulder (upper arm) and elbow→wrist (forearm).

use nalgebra::Vector3;

use crate::pose::Landmark;

/// Rays shorter than this are treated as coincident points
const MIN_RAY_LENGTH: f64 = 1e-4;

fn position(lm: &Landmark) -> Vector3<f64> {
    Vector3::new(lm.x as f64, lm.y as f64, lm.z as f64)
}

/// Calculate the 3D angle at vertex `b` in degrees
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns `None` when any landmark is below `min_visibility`, when
/// either ray has zero length, or when a coordinate is not finite. Otherwise the result lies in [0°, 180°]:
/// - 90° = joint bent at a right angle
/// - 180° = fully straight
pub fn calculate_angle(
    a: &Landmark,
    b: &Landmark,
    c: &Landmark,
    min_visibility: f32,
) -> Option<f64> {
    if !(a.is_visible(min_visibility) && b.is_visible(min_visibility) && c.is_visible(min_visibility)) {
        return None;
    }

    let vertex = position(b);
    let v1 = position(a) - vertex;
    let v2 = position(c) - vertex;

    let mag1 = v1.norm();
    let mag2 = v2.norm();
    // NaN fails every comparison, so test for finiteness first
    if !(mag1.is_finite() && mag2.is_finite()) || mag1 < MIN_RAY_LENGTH || mag2 < MIN_RAY_LENGTH {
        return None;
    }

    // Clamp guards acos against rounding just outside [-1, 1]
    let cos_angle = (v1.dot(&v2) / (mag1 * mag2)).clamp(-1.0, 1.0);
    Some(cos_angle.acos().to_degrees())
}

/// `p1.y - p2.y`: positive when p1 sits lower in the image (y grows downward)
pub fn calculate_vertical_alignment(p1: &Landmark, p2: &Landmark) -> f32 {
    p1.y - p2.y
}

/// `p1.x - p2.x`: positive when p1 sits to the right of p2
pub fn calculate_horizontal_alignment(p1: &Landmark, p2: &Landmark) -> f32 {
    p1.x - p2.x
}

/// Combine left/right measurements, preferring both sides when available
pub fn average_angle(left: Option<f64>, right: Option<f64>) -> Option<f64> {
    match (left, right) {
        (Some(l), Some(r)) => Some((l + r) / 2.0),
        (one, None) | (None, one) => one,
    }
}
