pub use glam::Vec2;

/// Magnitudes at or below this are treated as "no displacement".
pub const NORMALIZE_EPSILON: f32 = 0.01;

/// Scales `v` to unit length.
///
/// Vectors whose magnitude is not above [`NORMALIZE_EPSILON`] come back
/// untouched, unlike `Vec2::normalize_or_zero` which zeroes them.
pub fn normalize(v: Vec2) -> Vec2 {
    let mag = v.length();
    if mag > NORMALIZE_EPSILON { v / mag } else { v }
}
