//! Interpolation helpers:
//! - lerp_f32 / lerp_vec3 (component-wise linear blend)
//! - segment_coefficient (normalized position of a tick inside a bracketing pair)

use nalgebra::Vector3;

use crate::data::Timestamp;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    t * b + (1.0 - t) * a
}

#[inline]
pub fn lerp_vec3(a: &Vector3<f32>, b: &Vector3<f32>, t: f32) -> Vector3<f32> {
    b * t + a * (1.0 - t)
}

/// Normalized position of `t` between `t0` and `t1`.
/// Returns `None` for a zero-length interval; callers treat the later endpoint as
/// authoritative in that case. Differences are taken in `i128` so any pair of
/// timestamps is representable.
#[inline]
pub fn segment_coefficient(t0: Timestamp, t1: Timestamp, t: Timestamp) -> Option<f32> {
    if t1 == t0 {
        return None;
    }
    let elapsed = i128::from(t) - i128::from(t0);
    let interval = i128::from(t1) - i128::from(t0);
    Some((elapsed as f64 / interval as f64) as f32)
}
