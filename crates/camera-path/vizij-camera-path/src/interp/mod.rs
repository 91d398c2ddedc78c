//! Interpolation capability shared by resolver and synthesizer.

pub mod functions;

use nalgebra::Vector3;

pub use functions::{lerp_f32, lerp_vec3, segment_coefficient};

/// Values that can be blended linearly between two checkpoints.
pub trait Lerp: Copy {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        lerp_f32(*a, *b, t)
    }
}

impl Lerp for Vector3<f32> {
    #[inline]
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        lerp_vec3(a, b, t)
    }
}
