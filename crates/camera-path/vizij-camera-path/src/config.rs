//! Synthesis configuration for vizij-camera-path.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Reference axes and tolerances used when building view transforms.
/// Defaults reproduce the classic Y-up camera basis.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PathConfig {
    /// World-up reference for the camera basis.
    pub world_up: [f32; 3],
    /// Replaces `world_up` when the forward vector is parallel to it.
    pub fallback_up: [f32; 3],
    /// Lengths at or below this are treated as zero.
    pub epsilon: f32,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            world_up: [0.0, 1.0, 0.0],
            fallback_up: [0.0, 0.0, 1.0],
            epsilon: 1e-6,
        }
    }
}

impl PathConfig {
    pub(crate) fn world_up(&self) -> Vector3<f32> {
        Vector3::from(self.world_up)
    }

    pub(crate) fn fallback_up(&self) -> Vector3<f32> {
        Vector3::from(self.fallback_up)
    }
}
