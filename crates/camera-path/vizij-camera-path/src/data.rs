//! Camera path data model: authored checkpoints, resolved checkpoints and the
//! per-frame render states produced from them.

use nalgebra::{Matrix3, Matrix4, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::PathError;

/// Integer frame index on the path's time axis.
pub type Timestamp = i64;

/// One authored waypoint. Light attributes are independently optional.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Checkpoint {
    pub timestamp: Timestamp,
    pub position: Vector3<f32>,
    /// Camera look direction, not necessarily normalized.
    pub direction: Vector3<f32>,
    #[serde(default)]
    pub light_position: Option<Vector3<f32>>,
    #[serde(default)]
    pub light_size: Option<f32>,
    #[serde(default)]
    pub light_intensity: Option<f32>,
}

impl Checkpoint {
    pub fn new(timestamp: Timestamp, position: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            timestamp,
            position,
            direction,
            light_position: None,
            light_size: None,
            light_intensity: None,
        }
    }

    pub fn with_light_position(mut self, light_position: Vector3<f32>) -> Self {
        self.light_position = Some(light_position);
        self
    }

    pub fn with_light_size(mut self, light_size: f32) -> Self {
        self.light_size = Some(light_size);
        self
    }

    pub fn with_light_intensity(mut self, light_intensity: f32) -> Self {
        self.light_intensity = Some(light_intensity);
        self
    }
}

/// A checkpoint after attribute resolution: every light attribute is populated.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ResolvedCheckpoint {
    pub timestamp: Timestamp,
    pub position: Vector3<f32>,
    pub direction: Vector3<f32>,
    pub light_position: Vector3<f32>,
    pub light_size: f32,
    pub light_intensity: f32,
}

/// Fully resolved state for a single integer frame.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RenderState {
    pub timestamp: Timestamp,
    /// Camera rotation (basis transposed) composed with a translation by `position`.
    pub view_transform: Matrix4<f32>,
    /// Interpolated camera position the transform was built from.
    pub position: Vector3<f32>,
    pub light_position: Vector3<f32>,
    pub light_size: f32,
    pub light_intensity: f32,
}

impl RenderState {
    /// Upper-left 3x3 rotation block of the view transform.
    pub fn rotation(&self) -> Matrix3<f32> {
        self.view_transform.fixed_view::<3, 3>(0, 0).into_owned()
    }
}

/// Check that timestamps never decrease. Equal neighbours are allowed.
pub fn validate_order(checkpoints: &[Checkpoint]) -> Result<(), PathError> {
    for (index, pair) in checkpoints.windows(2).enumerate() {
        if pair[1].timestamp < pair[0].timestamp {
            return Err(PathError::UnorderedTimestamps {
                index: index + 1,
                previous: pair[0].timestamp,
                current: pair[1].timestamp,
            });
        }
    }
    Ok(())
}
