use std::fs;
use std::path::Path;

use nalgebra::Vector3;
use serde::Deserialize;
use tracing::debug;

use crate::data::{validate_order, Checkpoint, RenderState, Timestamp};
use crate::error::PathError;

/// Public API: parse a flat camera-path JSON document into checkpoints.
///
/// Notes:
/// - The document must be an array of objects with `t`, `x`/`y`/`z` and `dirx`/`diry`/`dirz`.
/// - `t` is truncated to an integer frame index.
/// - The light position is declared only when `light_x`, `light_y` and `light_z` are all present.
/// - `light_size` / `light_intensity` are declared whenever present, whatever their sign.
/// - Timestamps must be non-decreasing.
pub fn parse_camera_path_json(s: &str) -> Result<Vec<Checkpoint>, PathError> {
    let doc: serde_json::Value = serde_json::from_str(s)?;
    let serde_json::Value::Array(items) = doc else {
        return Err(PathError::InvalidDocument {
            reason: "expected a JSON array of checkpoints".into(),
        });
    };

    let mut checkpoints = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let raw: RawCheckpoint =
            serde_json::from_value(item).map_err(|e| PathError::Serialization {
                reason: format!("checkpoint {index}: {e}"),
            })?;
        checkpoints.push(raw.into_checkpoint());
    }
    validate_order(&checkpoints)?;

    debug!(checkpoints = checkpoints.len(), "parsed camera path");
    Ok(checkpoints)
}

/// Read and parse a camera-path JSON file.
pub fn load_camera_path(path: impl AsRef<Path>) -> Result<Vec<Checkpoint>, PathError> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_camera_path_json(&text)
}

/// Export render states as serde_json::Value (stable schema for FFI/serialization).
/// `view_transform` is written as 16 column-major floats.
pub fn export_states_json(states: &[RenderState]) -> serde_json::Value {
    serde_json::to_value(states).unwrap_or(serde_json::Value::Null)
}

#[derive(Debug, Deserialize)]
struct RawCheckpoint {
    t: f64,
    x: f32,
    y: f32,
    z: f32,
    dirx: f32,
    diry: f32,
    dirz: f32,
    #[serde(default)]
    light_x: Option<f32>,
    #[serde(default)]
    light_y: Option<f32>,
    #[serde(default)]
    light_z: Option<f32>,
    #[serde(default)]
    light_size: Option<f32>,
    #[serde(default)]
    light_intensity: Option<f32>,
}

impl RawCheckpoint {
    fn into_checkpoint(self) -> Checkpoint {
        let light_position = match (self.light_x, self.light_y, self.light_z) {
            (Some(x), Some(y), Some(z)) => Some(Vector3::new(x, y, z)),
            _ => None,
        };
        Checkpoint {
            timestamp: self.t as Timestamp,
            position: Vector3::new(self.x, self.y, self.z),
            direction: Vector3::new(self.dirx, self.diry, self.dirz),
            light_position,
            light_size: self.light_size,
            light_intensity: self.light_intensity,
        }
    }
}
