//! Attribute resolution: fill optional light attributes on every checkpoint.
//!
//! Model:
//! - Checkpoints before the first declaration take that first value (back-fill).
//! - Checkpoints between two declarations are blended by timestamp ratio.
//! - Checkpoints after the last declaration keep the last value (forward-fill).
//!
//! Each attribute is resolved on its own; values across attributes are never correlated.

use nalgebra::Vector3;
use tracing::debug;

use crate::data::{Checkpoint, ResolvedCheckpoint};
use crate::error::PathError;
use crate::interp::{segment_coefficient, Lerp};

/// Read access to one optional checkpoint attribute.
///
/// `get` returning `None` means the checkpoint does not declare the attribute.
pub trait AttributeSelector {
    type Value: Lerp;
    const NAME: &'static str;

    fn get(checkpoint: &Checkpoint) -> Option<Self::Value>;
}

pub struct LightPosition;
pub struct LightSize;
pub struct LightIntensity;

impl AttributeSelector for LightPosition {
    type Value = Vector3<f32>;
    const NAME: &'static str = "light_position";

    fn get(checkpoint: &Checkpoint) -> Option<Self::Value> {
        checkpoint.light_position
    }
}

impl AttributeSelector for LightSize {
    type Value = f32;
    const NAME: &'static str = "light_size";

    fn get(checkpoint: &Checkpoint) -> Option<Self::Value> {
        checkpoint.light_size
    }
}

impl AttributeSelector for LightIntensity {
    type Value = f32;
    const NAME: &'static str = "light_intensity";

    fn get(checkpoint: &Checkpoint) -> Option<Self::Value> {
        checkpoint.light_intensity
    }
}

/// Resolve attribute `A` for every checkpoint.
///
/// Fails with [`PathError::MissingAttribute`] when no checkpoint declares it.
/// A zero-length interval between two declarations takes the later value.
pub fn resolve_attribute<A: AttributeSelector>(
    checkpoints: &[Checkpoint],
) -> Result<Vec<A::Value>, PathError> {
    let mut values: Vec<Option<A::Value>> = vec![None; checkpoints.len()];
    let mut last_known: Option<(usize, A::Value)> = None;

    for (i, checkpoint) in checkpoints.iter().enumerate() {
        let Some(value) = A::get(checkpoint) else {
            continue;
        };
        match last_known {
            None => values[..i].fill(Some(value)),
            Some((p, prev)) => {
                let (t0, t1) = (checkpoints[p].timestamp, checkpoint.timestamp);
                for j in (p + 1)..i {
                    let coeff =
                        segment_coefficient(t0, t1, checkpoints[j].timestamp).unwrap_or(1.0);
                    values[j] = Some(A::Value::lerp(&prev, &value, coeff));
                }
            }
        }
        values[i] = Some(value);
        last_known = Some((i, value));
    }

    let Some((last, value)) = last_known else {
        return Err(PathError::missing_attribute(A::NAME));
    };
    values[last + 1..].fill(Some(value));

    debug!(
        attribute = A::NAME,
        checkpoints = checkpoints.len(),
        "resolved checkpoint attribute"
    );
    // Every slot is filled: back-fill covers the prefix, the scan covers the middle and
    // forward-fill covers the suffix.
    Ok(values.into_iter().flatten().collect())
}

/// Resolve every light attribute and pair the results with the checkpoints.
pub fn resolve_checkpoints(
    checkpoints: &[Checkpoint],
) -> Result<Vec<ResolvedCheckpoint>, PathError> {
    let light_positions = resolve_attribute::<LightPosition>(checkpoints)?;
    let light_sizes = resolve_attribute::<LightSize>(checkpoints)?;
    let light_intensities = resolve_attribute::<LightIntensity>(checkpoints)?;

    Ok(checkpoints
        .iter()
        .zip(light_positions)
        .zip(light_sizes)
        .zip(light_intensities)
        .map(
            |(((cp, light_position), light_size), light_intensity)| ResolvedCheckpoint {
                timestamp: cp.timestamp,
                position: cp.position,
                direction: cp.direction,
                light_position,
                light_size,
                light_intensity,
            },
        )
        .collect())
}
