//! Timeline synthesis: expand resolved checkpoints into one render state per frame.
//!
//! For every integer tick between the first and last checkpoint (inclusive) the
//! bracketing pair is located, a coefficient is derived from their timestamps, and:
//! - the camera position and look direction are blended linearly;
//! - the blended direction is negated, normalized and turned into an orthonormal basis
//!   against the world-up reference;
//! - the light attributes are blended with the same coefficient.
//!
//! The last tick always uses the final pair so the output ends on the last checkpoint.

use nalgebra::{Matrix3, Matrix4, Vector3};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::PathConfig;
use crate::data::{validate_order, Checkpoint, RenderState, ResolvedCheckpoint, Timestamp};
use crate::error::PathError;
use crate::interp::{lerp_f32, lerp_vec3, segment_coefficient};
use crate::resolve::resolve_checkpoints;

/// Unit look direction used when both bracketing directions are zero.
const DEFAULT_DIRECTION: Vector3<f32> = Vector3::new(0.0, 0.0, -1.0);

/// Numerical fallbacks taken while synthesizing. Never fatal.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SynthesisWarning {
    /// The bracketing pair shares a timestamp; the later checkpoint was used.
    DegenerateInterval { timestamp: Timestamp },
    /// The look direction vanished or was parallel to world-up; a fallback was used.
    DegenerateDirection { timestamp: Timestamp },
}

/// Synthesized states plus any fallbacks taken while producing them.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Timeline {
    pub states: Vec<RenderState>,
    pub warnings: Vec<SynthesisWarning>,
}

/// Resolve, then synthesize, a raw checkpoint list with the default configuration.
pub fn build_timeline(checkpoints: &[Checkpoint]) -> Result<Vec<RenderState>, PathError> {
    if checkpoints.len() < 2 {
        return Err(PathError::InsufficientCheckpoints {
            count: checkpoints.len(),
        });
    }
    validate_order(checkpoints)?;
    let resolved = resolve_checkpoints(checkpoints)?;
    synthesize(&resolved)
}

/// Produce one render state per integer tick using the default configuration.
pub fn synthesize(resolved: &[ResolvedCheckpoint]) -> Result<Vec<RenderState>, PathError> {
    synthesize_with_config(resolved, &PathConfig::default()).map(|timeline| timeline.states)
}

/// Produce one render state per integer tick in `[first.timestamp, last.timestamp]`.
pub fn synthesize_with_config(
    resolved: &[ResolvedCheckpoint],
    cfg: &PathConfig,
) -> Result<Timeline, PathError> {
    let n = resolved.len();
    if n < 2 {
        return Err(PathError::InsufficientCheckpoints { count: n });
    }
    let first = resolved[0].timestamp;
    let last = resolved[n - 1].timestamp;
    let span = last
        .checked_sub(first)
        .ok_or(PathError::SpanTooLarge { first, last })?;
    let span = usize::try_from(span).map_err(|_| PathError::UnorderedTimestamps {
        index: n - 1,
        previous: first,
        current: last,
    })?;

    let mut timeline = Timeline {
        states: Vec::with_capacity(span + 1),
        warnings: Vec::new(),
    };
    let mut cursor = 0;
    for t in first..=last {
        let (a, b) = if t == last {
            (&resolved[n - 2], &resolved[n - 1])
        } else {
            while cursor + 2 < n && t >= resolved[cursor + 1].timestamp {
                cursor += 1;
            }
            (&resolved[cursor], &resolved[cursor + 1])
        };
        let state = sample_segment(a, b, t, cfg, &mut timeline.warnings);
        timeline.states.push(state);
    }

    for warning in &timeline.warnings {
        warn!(?warning, "camera path fallback");
    }
    debug!(
        checkpoints = n,
        frames = timeline.states.len(),
        first,
        last,
        "synthesized camera timeline"
    );
    Ok(timeline)
}

/// Render state at tick `t` interpolated between the bracketing pair `a`, `b`.
pub fn sample_segment(
    a: &ResolvedCheckpoint,
    b: &ResolvedCheckpoint,
    t: Timestamp,
    cfg: &PathConfig,
    warnings: &mut Vec<SynthesisWarning>,
) -> RenderState {
    let coeff = segment_coefficient(a.timestamp, b.timestamp, t).unwrap_or_else(|| {
        warnings.push(SynthesisWarning::DegenerateInterval { timestamp: t });
        1.0
    });

    let position = lerp_vec3(&a.position, &b.position, coeff);
    // Vanishing is judged against the bracketing magnitudes; directions are unnormalized.
    let threshold = cfg.epsilon * a.direction.norm().max(b.direction.norm());
    let direction = lerp_vec3(&a.direction, &b.direction, coeff)
        .try_normalize(threshold)
        .unwrap_or_else(|| {
            warnings.push(SynthesisWarning::DegenerateDirection { timestamp: t });
            [nearer(a, b, coeff), farther(a, b, coeff)]
                .into_iter()
                .find_map(|d| d.try_normalize(threshold))
                .unwrap_or(DEFAULT_DIRECTION)
        });
    let forward = -direction;

    let (basis, degenerate) = camera_basis(&forward, cfg);
    if degenerate {
        warnings.push(SynthesisWarning::DegenerateDirection { timestamp: t });
    }

    RenderState {
        timestamp: t,
        view_transform: basis.to_homogeneous() * Matrix4::new_translation(&position),
        position,
        light_position: lerp_vec3(&a.light_position, &b.light_position, coeff),
        light_size: lerp_f32(a.light_size, b.light_size, coeff),
        light_intensity: lerp_f32(a.light_intensity, b.light_intensity, coeff),
    }
}

fn nearer(a: &ResolvedCheckpoint, b: &ResolvedCheckpoint, coeff: f32) -> Vector3<f32> {
    if coeff < 0.5 {
        a.direction
    } else {
        b.direction
    }
}

fn farther(a: &ResolvedCheckpoint, b: &ResolvedCheckpoint, coeff: f32) -> Vector3<f32> {
    if coeff < 0.5 {
        b.direction
    } else {
        a.direction
    }
}

/// Rotation whose rows are (right, up, forward) for a unit `forward` vector.
/// The flag is set when `forward` was parallel to world-up and the fallback axis was used.
pub fn camera_basis(forward: &Vector3<f32>, cfg: &PathConfig) -> (Matrix3<f32>, bool) {
    let mut right = forward.cross(&cfg.world_up());
    let degenerate = right.norm() <= cfg.epsilon;
    if degenerate {
        right = forward.cross(&cfg.fallback_up());
    }
    let right = right.normalize();
    let up = right.cross(forward).normalize();
    (Matrix3::from_columns(&[right, up, *forward]).transpose(), degenerate)
}
