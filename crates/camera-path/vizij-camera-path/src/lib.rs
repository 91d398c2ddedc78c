//! Vizij Camera Path (engine-agnostic)
//!
//! Turns a sparse, irregularly spaced list of camera/light checkpoints into one fully
//! resolved render state per integer frame:
//! - `resolve` fills optional light attributes on every checkpoint (back-fill,
//!   timestamp-weighted interpolation, forward-fill);
//! - `timeline` walks the frame range, blends each bracketing pair and builds an
//!   orthonormal view transform per frame;
//! - `path_json` decodes the flat JSON checkpoint document and exports render states.

pub mod config;
pub mod data;
pub mod error;
pub mod interp;
pub mod path_json;
pub mod resolve;
pub mod timeline;

// Re-exports for consumers (renderers)
pub use config::PathConfig;
pub use data::{validate_order, Checkpoint, RenderState, ResolvedCheckpoint, Timestamp};
pub use error::PathError;
pub use interp::Lerp;
pub use path_json::{export_states_json, load_camera_path, parse_camera_path_json};
pub use resolve::{
    resolve_attribute, resolve_checkpoints, AttributeSelector, LightIntensity, LightPosition,
    LightSize,
};
pub use timeline::{
    build_timeline, synthesize, synthesize_with_config, SynthesisWarning, Timeline,
};

/// Camera path result type
pub type Result<T> = core::result::Result<T, PathError>;
