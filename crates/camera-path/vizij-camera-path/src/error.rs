//! Error types for camera path resolution and synthesis

use serde::{Deserialize, Serialize};

use crate::data::Timestamp;

/// Structural failures that abort timeline construction.
///
/// Numerical edge cases (zero-length intervals, degenerate directions) are not errors;
/// they are reported as [`crate::timeline::SynthesisWarning`] alongside the output.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PathError {
    /// No checkpoint declares an optional attribute, so it cannot be extrapolated
    #[error("Attribute '{attribute}' is not declared on any checkpoint")]
    MissingAttribute { attribute: String },

    /// Interpolation needs at least one bracketing pair
    #[error("At least 2 checkpoints are required, got {count}")]
    InsufficientCheckpoints { count: usize },

    /// Checkpoint timestamps went backwards
    #[error("Checkpoint {index} has timestamp {current}, earlier than the previous {previous}")]
    UnorderedTimestamps {
        index: usize,
        previous: Timestamp,
        current: Timestamp,
    },

    /// The frame range cannot be represented as a tick count
    #[error("Timeline from {first} to {last} spans more ticks than can be represented")]
    SpanTooLarge { first: Timestamp, last: Timestamp },

    /// The camera path document has the wrong shape
    #[error("Invalid camera path document: {reason}")]
    InvalidDocument { reason: String },

    /// Serialization error
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },

    /// IO error
    #[error("IO error: {reason}")]
    Io { reason: String },
}

impl PathError {
    pub fn missing_attribute(attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            attribute: attribute.into(),
        }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::MissingAttribute { .. } => "attribute",
            Self::InsufficientCheckpoints { .. }
            | Self::UnorderedTimestamps { .. }
            | Self::SpanTooLarge { .. } => "validation",
            Self::InvalidDocument { .. } | Self::Serialization { .. } => "serialization",
            Self::Io { .. } => "io",
        }
    }
}

impl From<std::io::Error> for PathError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PathError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}
