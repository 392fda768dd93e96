//! Error types shared across OxyMouse crates.

use std::fmt;
use std::path::PathBuf;

/// Coordinate axis, used to report which axis of a trajectory failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Top-level error type for OxyMouse operations.
#[derive(Debug, thiserror::Error)]
pub enum OxymouseError {
    #[error("Invalid algorithm: {name:?} (expected one of \"bezier\", \"gaussian\", \"perlin\")")]
    InvalidAlgorithm { name: String },

    #[error("Degenerate trajectory on {axis} axis: {message}")]
    DegenerateTrajectory { axis: Axis, message: String },

    #[error("Invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using OxymouseError.
pub type OxymouseResult<T> = Result<T, OxymouseError>;

impl OxymouseError {
    pub fn invalid_algorithm(name: impl Into<String>) -> Self {
        Self::InvalidAlgorithm { name: name.into() }
    }

    pub fn degenerate(axis: Axis, msg: impl Into<String>) -> Self {
        Self::DegenerateTrajectory {
            axis,
            message: msg.into(),
        }
    }

    pub fn invalid_parameter(name: &'static str, msg: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
