//! Application configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use oxymouse_common::config::{
    config_file_path, load_json, load_json_or_default, save_json, LoggingConfig,
};
use oxymouse_common::error::OxymouseResult;

use crate::params::{Algorithm, BezierParams, GaussianParams, PerlinParams, ReplayConfig};

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Trajectory generation defaults.
    pub synthesis: SynthesisConfig,
}

/// Which algorithm to use and how each one is tuned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    pub algorithm: Algorithm,
    pub bezier: BezierParams,
    pub gaussian: GaussianParams,
    pub perlin: PerlinParams,
    pub replay: ReplayConfig,
}

impl SynthesisConfig {
    /// Validate every parameter block, not just the selected one.
    pub fn validate(&self) -> OxymouseResult<()> {
        self.bezier.validate()?;
        self.gaussian.validate()?;
        self.perlin.validate()?;
        self.replay.validate()
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let path = config_file_path();
        let config: Self = load_json_or_default(&path);
        tracing::debug!(path = %path.display(), algorithm = %config.synthesis.algorithm, "config loaded");
        config
    }

    /// Load config from an explicit path. Missing or malformed files are errors.
    pub fn load_from(path: &Path) -> OxymouseResult<Self> {
        let config: Self = load_json(path)?;
        config.synthesis.validate()?;
        Ok(config)
    }

    /// Save config to an explicit path.
    pub fn save_to(&self, path: &Path) -> OxymouseResult<()> {
        save_json(path, self)
    }
}
