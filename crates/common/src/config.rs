//! Configuration file helpers.
//!
//! The typed application config lives in the model crate; this module
//! only knows where config files live and how to read them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{OxymouseError, OxymouseResult};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "oxymouse_synthesis=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("oxymouse").join("config.json")
}

/// Read and parse a JSON config file, reporting every failure.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> OxymouseResult<T> {
    if !path.exists() {
        return Err(OxymouseError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| OxymouseError::config(format!("Failed to parse {}: {e}", path.display())))
}

/// Load a JSON config file, falling back to defaults when it is missing or broken.
pub fn load_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    if !path.exists() {
        return T::default();
    }
    match load_json(path) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to load config at {:?}: {}", path, e);
            T::default()
        }
    }
}

/// Write a value as pretty JSON, creating parent directories.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> OxymouseResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}
