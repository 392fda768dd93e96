//! Show or persist the effective configuration.

use std::path::Path;

use oxymouse_common::config::config_file_path;
use oxymouse_trajectory_model::config::AppConfig;

pub fn run(config: &AppConfig, explicit: Option<&Path>, write: bool) -> anyhow::Result<()> {
    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(config_file_path);

    println!("# {}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);

    if write {
        config
            .save_to(&path)
            .map_err(|e| anyhow::anyhow!("Failed to write config {}: {e}", path.display()))?;
        println!("Config written to {}", path.display());
    }

    Ok(())
}
