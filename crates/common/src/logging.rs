//! Tracing subscriber setup.
//!
//! Library crates only emit events; the binary installs the subscriber once
//! at startup. Output always goes to stderr so stdout stays free for
//! generated trajectories.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{OxymouseError, OxymouseResult};

/// Install the global subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over `config.level`. Fails if the level is
/// not a valid filter directive or a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> OxymouseResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            OxymouseError::config(format!("invalid log level {:?}: {e}", config.level))
        })?,
    };

    let json_layer = config
        .json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!config.json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| OxymouseError::config(format!("logging already initialized: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let config = LoggingConfig::default();
        init_logging(&config).unwrap();
        assert!(init_logging(&config).is_err());
    }
}
