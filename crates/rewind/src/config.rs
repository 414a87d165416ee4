//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the `rewind` binary, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RewindConfig {
    /// File the terminal renderer writes logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Show cell numbers 1-9 in empty squares.
    #[serde(default = "default_show_coordinates")]
    show_coordinates: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_show_coordinates() -> bool {
    true
}

impl Default for RewindConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            show_coordinates: default_show_coordinates(),
        }
    }
}

impl RewindConfig {
    /// Loads configuration from an optional TOML file.
    ///
    /// No path, or a path that does not exist, yields the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            debug!("No config path given, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        Self::from_file(path)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_filter = %config.log_filter, "Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
