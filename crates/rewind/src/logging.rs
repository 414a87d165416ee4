//! Tracing subscriber setup.

use crate::config::RewindConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` first, then the configured filter.
fn env_filter(config: &RewindConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to the configured file so the terminal UI stays clean.
pub fn init_file_logging(config: &RewindConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Logs to stderr, leaving stdout for command output.
pub fn init_stderr_logging(config: &RewindConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
