//! Rewind - unified CLI
//!
//! Interactive terminal play and headless replay of the same game core.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rewind::RewindConfig;
use rewind::logging::{init_file_logging, init_stderr_logging};
use rewind::renderer::{OutputFormat, ScriptRenderer, TerminalRenderer, run_session};
use rewind_tictactoe::GameHistory;
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RewindConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay {
            cells,
            script,
            format,
        } => run_replay(&config, cells, script, format),
    }
}

/// Run an interactive game in the terminal
fn run_play(config: &RewindConfig) -> Result<()> {
    init_file_logging(config)?;
    info!("Starting rewind terminal session");

    let mut history = GameHistory::new();
    let result = {
        let mut renderer = TerminalRenderer::enter(*config.show_coordinates())?;
        run_session(&mut history, &mut renderer)
    };

    if let Err(err) = &result {
        tracing::error!(error = ?err, "Session failed");
    }
    result
}

/// Replay intents headlessly and print the final view
fn run_replay(
    config: &RewindConfig,
    cells: Vec<usize>,
    script: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    init_stderr_logging(config);
    info!(cells = cells.len(), script = ?script, ?format, "Starting replay");

    let mut renderer = ScriptRenderer::from_sources(script.as_deref(), &cells)?;

    let mut history = GameHistory::new();
    run_session(&mut history, &mut renderer)?;

    println!("{}", renderer.output(format)?);
    Ok(())
}
