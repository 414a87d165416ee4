//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use rewind::renderer::OutputFormat;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Replay intents without a terminal UI and print the final view
    Replay {
        /// Cells to click, in order (e.g. 0,4,1)
        #[arg(long, value_delimiter = ',')]
        cells: Vec<usize>,

        /// JSON file holding an array of intents; runs before --cells
        #[arg(long)]
        script: Option<PathBuf>,

        /// Output format for the final view
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}
