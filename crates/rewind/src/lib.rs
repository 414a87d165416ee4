//! Renderers and session driver for time-travel tic-tac-toe.
//!
//! The game state lives in [`rewind_tictactoe`]. This crate supplies the
//! presentation side:
//!
//! - [`renderer::Renderer`]: the seam between a presentation layer and the game
//! - [`renderer::run_session`]: render, read one intent, apply, repeat
//! - [`renderer::TerminalRenderer`]: interactive play in a terminal
//! - [`renderer::ScriptRenderer`]: headless replay of a list of intents
//!
//! # Example
//!
//! ```
//! use rewind::renderer::{OutputFormat, ScriptRenderer, run_session};
//! use rewind_tictactoe::{GameHistory, Intent};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut history = GameHistory::new();
//! let mut renderer = ScriptRenderer::new([0, 4, 1, 7, 2].map(Intent::CellClicked));
//! run_session(&mut history, &mut renderer)?;
//! assert!(renderer.output(OutputFormat::Text)?.contains("Winner: X"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod logging;
pub mod renderer;

pub use config::{ConfigError, RewindConfig};
