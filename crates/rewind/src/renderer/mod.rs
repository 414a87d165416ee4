//! Renderer trait and the session loop that drives it.

mod input;
mod script;
mod terminal;
mod ui;

pub use input::{Cursor, KeyAction, key_action, move_cursor};
pub use script::{OutputFormat, ScriptRenderer, format_text};
pub use terminal::TerminalRenderer;
pub use ui::draw;

use anyhow::Result;
use rewind_tictactoe::{GameHistory, GameView, Intent};
use tracing::{debug, info, instrument, warn};

/// Presentation layer for a game session.
///
/// A renderer draws views it is given and reports what the user wants to do
/// next. It never touches game state directly.
pub trait Renderer {
    /// Draws one frame.
    fn render(&mut self, view: &GameView) -> Result<()>;

    /// Blocks until the user expresses an intent.
    ///
    /// Returns `None` when the user quits.
    fn next_intent(&mut self) -> Result<Option<Intent>>;
}

/// Runs a session: render, read one intent, apply it, repeat.
///
/// Rule rejections are ignored; the renderer simply draws the unchanged
/// view again. Contract violations end the session with an error.
#[instrument(skip_all, fields(start_index = history.current_index()))]
pub fn run_session<R: Renderer>(history: &mut GameHistory, renderer: &mut R) -> Result<()> {
    info!("Starting session");
    renderer.render(&history.view())?;

    let mut handled = 0usize;
    while let Some(intent) = renderer.next_intent()? {
        handled += 1;
        match history.dispatch(intent) {
            Ok(()) => debug!(%intent, index = history.current_index(), "Intent applied"),
            Err(err) if err.is_contract_violation() => {
                warn!(%intent, error = %err, "Renderer sent an invalid intent");
                return Err(anyhow::Error::new(err).context(format!(
                    "intent #{} ({}) violates the renderer contract",
                    handled, intent
                )));
            }
            Err(reason) => debug!(%intent, %reason, "Intent ignored"),
        }
        renderer.render(&history.view())?;
    }

    info!(handled, "Session ended");
    Ok(())
}
