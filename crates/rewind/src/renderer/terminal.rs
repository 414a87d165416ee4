//! Interactive terminal renderer (ratatui + crossterm).

use super::Renderer;
use super::input::{Cursor, KeyAction, key_action};
use super::ui;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind_tictactoe::{GameView, Intent, Position};
use std::io::{self, Stdout, Write};
use tracing::{debug, info, instrument};

/// Renderer that draws to the terminal and reads the keyboard.
///
/// Raw mode and the alternate screen are restored on drop.
pub struct TerminalRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    cursor: Cursor,
    show_coordinates: bool,
    view: Option<GameView>,
}

impl TerminalRenderer {
    /// Switches the terminal into raw mode on the alternate screen.
    #[instrument]
    pub fn enter(show_coordinates: bool) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            restore_terminal(&mut stdout);
            return Err(e).context("Failed to enter alternate screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore_terminal(&mut io::stdout());
                return Err(e).context("Failed to create terminal");
            }
        };
        info!("Terminal initialized");

        Ok(Self {
            terminal,
            cursor: Position::Center,
            show_coordinates,
            view: None,
        })
    }

    fn redraw(&mut self) -> Result<()> {
        let Some(view) = &self.view else {
            return Ok(());
        };
        let (cursor, show_coordinates) = (self.cursor, self.show_coordinates);
        self.terminal
            .draw(|frame| ui::draw(frame, view, cursor, show_coordinates))
            .context("Failed to draw frame")?;
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, view: &GameView) -> Result<()> {
        self.view = Some(view.clone());
        self.redraw()
    }

    fn next_intent(&mut self) -> Result<Option<Intent>> {
        loop {
            let Event::Key(key) = event::read().context("Failed to read terminal event")? else {
                // Resize and focus events: just repaint.
                self.redraw()?;
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let Some(view) = &self.view else {
                continue;
            };
            match key_action(key.code, self.cursor, view) {
                KeyAction::Quit => {
                    info!("User quit");
                    return Ok(None);
                }
                KeyAction::Intent(intent) => return Ok(Some(intent)),
                KeyAction::PlayAt(pos) => {
                    self.cursor = pos;
                    return Ok(Some(Intent::CellClicked(pos.to_index())));
                }
                KeyAction::MoveCursor(pos) => {
                    debug!(cursor = %pos, "Cursor moved");
                    self.cursor = pos;
                    self.redraw()?;
                }
                KeyAction::Ignore => {}
            }
        }
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        restore_terminal(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}

/// Leaves the alternate screen and turns raw mode off, best effort.
///
/// Used on every exit path once raw mode is on, including failures inside
/// [`TerminalRenderer::enter`] before a renderer exists to drop.
fn restore_terminal(out: &mut impl Write) {
    let _ = execute!(out, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}
