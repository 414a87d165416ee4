//! Keyboard mapping for the terminal renderer.

use crossterm::event::KeyCode;
use rewind_tictactoe::{GameView, Intent, Position};

/// Board cursor for keyboard navigation.
pub type Cursor = Position;

/// What a key press means for the terminal renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Send an intent to the game.
    Intent(Intent),
    /// Move the board cursor without touching the game.
    MoveCursor(Cursor),
    /// Play at a cell and move the cursor there.
    PlayAt(Cursor),
    /// Leave the session.
    Quit,
    /// Key is not bound.
    Ignore,
}

/// Moves cursor based on arrow keys (or hjkl). Edges do not wrap.
pub fn move_cursor(cursor: Cursor, key: KeyCode) -> Cursor {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left | KeyCode::Char('h') => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right | KeyCode::Char('l') => Some((row, col + 1)),
        KeyCode::Up | KeyCode::Char('k') => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down | KeyCode::Char('j') => Some((row + 1, col)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps a key press to an action, given the view currently on screen.
///
/// History navigation only produces jumps the view offers, so the renderer
/// never sends an out-of-range index.
pub fn key_action(key: KeyCode, cursor: Cursor, view: &GameView) -> KeyAction {
    let current = *view.current_index();
    let last = view.history_len().saturating_sub(1);

    match key {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('n') => KeyAction::Intent(Intent::NewGame),
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::PlayAt(cursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(KeyAction::Ignore, KeyAction::PlayAt),
        KeyCode::Char('[') | KeyCode::PageUp if current > 0 => {
            KeyAction::Intent(Intent::JumpTo(current - 1))
        }
        KeyCode::Char(']') | KeyCode::PageDown if current < last => {
            KeyAction::Intent(Intent::JumpTo(current + 1))
        }
        KeyCode::Home if current != 0 => KeyAction::Intent(Intent::JumpTo(0)),
        KeyCode::End if current != last => KeyAction::Intent(Intent::JumpTo(last)),
        KeyCode::Left
        | KeyCode::Right
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Char('h' | 'j' | 'k' | 'l') => KeyAction::MoveCursor(move_cursor(cursor, key)),
        _ => KeyAction::Ignore,
    }
}
