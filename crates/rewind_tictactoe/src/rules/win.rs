//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first completed line in [`WINNING_LINES`] order,
/// or `None` when no line is complete. A full board without a line is also
/// `None`; this function does not tell a draw from an ongoing game.
#[instrument(level = "trace")]
pub fn calculate_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in WINNING_LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player();
        }
    }

    None
}
