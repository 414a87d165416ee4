//! Full-board detection for tic-tac-toe.

use crate::{Board, Square};

/// Checks if the board is full (all squares occupied).
///
/// Renderers use this to tell a stalled board from one that still has room.
/// Game status never reports a draw on its own.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::calculate_winner;
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_without_winner() {
        // X O X / O X X / O X O
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::X,
            Player::O,
        ];
        let board = Position::ALL
            .iter()
            .zip(marks)
            .fold(Board::new(), |b, (pos, p)| b.with_mark(*pos, p));

        assert!(is_full(&board));
        assert_eq!(calculate_winner(&board), None);
    }
}
