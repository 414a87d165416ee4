//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player whose turn it is at the given history index.
    ///
    /// X moves at even indices, O at odd ones.
    pub fn for_ply(index: usize) -> Self {
        if index % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player occupying this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values. A move never edits a board in place;
/// [`Board::with_mark`] returns the successor instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

/// A board captured at one point in game history.
pub type Snapshot = Board;

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from explicit squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.set(pos, Square::Occupied(player));
        next
    }

    /// Overwrites a square. Only history construction and tests use this.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns the positions whose squares differ between `self` and `other`.
    pub fn changed_positions(&self, other: &Board) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.get(*pos) != other.get(*pos))
            .collect()
    }

    /// Counts the squares occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based cell number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_ply_alternates_from_x() {
        assert_eq!(Player::for_ply(0), Player::X);
        assert_eq!(Player::for_ply(1), Player::O);
        assert_eq!(Player::for_ply(6), Player::X);
        assert_eq!(Player::for_ply(7), Player::O);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let empty = Board::new();
        let next = empty.with_mark(Position::Center, Player::X);

        assert!(empty.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(empty.changed_positions(&next), vec![Position::Center]);
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::BottomRight, Player::O);
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O");
    }

    #[test]
    fn test_opponent_alternates_with_ply() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        for index in 0..9 {
            assert_eq!(Player::for_ply(index).opponent(), Player::for_ply(index + 1));
        }
    }

    #[test]
    fn test_count_by_player() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::TopRight, Player::X);
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
    }
}
