//! Named board positions.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
///
/// Raw cell indices coming from a renderer are converted with
/// [`Position::from_index`], so out-of-range cells never reach the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from row and column, if both are in 0-2.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Returns only the empty squares of `board`.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        <Position as strum::IntoEnumIterator>::iter()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
