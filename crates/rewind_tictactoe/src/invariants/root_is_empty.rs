//! Root invariant: history always starts from an empty board.

use super::super::{Board, GameHistory};
use super::Invariant;

/// Invariant: snapshot 0 exists and is the empty board.
pub struct RootIsEmptyInvariant;

impl Invariant<GameHistory> for RootIsEmptyInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
