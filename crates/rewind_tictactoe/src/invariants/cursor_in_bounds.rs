//! Cursor invariant: the current index always names a snapshot.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `current_index < snapshots.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.current_index() < history.snapshots().len()
    }

    fn description() -> &'static str {
        "Cursor indexes an existing snapshot"
    }
}
