//! Closed-line invariant: no move follows a win.

use super::super::{GameHistory, calculate_winner};
use super::Invariant;

/// Invariant: a snapshot with a winning line is the last of its play line.
pub struct ClosedLineInvariant;

impl Invariant<GameHistory> for ClosedLineInvariant {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.snapshots();
        snapshots
            .iter()
            .take(snapshots.len().saturating_sub(1))
            .all(|board| calculate_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No snapshot follows a won board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    fn won_history() -> GameHistory {
        let mut history = GameHistory::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomCenter,
            Position::TopRight,
        ] {
            history.apply_move(pos).unwrap();
        }
        history
    }

    #[test]
    fn test_winning_snapshot_may_be_last() {
        let history = won_history();
        assert_eq!(history.winner(), Some(Player::X));
        assert!(ClosedLineInvariant::holds(&history));
    }

    #[test]
    fn test_snapshot_after_win_violates() {
        let mut history = won_history();
        let extra = history.current_board().with_mark(Position::BottomLeft, Player::O);
        history.snapshots.push(extra);
        assert!(!ClosedLineInvariant::holds(&history));
    }
}
