//! Read-only view model handed to renderers.

use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::Serialize;

/// Status of the board at the cursor.
///
/// There is no draw variant: a full board without a line still reports the
/// next player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum Status {
    /// The board has a completed line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Play continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Winner(player) => Some(*player),
            Status::NextPlayer(_) => None,
        }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Board at the cursor.
    board: Board,
    /// Status line, e.g. `"Next player: O"`.
    status: String,
    /// Winner of the board at the cursor.
    winner: Option<Player>,
    /// Player whose turn it is at the cursor.
    to_move: Player,
    /// Cursor into the history.
    current_index: usize,
    /// Jump labels, index-aligned with valid jump targets.
    move_labels: Vec<String>,
    /// Cell played to reach the board at the cursor.
    last_move: Option<Position>,
}

impl GameView {
    /// Assembles a view from derived history state.
    pub fn new(
        board: Board,
        status: Status,
        to_move: Player,
        current_index: usize,
        move_labels: Vec<String>,
        last_move: Option<Position>,
    ) -> Self {
        Self {
            board,
            status: status.to_string(),
            winner: status.winner(),
            to_move,
            current_index,
            move_labels,
            last_move,
        }
    }

    /// Number of snapshots in the history this view was taken from.
    pub fn history_len(&self) -> usize {
        self.move_labels.len()
    }

    /// True when the cursor is on the newest snapshot.
    pub fn at_latest(&self) -> bool {
        self.current_index + 1 == self.history_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameHistory;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(Status::NextPlayer(Player::O).to_string(), "Next player: O");
    }

    #[test]
    fn test_view_tracks_cursor() {
        let mut history = GameHistory::new();
        history.apply_move(Position::Center).unwrap();
        history.apply_move(Position::TopLeft).unwrap();
        history.jump_to(1).unwrap();

        let view = history.view();
        assert_eq!(view.board(), &history.snapshots()[1]);
        assert_eq!(view.status(), "Next player: O");
        assert_eq!(view.to_move(), &Player::O);
        assert_eq!(view.current_index(), &1);
        assert_eq!(view.last_move(), &Some(Position::Center));
        assert_eq!(view.history_len(), 3);
        assert!(!view.at_latest());
    }

    #[test]
    fn test_view_serializes_for_renderers() {
        let mut history = GameHistory::new();
        history.apply_move(Position::TopLeft).unwrap();

        let json = serde_json::to_value(history.view()).unwrap();
        assert_eq!(json["status"], "Next player: O");
        assert_eq!(json["current_index"], 1);
        assert_eq!(json["last_move"], "TopLeft");
        assert_eq!(json["move_labels"][1], "Go to move #1");
        assert_eq!(json["board"]["squares"][0]["Occupied"], "X");
        assert_eq!(json["board"]["squares"][1], "Empty");
    }
}
