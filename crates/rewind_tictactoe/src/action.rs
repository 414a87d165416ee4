//! Renderer intents and the errors they can produce.
//!
//! Intents are the only way a renderer changes game state. They carry raw
//! indices exactly as the renderer emits them; [`GameHistory::dispatch`]
//! validates and applies them.
//!
//! [`GameHistory::dispatch`]: crate::GameHistory::dispatch

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A user intent emitted by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// The user clicked cell `0..=8`.
    CellClicked(usize),
    /// The user picked an entry from the move list.
    JumpTo(usize),
    /// The user asked for a fresh game.
    NewGame,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::CellClicked(cell) => write!(f, "click cell {}", cell),
            Intent::JumpTo(index) => write!(f, "jump to move {}", index),
            Intent::NewGame => write!(f, "new game"),
        }
    }
}

/// A move that was refused. State is unchanged when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejected {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board at the cursor already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Player),
}

impl std::error::Error for MoveRejected {}

/// A jump target outside the current history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Move index {index} out of range (history has {len} snapshots)")]
pub struct JumpError {
    /// Requested snapshot index.
    pub index: usize,
    /// Number of snapshots at the time of the request.
    pub len: usize,
}

/// Error returned when dispatching an [`Intent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IntentError {
    /// The move was refused by the game rules.
    #[display("{}", _0)]
    Rejected(MoveRejected),

    /// The clicked cell does not exist.
    #[display("Cell index {} out of range (must be 0-8)", _0)]
    CellOutOfRange(usize),

    /// The jump target does not exist.
    #[display("{}", _0)]
    Jump(JumpError),
}

impl IntentError {
    /// True for errors the renderer should never have produced.
    ///
    /// Rule rejections are ordinary gameplay; out-of-range indices are not.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, IntentError::Rejected(_))
    }
}

impl std::error::Error for IntentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntentError::Rejected(e) => Some(e),
            IntentError::Jump(e) => Some(e),
            IntentError::CellOutOfRange(_) => None,
        }
    }
}

impl From<MoveRejected> for IntentError {
    fn from(err: MoveRejected) -> Self {
        IntentError::Rejected(err)
    }
}

impl From<JumpError> for IntentError {
    fn from(err: JumpError) -> Self {
        IntentError::Jump(err)
    }
}
