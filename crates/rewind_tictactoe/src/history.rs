//! Game history with time travel.
//!
//! [`GameHistory`] owns every board the game has passed through plus a
//! cursor into that list. Playing after jumping back discards the old
//! future before appending (branch on time travel). Turn, winner and status
//! are never stored: they are recomputed from `(snapshots, current_index)`
//! on every read, so a jump can never leave them stale.

use super::action::{Intent, IntentError, JumpError, MoveRejected};
use super::contracts::{ApplyMoveContract, Contract, JumpContract};
use super::view::{GameView, Status};
use super::{Board, Player, Position, Snapshot, calculate_winner};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Ordered board snapshots and the cursor being viewed or played from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    pub(crate) snapshots: Vec<Snapshot>,
    pub(crate) current_index: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current_index: 0,
        }
    }

    /// Discards all history and starts a new game.
    #[instrument(skip(self), fields(discarded = self.snapshots.len()))]
    pub fn reset(&mut self) {
        info!("Starting new game");
        *self = Self::new();
    }

    // ─────────────────────────────────────────────────────────────
    //  Operations
    // ─────────────────────────────────────────────────────────────

    /// Places the mark of the player to move at `pos`.
    ///
    /// Everything after the cursor is discarded, the new board is appended
    /// and the cursor moves onto it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejected::GameOver`] if the board at the cursor already
    /// has a winner, or [`MoveRejected::SquareOccupied`] if `pos` is taken.
    /// The history is unchanged in both cases.
    #[instrument(skip(self), fields(index = self.current_index, player = %self.to_move()))]
    pub fn apply_move(&mut self, pos: Position) -> Result<(), MoveRejected> {
        ApplyMoveContract::pre(self, &pos)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let next = self.current_board().with_mark(pos, self.to_move());
        let discarded = self.snapshots.len() - (self.current_index + 1);
        self.snapshots.truncate(self.current_index + 1);
        self.snapshots.push(next);
        self.current_index += 1;
        debug!(discarded, len = self.snapshots.len(), "Move applied");

        #[cfg(debug_assertions)]
        {
            let post = ApplyMoveContract::post(&before, self);
            debug_assert!(post.is_ok(), "apply_move postcondition failed: {:?}", post);
        }

        Ok(())
    }

    /// Moves the cursor to snapshot `index`. Snapshots are never touched.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError`] if `index` is not below the number of snapshots.
    #[instrument(skip(self), fields(from = self.current_index))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        JumpContract::pre(self, &index)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.current_index = index;
        debug!("Cursor moved");

        #[cfg(debug_assertions)]
        {
            let post = JumpContract::post(&before, self);
            debug_assert!(post.is_ok(), "jump_to postcondition failed: {:?}", post);
        }

        Ok(())
    }

    /// Applies a renderer intent.
    ///
    /// # Errors
    ///
    /// Rule rejections come back as [`IntentError::Rejected`]. Indices the
    /// renderer should never send come back as [`IntentError::CellOutOfRange`]
    /// or [`IntentError::Jump`]. State is unchanged on every error.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), IntentError> {
        match intent {
            Intent::CellClicked(cell) => {
                let pos = Position::from_index(cell).ok_or(IntentError::CellOutOfRange(cell))?;
                self.apply_move(pos)?;
            }
            Intent::JumpTo(index) => self.jump_to(index)?,
            Intent::NewGame => self.reset(),
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    //  Accessors and derived state
    // ─────────────────────────────────────────────────────────────

    /// Returns every snapshot, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Returns the cursor position.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the board at the cursor.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current_index]
    }

    /// Returns the player to move at the cursor.
    pub fn to_move(&self) -> Player {
        Player::for_ply(self.current_index)
    }

    /// Returns the winner of the board at the cursor.
    pub fn winner(&self) -> Option<Player> {
        calculate_winner(self.current_board())
    }

    /// Returns the status line for the board at the cursor.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(self.to_move()),
        }
    }

    /// Returns one jump label per snapshot, index-aligned with valid
    /// [`jump_to`](Self::jump_to) targets.
    pub fn move_labels(&self) -> Vec<String> {
        (0..self.snapshots.len())
            .map(|index| {
                if index == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", index)
                }
            })
            .collect()
    }

    /// Returns the cell played to reach snapshot `index`.
    ///
    /// `None` for the starting board and for indices past the end.
    pub fn move_at(&self, index: usize) -> Option<Position> {
        let prev = self.snapshots.get(index.checked_sub(1)?)?;
        let next = self.snapshots.get(index)?;
        prev.changed_positions(next).first().copied()
    }

    /// Projects the full view model for a renderer.
    #[instrument(level = "trace", skip(self))]
    pub fn view(&self) -> GameView {
        GameView::new(
            *self.current_board(),
            self.status(),
            self.to_move(),
            self.current_index,
            self.move_labels(),
            self.move_at(self.current_index),
        )
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
