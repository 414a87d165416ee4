//! Contract-based validation for history operations.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{JumpError, MoveRejected};
use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::{GameHistory, Position, calculate_winner};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Error returned when the precondition fails.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The board at the cursor has no winner yet.
pub struct GameNotWon;

impl GameNotWon {
    /// Rejects the move if the current board is already won.
    #[instrument(skip(history))]
    pub fn check(history: &GameHistory) -> Result<(), MoveRejected> {
        match calculate_winner(history.current_board()) {
            Some(winner) => Err(MoveRejected::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects the move if the target square is occupied.
    #[instrument(skip(history))]
    pub fn check(pos: Position, history: &GameHistory) -> Result<(), MoveRejected> {
        if history.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejected::SquareOccupied(pos))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Apply-move Contract
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - No winner at the cursor
/// - Square must be empty
///
/// Postconditions:
/// - History invariants hold
/// - Snapshots after the old cursor were discarded and exactly one appended
/// - Cursor advanced by one
pub struct ApplyMoveContract;

impl Contract<GameHistory, Position> for ApplyMoveContract {
    type Rejection = MoveRejected;

    fn pre(history: &GameHistory, pos: &Position) -> Result<(), MoveRejected> {
        GameNotWon::check(history)?;
        SquareIsEmpty::check(*pos, history)?;
        Ok(())
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = HistoryInvariants::check_all(after).err().unwrap_or_default();

        let kept = before.current_index() + 1;
        if after.snapshots().len() != kept + 1 {
            violations.push(InvariantViolation::new(
                "History holds exactly one snapshot past the old cursor",
            ));
        }
        if after.snapshots().get(..kept) != before.snapshots().get(..kept) {
            violations.push(InvariantViolation::new(
                "Snapshots up to the old cursor are unchanged",
            ));
        }
        if after.current_index() != kept {
            violations.push(InvariantViolation::new("Cursor advanced by one"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Apply-move postcondition failed");
            Err(violations)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract
// ─────────────────────────────────────────────────────────────

/// Contract for moving the cursor.
///
/// Precondition: target indexes an existing snapshot.
/// Postcondition: snapshots untouched, invariants hold.
pub struct JumpContract;

impl Contract<GameHistory, usize> for JumpContract {
    type Rejection = JumpError;

    fn pre(history: &GameHistory, index: &usize) -> Result<(), JumpError> {
        let len = history.snapshots().len();
        if *index < len {
            Ok(())
        } else {
            Err(JumpError { index: *index, len })
        }
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = HistoryInvariants::check_all(after).err().unwrap_or_default();

        if before.snapshots() != after.snapshots() {
            violations.push(InvariantViolation::new("Jumping leaves snapshots unchanged"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Jump postcondition failed");
            Err(violations)
        }
    }
}
