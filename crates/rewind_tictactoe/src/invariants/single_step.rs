//! Single-step invariant: each snapshot adds exactly one mark.

use super::super::{Board, GameHistory, Player, Square};
use super::Invariant;

/// Invariant: every snapshot after the first differs from its predecessor
/// in exactly one square, which went from empty to the mark of the player
/// whose turn it was at the predecessor's index.
///
/// This also pins turn alternation: the mark placed at step `i` is always
/// `Player::for_ply(i - 1)`, and snapshot `i` holds `i / 2` marks of the
/// player to move and the rest for the opponent.
pub struct SingleStepInvariant;

/// Mark counts on the board at `index` match alternating play from X.
fn marks_balanced(index: usize, board: &Board) -> bool {
    let to_move = Player::for_ply(index);
    board.count(to_move) == index / 2 && board.count(to_move.opponent()) == index - index / 2
}

impl Invariant<GameHistory> for SingleStepInvariant {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.snapshots();
        let balanced = snapshots
            .iter()
            .enumerate()
            .all(|(index, board)| marks_balanced(index, board));

        let single_steps = snapshots.windows(2).enumerate().all(|(prev_index, pair)| {
            let [before, after] = pair else {
                return false;
            };
            match before.changed_positions(after).as_slice() {
                [pos] => {
                    before.get(*pos) == Square::Empty
                        && after.get(*pos) == Square::Occupied(Player::for_ply(prev_index))
                }
                _ => false,
            }
        });

        balanced && single_steps
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark for the player to move"
    }
}
