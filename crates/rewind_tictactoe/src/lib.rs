//! Pure tic-tac-toe game state with move history and time travel.
//!
//! # Architecture
//!
//! - **Board**: a fixed 3x3 grid of [`Square`]s plus pure win detection
//!   ([`calculate_winner`]).
//! - **History**: [`GameHistory`] keeps every board the game passed through
//!   and a cursor into them. Moves after a jump discard the old future.
//! - **View**: [`GameView`] is the read-only projection a renderer draws,
//!   and [`Intent`] is what a renderer sends back.
//!
//! Nothing here performs I/O.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameHistory, Intent};
//!
//! let mut history = GameHistory::new();
//! for cell in [0, 4, 1, 7, 2] {
//!     history.dispatch(Intent::CellClicked(cell)).unwrap();
//! }
//! assert_eq!(history.view().status(), "Winner: X");
//!
//! history.dispatch(Intent::JumpTo(2)).unwrap();
//! assert_eq!(history.view().status(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Intent, IntentError, JumpError, MoveRejected};
pub use history::GameHistory;
pub use position::Position;
pub use rules::{WINNING_LINES, calculate_winner, is_full};
pub use types::{Board, Player, Snapshot, Square};
pub use view::{GameView, Status};
