//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board). Rules are kept
//! apart from history so every snapshot can be judged on its own.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, calculate_winner};
