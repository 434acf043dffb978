//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`crate::Board`]. Rules are kept apart from the
//! state object so contracts and invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_COMBINATIONS, check_win, check_winner, winning_line};
