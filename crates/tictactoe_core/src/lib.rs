//! Tic-tac-toe game state machine.
//!
//! The crate owns the only non-trivial part of the game: placing marks,
//! detecting wins and draws, alternating turns and resetting. Rendering and
//! input handling live with the caller.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Outcome, Player, Position};
//!
//! let mut game = GameState::new();
//! for index in [0, 3, 1, 4] {
//!     let pos = Position::from_index(index).unwrap();
//!     assert_eq!(game.apply_move(pos).unwrap(), Outcome::Continue);
//! }
//! let outcome = game.apply_move(Position::TopRight).unwrap();
//! assert_eq!(outcome, Outcome::Win(Player::X));
//! assert_eq!(game.status_message(), "X Wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod phases;
mod position;
mod state;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Board and players
pub use types::{Board, Player, Square};

// Crate-level exports - Positions
pub use position::Position;

// Crate-level exports - Moves and errors
pub use action::{Move, MoveError};

// Crate-level exports - Game state machine
pub use phases::{Outcome, Phase};
pub use state::GameState;

// Crate-level exports - Contracts
pub use contracts::{Contract, GameIsActive, LegalMove, MoveContract, SquareIsEmpty};

// Crate-level exports - Rules
pub use rules::WINNING_COMBINATIONS;
