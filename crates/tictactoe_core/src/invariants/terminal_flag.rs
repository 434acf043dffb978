//! Terminal flag invariant: the game is inactive exactly when it is decided.

use super::Invariant;
use crate::GameState;
use crate::rules::{check_winner, is_full};

/// Invariant: `active` is false iff the board holds a winning triple or is full.
pub struct TerminalFlagInvariant;

impl Invariant<GameState> for TerminalFlagInvariant {
    fn holds(game: &GameState) -> bool {
        let decided = check_winner(game.board()).is_some() || is_full(game.board());
        game.is_active() != decided
    }

    fn description() -> &'static str {
        "Game is inactive exactly when won or drawn"
    }
}
