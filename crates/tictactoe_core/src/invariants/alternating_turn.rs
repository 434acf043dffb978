//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: players alternate, X first.
///
/// While the game is active the player to move is X after an even number
/// of moves and O after an odd one. Once it is over, the turn stays with
/// whoever made the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        if game.is_active() {
            let expected = if history.len() % 2 == 0 {
                Player::X
            } else {
                Player::O
            };
            game.current_player() == expected
        } else {
            history
                .last()
                .is_some_and(|last| last.player == game.current_player())
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
