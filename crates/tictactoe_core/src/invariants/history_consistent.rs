//! History consistency invariant: the board is exactly the replayed history.

use super::Invariant;
use crate::{Board, GameState, Square};

/// Invariant: replaying the history onto an empty board reproduces the board.
///
/// No move overwrote a filled square and no square was filled without a
/// recorded move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board matches the replayed move history"
    }
}
