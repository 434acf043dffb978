//! Contract-based validation for moves.
//!
//! Contracts pair a precondition on `(state, action)` with a postcondition
//! on `(before, after)`, Hoare style: `{P} action {Q}`.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::state::GameState;
use super::{Position, Square};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions of a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game still accepts moves.
pub struct GameIsActive;

impl GameIsActive {
    /// Fails with [`MoveError::GameOver`] once the game is won or drawn.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_active() {
            Ok(())
        } else {
            Err(MoveError::GameOver)
        }
    }
}

/// Precondition: the square at the move's position is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] for a filled cell.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Composite precondition: the game is active and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move. A finished game is reported
    /// before an occupied square.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        GameIsActive::check(game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Postconditions:
/// - exactly one square changed, from empty to the mover's mark
/// - history grew by that one move
/// - every game invariant still holds
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let changed: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|pos| before.board().get(*pos) != after.board().get(*pos))
            .collect();

        let mover = before.current_player();
        let single_mark = match changed.as_slice() {
            [pos] => {
                before.board().get(*pos) == Square::Empty
                    && after.board().get(*pos) == Square::Occupied(mover)
            }
            _ => false,
        };
        if !single_mark {
            warn!(?changed, "Move changed an unexpected set of squares");
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected one new {} mark, {} squares changed",
                mover,
                changed.len()
            )));
        }

        if after.history().len() != before.history().len() + 1 {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history did not grow by one move".to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
