//! The game state machine.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::phases::{Outcome, Phase};
use super::rules;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Complete game state: board, player to move and whether moves are accepted.
///
/// Created in the reset state. Each accepted move mutates it exactly once;
/// a win or a full board clears `active`, after which only [`GameState::reset`]
/// changes anything.
///
/// Deserializing checks the game invariants, so a snapshot that no sequence
/// of moves could produce is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) active: bool,
    pub(crate) history: Vec<Move>,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct GameSnapshot {
    board: Board,
    current_player: Player,
    active: bool,
    history: Vec<Move>,
}

impl TryFrom<GameSnapshot> for GameState {
    type Error = MoveError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let state = Self {
            board: snapshot.board,
            current_player: snapshot.current_player,
            active: snapshot.active,
            history: snapshot.history,
        };
        TicTacToeInvariants::check_all(&state).map_err(|violations| {
            let described: Vec<_> = violations.into_iter().map(|v| v.description).collect();
            warn!(violations = ?described, "Rejected inconsistent snapshot");
            MoveError::InvariantViolation(described.join("; "))
        })?;
        Ok(state)
    }
}

impl GameState {
    /// Creates a game ready for X's first move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            active: true,
            history: Vec::new(),
        }
    }

    /// Clears the board, hands the turn to X and re-activates the game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Resetting game");
        *self = Self::new();
    }

    /// Places the current player's mark at `pos` and evaluates the result.
    ///
    /// Win is checked before draw, so a move that fills the board and
    /// completes a triple is a win. On `Continue` the turn passes to the
    /// opponent; on `Win` or `Draw` the game stops accepting moves.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] after a win or draw and
    /// [`MoveError::SquareOccupied`] for a filled cell. The state is left
    /// untouched in both cases.
    #[instrument(skip(self), fields(position = ?pos, player = ?self.current_player))]
    pub fn apply_move(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        let action = Move::new(self.current_player, pos);

        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(action);

        let outcome = if self.check_win(player) {
            self.active = false;
            Outcome::Win(player)
        } else if self.check_draw() {
            self.active = false;
            Outcome::Draw
        } else {
            self.current_player = player.opponent();
            Outcome::Continue
        };

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            tracing::error!(error = %e, "Move postcondition failed, rolling back");
            *self = before;
            return Err(e);
        }
        debug_assert!(
            TicTacToeInvariants::check_all(self).is_ok(),
            "Game invariants violated"
        );

        debug!(?outcome, "Move applied");
        Ok(outcome)
    }

    /// True if `player` owns a complete winning triple.
    pub fn check_win(&self, player: Player) -> bool {
        rules::check_win(&self.board, player)
    }

    /// True if every cell is filled.
    pub fn check_draw(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> Phase {
        if self.active {
            Phase::Active(self.current_player)
        } else {
            match rules::check_winner(&self.board) {
                Some(player) => Phase::Won(player),
                None => Phase::Drawn,
            }
        }
    }

    /// Message for the players: empty while active, `"X Wins!"` or `"Draw!"` once over.
    pub fn status_message(&self) -> String {
        self.phase().to_string()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose mark the next accepted move places.
    ///
    /// After a win this is still the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// True while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Moves accepted since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Winner of a finished game.
    pub fn winner(&self) -> Option<Player> {
        match self.phase() {
            Phase::Won(player) => Some(player),
            _ => None,
        }
    }

    /// The completed triple of a won game.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        if self.active {
            None
        } else {
            rules::winning_line(&self.board)
        }
    }

    /// Cells still open to the player to move; empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.active {
            Position::valid_moves(&self.board)
        } else {
            Vec::new()
        }
    }

    /// Plays `positions` in order from a fresh game.
    ///
    /// Returns the final state and the outcome of the last move
    /// (`Continue` for an empty list).
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<(Self, Outcome), MoveError> {
        let mut game = Self::new();
        let mut outcome = Outcome::Continue;
        for pos in positions {
            outcome = game.apply_move(*pos)?;
        }
        Ok((game, outcome))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
