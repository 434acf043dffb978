//! Outcome of a move and phase of a game.

use super::Player;
use serde::{Deserialize, Serialize};

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Nobody won and the board has room; the turn passed to the opponent.
    Continue,
    /// The mover completed a winning triple.
    Win(Player),
    /// The board filled up without a winning triple.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::Continue | Outcome::Draw => None,
        }
    }

    /// True for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

/// Where the game stands.
///
/// `Won` and `Drawn` are terminal until the game is reset, which re-enters
/// `Active(Player::X)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Accepting moves; the payload is the player to move.
    Active(Player),
    /// Ended with a winner.
    Won(Player),
    /// Ended in a draw.
    Drawn,
}

impl Phase {
    /// True while moves are accepted.
    pub fn is_active(&self) -> bool {
        matches!(self, Phase::Active(_))
    }
}

/// The status message shown to players: empty while the game runs.
impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Active(_) => Ok(()),
            Phase::Won(player) => write!(f, "{} Wins!", player),
            Phase::Drawn => f.write_str("Draw!"),
        }
    }
}
