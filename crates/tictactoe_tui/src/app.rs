//! Application state: the game plus what the front end adds around it.

use crate::input::{Input, map_key};
use crossterm::event::KeyCode;
use tictactoe_core::{GameState, Outcome, Position};
use tracing::{debug, info, instrument, warn};

/// Main application state.
///
/// Owns the [`GameState`] and only forwards a selection into it while the
/// game is active and the cell is still empty.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates an application with a freshly reset game.
    #[instrument]
    pub fn new() -> Self {
        let mut game = GameState::new();
        game.reset();
        Self {
            game,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status message: empty while playing, `"X Wins!"` / `"O Wins!"` / `"Draw!"` at the end.
    pub fn message(&self) -> String {
        self.game.status_message()
    }

    /// Handles one key press to completion.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match map_key(self.cursor, key) {
            Input::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Input::Restart => self.restart(),
            Input::Cursor(pos) => self.cursor = pos,
            Input::SelectCursor => {
                self.select(self.cursor);
            }
            Input::Select(pos) => {
                self.cursor = pos;
                self.select(pos);
            }
            Input::Ignored => debug!(?key, "Unbound key"),
        }
    }

    /// Plays the current player's mark at `pos`.
    ///
    /// Returns `None` without touching the game when it is over or the
    /// cell is already taken.
    #[instrument(skip(self))]
    pub fn select(&mut self, pos: Position) -> Option<Outcome> {
        if !self.game.is_active() {
            debug!("Game over, selection ignored");
            return None;
        }
        if !self.game.board().is_empty(pos) {
            debug!("Cell already taken, selection ignored");
            return None;
        }

        let player = self.game.current_player();
        match self.game.apply_move(pos) {
            Ok(outcome) => {
                info!(%player, position = %pos, ?outcome, "Move played");
                Some(outcome)
            }
            Err(e) => {
                warn!(error = %e, %player, position = %pos, "Move refused by game state");
                None
            }
        }
    }

    /// Restarts the game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
