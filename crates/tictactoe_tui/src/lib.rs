//! Terminal front end for tic-tac-toe.
//!
//! Renders a [`tictactoe_core::GameState`] with ratatui and forwards key
//! presses into it. Also offers a headless replay of a move list.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod app;
mod cli;
mod config;
mod input;
mod replay;
mod terminal;
mod ui;

// Crate-level exports - Application state
pub use app::App;

// Crate-level exports - Command line and configuration
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};

// Crate-level exports - Input mapping
pub use input::{Input, digit_position, map_key, move_cursor};

// Crate-level exports - Front ends
pub use replay::run_replay;
pub use terminal::run_tui;
pub use ui::{Theme, draw};
