//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tictactoe_core::Player;
use tracing::{debug, info, instrument};

/// Settings for the terminal front end. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_", into)]
pub struct TuiConfig {
    /// File the interactive UI writes its logs to.
    log_file: PathBuf,

    /// Default `tracing` filter; `RUST_LOG` takes precedence.
    log_filter: String,

    /// Color name for X marks (any name ratatui understands, e.g. "blue").
    x_color: String,

    /// Color name for O marks.
    o_color: String,

    /// Show cell numbers 1-9 on empty cells.
    show_hints: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
            x_color: "blue".to_string(),
            o_color: "red".to_string(),
            show_hints: true,
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        debug!("Loading config from file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text and validates the colors.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.mark_color(Player::X)?;
        config.mark_color(Player::O)?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Resolved color for a player's marks.
    pub fn mark_color(&self, player: Player) -> Result<Color, ConfigError> {
        let name = match player {
            Player::X => &self.x_color,
            Player::O => &self.o_color,
        };
        Color::from_str(name)
            .map_err(|_| ConfigError::new(format!("Unknown color for {}: {:?}", player, name)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
