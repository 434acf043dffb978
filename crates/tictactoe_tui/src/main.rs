//! tictactoe - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tictactoe_tui::{Cli, Command, Theme, TuiConfig, run_replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli.config)?;

    match cli.command() {
        Command::Play => play(&config),
        Command::Replay { moves } => replay(&config, &moves),
    }
}

/// Builds the env filter, `RUST_LOG` first, then the configured default.
fn env_filter(config: &TuiConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the interactive terminal UI
fn play(config: &TuiConfig) -> Result<()> {
    // Log to a file so tracing output never lands on the alternate screen.
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let theme = Theme::from_config(config)?;
    run_tui(theme)
}

/// Run a headless replay and print the result
fn replay(config: &TuiConfig, moves: &[usize]) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();

    info!(count = moves.len(), "Replaying moves");
    let mut stdout = std::io::stdout().lock();
    run_replay(moves, &mut stdout)?;
    Ok(())
}
