//! Terminal setup and the interactive event loop.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{error, info, instrument};

use crate::app::App;
use crate::ui::{self, Theme};

/// Runs the interactive game until the user quits.
///
/// The terminal is restored before any error is returned.
#[instrument(skip_all)]
pub fn run_tui(theme: Theme) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode()?;
        return Err(e).context("Failed to enter alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            if let Err(restore_err) = restore(&mut io::stdout()) {
                error!(error = ?restore_err, "Failed to restore terminal");
            }
            return Err(e).context("Failed to create terminal");
        }
    };

    let res = run_app(&mut terminal, App::new(), &theme);

    let restored = restore(terminal.backend_mut());
    let cursor = terminal.show_cursor().context("Failed to show cursor");
    let restored = restored.and(cursor);
    if let Err(e) = &restored {
        error!(error = ?e, "Failed to restore terminal");
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res.and(restored)
}

/// Leaves raw mode and the alternate screen, attempting both steps and
/// reporting the first failure.
fn restore(out: &mut impl Write) -> Result<()> {
    let raw = disable_raw_mode().context("Failed to disable raw mode");
    let screen = execute!(out, LeaveAlternateScreen).context("Failed to leave alternate screen");
    raw.and(screen)
}

/// One key press at a time: draw, block for the next event, handle it.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    theme: &Theme,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app, theme))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
