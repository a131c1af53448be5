//! Terminal UI for tic-tac-toe.

mod app;
mod guard;
pub mod input;
mod palette;
pub mod ui;

pub use app::{App, Control};
pub use palette::Palette;

use crate::config::AppConfig;
use crate::logging;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use guard::RestoreGuard;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error, info, instrument, warn};

/// Runs the interactive game until the user quits.
///
/// Logs go to the configured file so they do not corrupt the screen.
#[instrument(skip_all, fields(theme = %config.theme()))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    logging::init_file(config.log_file())?;

    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let guard = RestoreGuard::new(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(config.theme());
    let res = run_app(&mut terminal, app);

    drop(guard);
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Leaves the alternate screen and raw mode. Failures are logged only.
fn restore_terminal() {
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
}

/// Draw, wait for a key, dispatch; repeat.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!(code = ?key.code, "Key pressed");
            if app.handle_key(key.code) == Control::Quit {
                info!(scores = %app.engine().scores(), "User quit");
                return Ok(());
            }
        }
    }
}
