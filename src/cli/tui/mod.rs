//! Terminal interface for Canteen
//!
//! Full-screen ratatui + crossterm front end over the fixture store: login,
//! role-specific screens with a bottom navigation, dialogs and toasts.

pub mod app;
pub mod command;
pub mod event;
pub mod screens;
pub mod theme;
pub mod ui;

use anyhow::{Context, Result};
use canteen_core::{FixtureStore, Locale, SessionContext};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

use super::config::AppConfig;
use app::App;

/// Run the terminal interface until the user quits.
pub fn run(config: &AppConfig, store: FixtureStore, locale: Locale) -> Result<()> {
    let session = SessionContext::new()
        .with_locale(locale)
        .with_theme(config.ui.theme());
    let tick_rate = config.ui.tick_rate();

    info!(locale = %locale, theme = %session.theme(), "TUI started");

    // ── Terminal setup ──────────────────────────────────────────────

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(session, store, config.ui.toast_ticks);

    // ── Main loop ───────────────────────────────────────────────────

    let run_result: Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &app)) {
            break Err(e.into());
        }

        if let Err(e) = event::handle_events(&mut app, tick_rate) {
            break Err(e);
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // ── Restore terminal ────────────────────────────────────────────

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("TUI exited");
    run_result
}
