//! bus-roster binary entry point.
//!
//! Sets up logging and the async runtime, initializes the terminal in raw
//! mode, runs the TUI event loop, and restores the terminal state on exit.
//!
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::sync::Arc;

use bus_roster::api::HttpBusApi;
use bus_roster::app::{self, AppState, config, keymap::Keymap, ops::Dispatcher, theme::Theme};
use bus_roster::cli::Cli;
use bus_roster::logging;

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| config::config_file_write_path("bus-roster.log"));
    logging::init(&log_path)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("build async runtime")?;

    let api = HttpBusApi::new(&cli.base_url, cli.timeout()).context("build http client")?;
    let endpoint = api.url().to_string();
    tracing::info!(%endpoint, "starting bus roster");

    let theme = Theme::load_or_init(&config::config_file_write_path("theme.conf"));
    let keymap = Keymap::load_or_init(&config::config_file_write_path("keybinds.conf"));
    let mut app = AppState::new(theme, keymap, endpoint);
    let (dispatcher, mut responses) = Dispatcher::new(runtime.handle().clone(), Arc::new(api));

    let mut terminal = init_terminal().context("init terminal")?;

    let res = app::run(&mut terminal, &mut app, &dispatcher, &mut responses);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        tracing::error!(error = %err, "application error");
        eprintln!("application error: {err:#}");
    }
    runtime.shutdown_background();
    Ok(())
}
