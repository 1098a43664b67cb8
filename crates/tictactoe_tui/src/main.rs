//! Terminal front-end for the tic-tac-toe engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

use anyhow::{Context, Result, bail};
use app::App;
use clap::Parser;
use cli::Cli;
use config::UiConfig;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = resolve_config(&cli)?;
    info!(
        turn_policy = %config.engine().turn_policy(),
        markers = ?config.markers(),
        "Starting tic-tac-toe"
    );

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, App::new(config));
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Raw mode plus alternate screen, undone on drop.
///
/// Holding the guard from the moment raw mode is enabled means a failed
/// setup step or a game-loop error still hands back a usable shell.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal(&mut io::stdout()) {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

fn restore_terminal<W: io::Write>(out: &mut W) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, Show)
}

/// Sends tracing output to the log file so it never draws over the board.
fn init_logging(cli: &Cli) -> Result<()> {
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Config file first, then command-line overrides.
#[instrument(skip(cli), fields(config = %cli.config.display()))]
fn resolve_config(cli: &Cli) -> Result<UiConfig> {
    let mut config = UiConfig::load_or_default(&cli.config).context("Failed to load config")?;

    if let Some(policy) = cli.turn_policy() {
        debug!(%policy, "Turn policy overridden on command line");
        config.set_turn_policy(policy);
    }

    if let Some(markers) = &cli.markers {
        let markers: [String; 2] = match markers.as_slice() {
            [one, two] if !one.trim().is_empty() && !two.trim().is_empty() => {
                [one.clone(), two.clone()]
            }
            _ => bail!("--markers takes exactly two non-blank symbols, e.g. --markers X,O"),
        };
        config.set_markers(markers);
    }

    Ok(config)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
            if app.should_quit() {
                info!("Quit requested");
                return Ok(());
            }
        }
    }
}
