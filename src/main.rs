//! Terminal lifecycle, event loop, and cleanup for the YouMatter chat TUI.

mod actions;
mod app;
mod backend;
mod cli;
mod config;
mod error;
mod events;
mod services;
mod state;
mod ui;

use std::fs::OpenOptions;
use std::io;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use app::App;
use backend::HttpBackend;
use cli::Cli;
use config::ChatConfig;
use error::ConfigError;
use events::{key_to_action, mouse_to_action, TICK_RATE};
use ui::FrameInfo;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ChatConfig::from_cli(&cli)?;
    init_logging(&config)?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let backend = HttpBackend::new(&config)?;
    tracing::info!(endpoint = backend.endpoint(), timeout = ?config.timeout, "starting chat");

    let mut app = App::new(Arc::new(backend), runtime.handle().clone());
    app.theme = config.theme;
    app.endpoint_label = config.host_label();

    // Set up the terminal in raw / alternate-screen mode.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.show_cursor()?;

    let result = run_loop(&mut terminal, &mut app);

    // Always restore the terminal, even on error.
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = terminal.show_cursor();

    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }
    // Outstanding calls are abandoned on quit.
    runtime.shutdown_background();
    result
}

/// Logs go to `--log-file` when given; otherwise they are dropped so the UI owns the screen.
fn init_logging(config: &ChatConfig) -> Result<()> {
    let writer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ConfigError::LogFile {
                    path: path.clone(),
                    source,
                })?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(io::sink),
    };

    // RUST_LOG controls the filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("youmatter_tui=info".parse()?),
        )
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick = app.tick.wrapping_add(1);
        app.poll_results();

        if app.should_quit {
            return Ok(());
        }

        let tick = app.tick;
        let mut frame_info = FrameInfo::default();
        terminal.draw(|frame| frame_info = ui::render(frame, app, tick))?;
        app.sync_scroll(frame_info.chat_max_scroll);

        if event::poll(TICK_RATE)? {
            let action = match event::read()? {
                Event::Key(key) => key_to_action(&key),
                Event::Mouse(mouse) => mouse_to_action(&mouse, &frame_info.regions),
                _ => None,
            };
            if let Some(a) = action {
                app.dispatch(a);
                if app.should_quit {
                    return Ok(());
                }
            }
        }
    }
}
