//! Terminal log viewer entry point.
//!
//! Responsibilities:
//! - Initialize file logging, configuration and the backend client.
//! - Own the terminal and run the event loop.
//! - Dispatch the single startup log load.
//!
//! Does NOT handle:
//! - State transitions (see `logview_tui::app`).
//! - HTTP details (see `logview_client`).
//!
//! Invariants:
//! - The event loop task is the only mutator of `App`.
//! - On quit the session token is cancelled before tracked tasks are awaited.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use logview_config::Theme;
use logview_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS, LOG_FILE_NAME};
use logview_tui::action::{Action, RedactedAction};
use logview_tui::app::App;
use logview_tui::cli::Cli;
use logview_tui::runtime::{
    client::create_client,
    config::load_config,
    side_effects::{CancellationToken, TaskTracker, handle_side_effects},
    terminal::TerminalGuard,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The terminal belongs to the UI, so logs go to a daily-rolling file.
    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, LOG_FILE_NAME);
    let (non_blocking, _log_guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let config = load_config(&cli)?;
    let client = Arc::new(create_client(&config)?);
    let mut app = App::new(
        Theme::from_color_theme(config.theme),
        config.connection.base_url.clone(),
    );

    let task_tracker = TaskTracker::new();
    let cancel = CancellationToken::new();

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard::new();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    let tx_input = tx.clone();
    let input_cancel = cancel.clone();
    task_tracker.spawn(async move {
        let mut reader = EventStream::new();
        loop {
            let event = tokio::select! {
                _ = input_cancel.cancelled() => break,
                event = reader.next() => event,
            };
            let action = match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => Action::Input(key),
                Some(Ok(Event::Resize(width, height))) => Action::Resize(width, height),
                Some(Ok(_)) => continue,
                Some(Err(e)) => {
                    tracing::error!(error = %e, "Terminal event stream failed");
                    break;
                }
                None => break,
            };
            if tx_input.send(action).await.is_err() {
                break;
            }
        }
    });

    // Mount: the log set is requested exactly once per session.
    if let Some(effect) = app.update(Action::LoadLogs) {
        handle_side_effects(
            effect,
            client.clone(),
            tx.clone(),
            task_tracker.clone(),
            cancel.clone(),
        )
        .await;
    }

    let mut tick_interval = tokio::time::interval(Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::info!("Handling action: {:?}", RedactedAction(&action));

                match app.update(action) {
                    Some(Action::Quit) => break,
                    Some(effect) => {
                        handle_side_effects(
                            effect,
                            client.clone(),
                            tx.clone(),
                            task_tracker.clone(),
                            cancel.clone(),
                        )
                        .await;
                    }
                    None => {}
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    tracing::info!("Shutting down");
    cancel.cancel();
    drop(rx);
    task_tracker.close();
    task_tracker.wait().await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
