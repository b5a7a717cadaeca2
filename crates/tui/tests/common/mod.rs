//! Common test utilities for TUI tests.
//!
//! Provides a side-effects harness backed by a wiremock server, record
//! builders, and helpers for rendering `App` into a `TestBackend`.
//!
//! # Invariants
//! - Each test gets its own mock server, action channel, tracker and token
//! - Fixtures are loaded from the client crate's `fixtures/` directory
//!
//! # What this does NOT handle
//! - A real terminal or the binary's event loop

// Not every test file uses every helper.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
pub use logview_client::testing::load_fixture;
pub use logview_client::{ClientError, LogId, LogRecord, LogViewerClient};
pub use logview_config::Theme;
pub use logview_tui::action::Action;
pub use logview_tui::app::{AnalysisState, App, LoadState};
pub use logview_tui::runtime::side_effects::{
    CancellationToken, SharedClient, TaskTracker, handle_side_effects,
};
pub use tokio::sync::mpsc::{Receiver, Sender};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use ratatui::{Terminal, backend::TestBackend};

/// Test harness for side effects testing.
pub struct SideEffectsTestHarness {
    /// The mock HTTP server for intercepting API calls
    pub mock_server: MockServer,
    /// Receiver for actions sent by the side effect handlers
    pub action_rx: Receiver<Action>,
    /// Sender for actions (clone this to pass to handlers)
    pub action_tx: Sender<Action>,
    /// Shared client pointing to the mock server
    pub client: SharedClient,
    /// Tracker the handlers spawn on
    pub task_tracker: TaskTracker,
    /// Session cancellation token
    pub cancel: CancellationToken,
}

impl SideEffectsTestHarness {
    /// Create a new test harness with a mock server and fresh channels.
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let (action_tx, action_rx) = mpsc::channel::<Action>(100);
        let client = create_test_client(&mock_server.uri());

        Self {
            mock_server,
            action_rx,
            action_tx,
            client,
            task_tracker: TaskTracker::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// Dispatch an action without waiting for results.
    ///
    /// Panics if dispatch blocks, which would mean a handler awaited network
    /// I/O instead of spawning it.
    pub async fn dispatch(&self, action: Action) {
        let handle_future = handle_side_effects(
            action,
            self.client.clone(),
            self.action_tx.clone(),
            self.task_tracker.clone(),
            self.cancel.clone(),
        );
        tokio::time::timeout(Duration::from_millis(100), handle_future)
            .await
            .expect("handle_side_effects blocked instead of spawning a task");
    }

    /// Dispatch an action and collect every action sent back until `timeout_secs`.
    pub async fn handle_and_collect(&mut self, action: Action, timeout_secs: u64) -> Vec<Action> {
        self.dispatch(action).await;
        tokio::task::yield_now().await;

        let mut actions = Vec::new();
        let deadline = tokio::time::Instant::now() + Duration::from_secs(timeout_secs);
        while tokio::time::Instant::now() < deadline {
            match tokio::time::timeout(Duration::from_millis(100), self.action_rx.recv()).await {
                Ok(Some(action)) => actions.push(action),
                Ok(None) => break,
                Err(_) => {
                    if self.task_tracker.is_empty() && !actions.is_empty() {
                        break;
                    }
                }
            }
        }
        actions
    }

    /// Expect a single action within `timeout_ms`.
    pub async fn expect_action(&mut self, timeout_ms: u64) -> Action {
        tokio::time::timeout(Duration::from_millis(timeout_ms), self.action_rx.recv())
            .await
            .expect("Timeout waiting for action")
            .expect("Channel closed while waiting for action")
    }
}

/// Create a shared client pointing to the mock server.
pub fn create_test_client(mock_uri: &str) -> SharedClient {
    let client = LogViewerClient::builder()
        .base_url(mock_uri.to_string())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build test client");
    Arc::new(client)
}

/// Build a record with the given id and optional fields.
pub fn record(id: i64, source_ip: Option<&str>, endpoint: Option<&str>) -> LogRecord {
    LogRecord {
        id: LogId::Int(id),
        timestamp: format!("t{id}"),
        log_level: "INFO".to_string(),
        message: format!("m{id}"),
        details: None,
        source_ip: source_ip.map(str::to_string),
        endpoint: endpoint.map(str::to_string),
    }
}

/// A fresh app with the default theme.
pub fn new_app() -> App {
    App::new(Theme::default(), "http://localhost:5000")
}

/// An app whose startup load already succeeded with `records`.
pub fn loaded_app(records: Vec<LogRecord>) -> App {
    let mut app = new_app();
    assert!(matches!(app.update(Action::LoadLogs), Some(Action::LoadLogs)));
    assert!(app.update(Action::LogsLoaded(Ok(records))).is_none());
    app
}

pub fn key(code: KeyCode) -> Action {
    Action::Input(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Action {
    Action::Input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// Render the app and return the screen as one string per row.
pub fn render_rows(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("Failed to create test terminal");
    terminal
        .draw(|f| app.render(f))
        .expect("Failed to draw frame");

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

/// Render the app and return the whole screen as one string.
pub fn render_text(app: &mut App, width: u16, height: u16) -> String {
    render_rows(app, width, height).join("\n")
}
