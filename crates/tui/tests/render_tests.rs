//! Rendering tests using ratatui's `TestBackend`.
//!
//! # Invariants
//! - The table appears only once logs are loaded
//! - Absent optional fields render as `N/A`
//! - Multi-line analysis text renders one line per row
//! - Long dialog text wraps and can be scrolled to its last row

mod common;

use common::*;
use std::sync::Arc;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 30;

#[test]
fn test_single_record_renders_one_row_with_placeholders() {
    let mut app = loaded_app(vec![LogRecord {
        id: LogId::Int(1),
        timestamp: "t1".to_string(),
        log_level: "INFO".to_string(),
        message: "m1".to_string(),
        details: None,
        source_ip: None,
        endpoint: None,
    }]);

    let rows = render_rows(&mut app, WIDTH, HEIGHT);

    assert!(rows.iter().any(|r| r.contains("Timestamp") && r.contains("Endpoint")));
    let data_rows: Vec<_> = rows.iter().filter(|r| r.contains("m1")).collect();
    assert_eq!(data_rows.len(), 1);
    let row = data_rows[0];
    assert!(row.contains("t1"));
    assert!(row.contains("INFO"));
    assert_eq!(row.matches("N/A").count(), 2);
}

#[test]
fn test_rows_follow_received_order() {
    let mut app = loaded_app(vec![
        record(3, Some("10.0.0.3"), Some("/c")),
        record(1, Some("10.0.0.1"), Some("/a")),
        record(2, Some("10.0.0.2"), Some("/b")),
    ]);

    let rows = render_rows(&mut app, WIDTH, HEIGHT);
    let position = |needle: &str| rows.iter().position(|r| r.contains(needle)).unwrap();

    assert!(position("10.0.0.3") < position("10.0.0.1"));
    assert!(position("10.0.0.1") < position("10.0.0.2"));
    assert!(!rows.iter().any(|r| r.contains("N/A")));
}

#[test]
fn test_pending_shows_only_loading_popup() {
    let mut app = new_app();
    app.update(Action::LoadLogs);

    let text = render_text(&mut app, WIDTH, HEIGHT);

    assert!(text.contains("Loading logs"));
    assert!(!text.contains("Timestamp"));
}

#[test]
fn test_load_failure_renders_no_table_and_error() {
    let mut app = new_app();
    app.update(Action::LoadLogs);
    app.update(Action::LogsLoaded(Err(Arc::new(ClientError::ApiError {
        status: 500,
        url: "http://localhost:5000/api/logs/".to_string(),
        message: "Internal Server Error".to_string(),
    }))));

    let text = render_text(&mut app, WIDTH, HEIGHT);

    assert!(!text.contains("Timestamp"));
    assert!(text.contains("Failed to load logs"));
    assert!(text.contains("Logs could not be loaded."));
    assert!(text.contains("load failed"));
}

#[test]
fn test_analysis_dialog_renders_separate_lines() {
    let mut app = loaded_app(vec![record(1, None, None)]);
    app.update(Action::RunAnalysis);
    app.update(Action::AnalysisFinished(Ok("Line1\nLine2".to_string())));

    let rows = render_rows(&mut app, WIDTH, HEIGHT);

    let first = rows.iter().position(|r| r.contains("Line1")).expect("Line1");
    let second = rows.iter().position(|r| r.contains("Line2")).expect("Line2");
    assert_eq!(second, first + 1);
    assert!(rows.iter().any(|r| r.contains("AI Analysis")));
}

#[test]
fn test_long_analysis_scrolls_to_its_last_row() {
    let mut app = loaded_app(vec![record(1, None, None)]);
    app.update(Action::RunAnalysis);
    let text = "word ".repeat(400) + "TAILMARKER";
    app.update(Action::AnalysisFinished(Ok(text)));

    assert!(!render_text(&mut app, 80, 24).contains("TAILMARKER"));

    let mut seen_tail = false;
    for _ in 0..200 {
        app.update(Action::DialogScrollDown);
        if render_text(&mut app, 80, 24).contains("TAILMARKER") {
            seen_tail = true;
            break;
        }
    }
    assert!(seen_tail, "last row never scrolled into view");

    let at_end = app.notifications.modal_scroll();
    for _ in 0..20 {
        app.update(Action::DialogScrollDown);
    }
    assert_eq!(app.notifications.modal_scroll(), at_end);
    assert!(render_text(&mut app, 80, 24).contains("TAILMARKER"));
}

#[test]
fn test_running_analysis_shows_progress() {
    let mut app = loaded_app(vec![record(1, None, None)]);
    app.update(Action::RunAnalysis);

    let text = render_text(&mut app, WIDTH, HEIGHT);

    assert!(text.contains("Analyzing logs"));
    assert!(text.contains("Analyzing..."));
}

#[test]
fn test_empty_collection_renders_placeholder() {
    let mut app = loaded_app(vec![]);

    let text = render_text(&mut app, WIDTH, HEIGHT);

    assert!(text.contains("No log records stored."));
    assert!(text.contains("0 records"));
}

#[test]
fn test_header_shows_backend_url() {
    let mut app = new_app();
    let text = render_text(&mut app, WIDTH, HEIGHT);
    assert!(text.contains("http://localhost:5000"));
    assert!(text.contains("Log Viewer"));
}

#[test]
fn test_help_dialog_renders_bindings() {
    let mut app = loaded_app(vec![]);
    app.update(Action::OpenHelp);

    let text = render_text(&mut app, WIDTH, HEIGHT);

    assert!(text.contains("Help"));
    assert!(text.contains("Analyze logs with AI"));
}
