//! Log table screen.
//!
//! The table is a pure projection of the loaded collection: one row per
//! record in the order received, fixed columns, `N/A` for absent or empty
//! optional fields. Nothing is sorted, filtered or paginated; the selection
//! drives the viewport.

use logview_client::LogRecord;
use logview_config::Theme;
use logview_config::constants::NOT_AVAILABLE;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use crate::ui::theme::ThemeExt;

/// Column headers, in display order.
pub const LOG_COLUMNS: [&str; 5] = ["Timestamp", "Log Level", "Message", "Source IP", "Endpoint"];

/// Cell text for one record, in `LOG_COLUMNS` order.
pub fn log_row(record: &LogRecord) -> [String; 5] {
    [
        record.timestamp.clone(),
        record.log_level.clone(),
        record.message.clone(),
        record.source_ip().unwrap_or(NOT_AVAILABLE).to_string(),
        record.endpoint().unwrap_or(NOT_AVAILABLE).to_string(),
    ]
}

/// Cell text for every record, preserving order.
pub fn log_rows(records: &[LogRecord]) -> Vec<[String; 5]> {
    records.iter().map(log_row).collect()
}

/// Render the log table into `area`.
pub fn render_logs_table(
    f: &mut Frame,
    area: Rect,
    records: &[LogRecord],
    state: &mut TableState,
    theme: &Theme,
) {
    let header = Row::new(
        LOG_COLUMNS
            .iter()
            .map(|h| Cell::from(*h).style(theme.table_header())),
    )
    .height(1);

    let rows = records.iter().map(|record| {
        let [timestamp, level, message, source_ip, endpoint] = log_row(record);
        let level_style = theme.log_level(&record.log_level);
        Row::new(vec![
            Cell::from(timestamp).style(theme.text_dim()),
            Cell::from(level).style(level_style),
            Cell::from(message),
            Cell::from(source_ip),
            Cell::from(endpoint),
        ])
    });

    let title = format!("Logs ({})", records.len());
    let table = Table::new(
        rows,
        [
            Constraint::Length(26), // Timestamp
            Constraint::Length(10), // Log Level
            Constraint::Fill(1),    // Message
            Constraint::Length(16), // Source IP
            Constraint::Length(22), // Endpoint
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(theme.border())
            .title_style(theme.title()),
    )
    .style(theme.text())
    .row_highlight_style(theme.highlight())
    .highlight_symbol("> ");

    f.render_stateful_widget(table, area, state);
}
