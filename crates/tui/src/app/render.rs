//! Rendering logic for the application.
//!
//! The frame is header, body and footer, with toasts and the modal popup
//! drawn on top. Rendering never changes load or analysis state.

use logview_client::LogRecord;
use logview_config::constants::NOT_AVAILABLE;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, FOOTER_HEIGHT, HEADER_HEIGHT, LoadState};
use crate::ui::popup::{popup_viewport, render_popup};
use crate::ui::screens::logs::render_logs_table;
use crate::ui::theme::ThemeExt;
use crate::ui::toast::render_toasts;
use crate::ui::widgets::{render_empty_state, spinner_label};

/// Multi-line description of a record for the detail dialog.
///
/// Includes the `details` payload, pretty-printed, which the table omits.
pub fn record_details(record: &LogRecord) -> String {
    let details = match &record.details {
        Some(value) if !value.is_null() => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        _ => NOT_AVAILABLE.to_string(),
    };

    format!(
        "ID:        {}\nTimestamp: {}\nLevel:     {}\nMessage:   {}\nSource IP: {}\nEndpoint:  {}\n\nDetails:\n{}",
        record.id,
        record.timestamp,
        record.log_level,
        record.message,
        record.source_ip().unwrap_or(NOT_AVAILABLE),
        record.endpoint().unwrap_or(NOT_AVAILABLE),
        details,
    )
}

impl App {
    /// Render the whole frame.
    pub fn render(&mut self, f: &mut Frame) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(f.area());

        self.render_header(f, header);
        self.render_body(f, body);
        self.render_footer(f, footer);

        render_toasts(f, self.notifications.toasts(), &self.theme);

        if let Some(kind) = self.notifications.modal().map(|p| p.kind) {
            let (width, height) = popup_viewport(kind, f.area());
            self.notifications.set_viewport(width, height);
        }
        if let Some(popup) = self.notifications.modal() {
            render_popup(
                f,
                popup,
                self.notifications.modal_scroll(),
                self.spinner_frame,
                &self.theme,
            );
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let status = match self.loader.state() {
            LoadState::NotStarted | LoadState::Pending => {
                Span::styled("loading", self.theme.text_dim())
            }
            LoadState::Loaded(records) => {
                Span::styled(format!("{} records", records.len()), self.theme.success())
            }
            LoadState::Failed(_) => Span::styled("load failed", self.theme.error()),
        };

        let line = Line::from(vec![
            Span::styled("Backend: ", self.theme.text_dim()),
            Span::styled(self.base_url.as_str(), self.theme.text()),
            Span::raw("  "),
            status,
        ]);

        let header = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border())
                .title(" Log Viewer ")
                .title_style(self.theme.title()),
        );
        f.render_widget(header, area);
    }

    fn render_body(&mut self, f: &mut Frame, area: Rect) {
        match self.loader.state() {
            // The loading popup is the only thing shown until the fetch settles.
            LoadState::NotStarted | LoadState::Pending => {}
            LoadState::Loaded(records) if records.is_empty() => {
                render_empty_state(f, area, "Logs", "No log records stored.", &self.theme);
            }
            LoadState::Loaded(records) => {
                render_logs_table(f, area, records, &mut self.table_state, &self.theme);
            }
            LoadState::Failed(_) => {
                render_empty_state(f, area, "Logs", "Logs could not be loaded.", &self.theme);
            }
        }
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let key = |k: &'static str| Span::styled(k, self.theme.title());
        let sep = || Span::styled(" │ ", self.theme.text_dim());

        let analyze = if self.analysis.is_running() {
            Span::styled(
                spinner_label("Analyzing...", self.spinner_frame),
                self.theme.warning(),
            )
        } else if self.analysis_enabled() {
            Span::styled(" Analyze", self.theme.text())
        } else {
            Span::styled(" Analyze", self.theme.disabled())
        };
        let analyze_key = if self.analysis_enabled() {
            key("a")
        } else {
            Span::styled("a", self.theme.disabled())
        };

        let line = Line::from(vec![
            key("q"),
            Span::raw(" Quit"),
            sep(),
            analyze_key,
            Span::raw(" "),
            analyze,
            sep(),
            key("↑↓"),
            Span::raw(" Select"),
            sep(),
            key("Enter"),
            Span::raw(" Details"),
            sep(),
            key("?"),
            Span::raw(" Help"),
            sep(),
            key("Esc"),
            Span::raw(" Dismiss"),
        ]);

        let footer = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border()),
        );
        f.render_widget(footer, area);
    }
}
