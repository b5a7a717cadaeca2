//! Empty state widget.

use logview_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::ThemeExt;

/// Render a bordered placeholder with a centered message.
///
/// # Example
///
/// ```rust,ignore
/// render_empty_state(f, area, "Logs", "No log records stored.", theme);
/// ```
pub fn render_empty_state(f: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
    let placeholder = Paragraph::new(message)
        .style(theme.text_dim())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(title),
        )
        .alignment(Alignment::Center);
    f.render_widget(placeholder, area);
}
