//! Popup rendering implementation.

use logview_config::Theme;
use logview_config::constants::{LARGE_POPUP_PERCENT, POPUP_HEIGHT_PERCENT, POPUP_WIDTH_PERCENT};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::Style,
    text::Line,
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
};

use crate::ui::popup::{Popup, PopupType};
use crate::ui::theme::{ThemeExt, spinner_char};

/// Wrap dialog content into display rows of at most `width` characters.
///
/// Each newline-separated segment starts a new row, so `"Line1\nLine2"`
/// yields two rows. Long segments break at the last space that fits, or
/// mid-word when a single word is wider than `width`. No other text is
/// dropped or reflowed.
pub fn wrap_dialog_text(content: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for line in content.lines() {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }

        let mut start = 0;
        while start < chars.len() {
            let end = start + width;
            if end >= chars.len() {
                rows.push(chars[start..].iter().collect());
                break;
            }
            match chars[start..=end].iter().rposition(|c| *c == ' ') {
                Some(pos) if pos > 0 => {
                    rows.push(chars[start..start + pos].iter().collect());
                    start += pos + 1;
                }
                _ => {
                    rows.push(chars[start..end].iter().collect());
                    start = end;
                }
            }
        }
    }
    rows
}

/// Wrapped dialog rows as ratatui lines.
pub fn dialog_lines(content: &str, width: usize) -> Vec<Line<'static>> {
    wrap_dialog_text(content, width)
        .into_iter()
        .map(Line::from)
        .collect()
}

/// Outer area of a popup of the given kind within `frame`.
pub fn popup_area(kind: PopupType, frame: Rect) -> Rect {
    match kind {
        PopupType::Loading => centered_rect(POPUP_WIDTH_PERCENT, 20, frame),
        PopupType::Help => centered_rect(POPUP_WIDTH_PERCENT, POPUP_HEIGHT_PERCENT + 20, frame),
        PopupType::Info => centered_rect(LARGE_POPUP_PERCENT, LARGE_POPUP_PERCENT, frame),
    }
}

/// Text area of a scrollable popup: its outer area minus the borders.
pub fn popup_viewport(kind: PopupType, frame: Rect) -> (u16, u16) {
    let area = popup_area(kind, frame);
    (area.width.saturating_sub(2), area.height.saturating_sub(2))
}

/// Render a modal popup dialog.
///
/// # Arguments
///
/// * `f` - The frame to render to
/// * `popup` - The popup to render
/// * `scroll` - Vertical scroll offset for scrollable popups, in wrapped rows
/// * `spinner_frame` - Current spinner frame for loading popups
/// * `theme` - The color theme to use
pub fn render_popup(f: &mut Frame, popup: &Popup, scroll: usize, spinner_frame: u8, theme: &Theme) {
    let area = popup_area(popup.kind, f.area());
    match popup.kind {
        PopupType::Loading => render_loading_popup(f, popup, area, spinner_frame, theme),
        PopupType::Help | PopupType::Info => {
            render_scrollable_popup(f, popup, scroll, area, theme)
        }
    }
}

fn render_loading_popup(
    f: &mut Frame,
    popup: &Popup,
    area: Rect,
    spinner_frame: u8,
    theme: &Theme,
) {
    f.render_widget(Clear, area);

    let text = format!("{} {}", spinner_char(spinner_frame), popup.content);
    let p = Paragraph::new(text)
        .block(
            Block::default()
                .title(popup.title.as_str())
                .title_style(theme.title())
                .borders(Borders::ALL)
                .border_style(theme.info()),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(p, area);
}

fn render_scrollable_popup(f: &mut Frame, popup: &Popup, scroll: usize, area: Rect, theme: &Theme) {
    f.render_widget(Clear, area);

    let width = area.width.saturating_sub(2) as usize;
    let visible_lines = area.height.saturating_sub(2) as usize;
    let lines = dialog_lines(&popup.content, width);
    let content_height = lines.len();
    let max_scroll = content_height.saturating_sub(visible_lines);
    let scroll = scroll.min(max_scroll);

    // Rows are pre-wrapped to the inner width, so the scroll offset counts
    // exactly the rows drawn.
    let p = Paragraph::new(lines)
        .block(
            Block::default()
                .title(popup.title.as_str())
                .title_style(theme.title())
                .title_bottom(Line::from(" Esc/Enter to close ").right_aligned())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        )
        .style(theme.text())
        .alignment(Alignment::Left)
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    f.render_widget(p, area);

    if content_height > visible_lines {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state =
            ScrollbarState::new(max_scroll).position(scroll);
        f.render_stateful_widget(
            scrollbar,
            area.inner(Margin::new(0, 1)),
            &mut scrollbar_state,
        );
    }
}

/// Create a centered rectangle with the given percentage of the screen size.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);

    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
