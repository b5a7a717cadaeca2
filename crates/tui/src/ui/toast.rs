//! Toast notification widgets for transient feedback messages.
//!
//! Toasts are stacked in the bottom-right corner above the footer. Each toast
//! has a unique UUID, a severity level and an optional time-to-live; a toast
//! without a TTL stays until the user dismisses it.

use logview_config::Theme;
use logview_config::constants::{MAX_VISIBLE_TOASTS, SUCCESS_TOAST_TTL_MS, TOAST_WIDTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::app::{FOOTER_HEIGHT, HEADER_HEIGHT};

/// Height of a single toast including borders.
const TOAST_HEIGHT: u16 = 4;

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Success message
    Success,
    /// Error message
    Error,
}

impl ToastLevel {
    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "OK",
            Self::Error => "ERR",
        }
    }

    /// Returns the TTL for this level; `None` means the toast is persistent.
    pub fn ttl(&self) -> Option<Duration> {
        match self {
            Self::Success => Some(Duration::from_millis(SUCCESS_TOAST_TTL_MS)),
            Self::Error => None,
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Unique identifier for this toast
    pub id: Uuid,
    /// Short heading shown in the toast border
    pub title: String,
    /// The message to display
    pub message: String,
    /// Severity level
    pub level: ToastLevel,
    /// When this toast was created
    pub created_at: Instant,
    /// Time-to-live before auto-expiry; `None` never expires
    pub ttl: Option<Duration>,
}

impl Toast {
    /// Creates a new toast with the given title, message and level.
    pub fn new(title: String, message: String, level: ToastLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            message,
            level,
            created_at: Instant::now(),
            ttl: level.ttl(),
        }
    }

    /// Returns true if this toast has a TTL and it has elapsed.
    pub fn is_expired(&self) -> bool {
        self.ttl.is_some_and(|ttl| self.created_at.elapsed() >= ttl)
    }

    /// Returns true if this toast stays until dismissed.
    pub fn is_persistent(&self) -> bool {
        self.ttl.is_none()
    }

    /// Creates a success toast.
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title.into(), message.into(), ToastLevel::Success)
    }

    /// Creates a persistent error toast.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title.into(), message.into(), ToastLevel::Error)
    }
}

/// Renders all active toasts in the bottom-right corner.
///
/// Expired toasts are skipped and at most `MAX_VISIBLE_TOASTS` of the most
/// recent ones are drawn. Nothing is drawn when the terminal is too small.
pub fn render_toasts(f: &mut Frame, toasts: &[Toast], theme: &Theme) {
    let active: Vec<_> = toasts.iter().filter(|t| !t.is_expired()).collect();

    if active.is_empty() {
        return;
    }

    let skip = active.len().saturating_sub(MAX_VISIBLE_TOASTS);
    let active: Vec<_> = active.into_iter().skip(skip).collect();

    let total_height = active.len() as u16 * TOAST_HEIGHT;
    let area = f.area();

    if area.height < HEADER_HEIGHT + FOOTER_HEIGHT + total_height + 2
        || area.width < TOAST_WIDTH + 2
    {
        return;
    }

    let toast_area = Rect {
        x: area.width.saturating_sub(TOAST_WIDTH + 2),
        y: area.height.saturating_sub(FOOTER_HEIGHT + total_height + 1),
        width: TOAST_WIDTH,
        height: total_height,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            std::iter::repeat_n(Constraint::Length(TOAST_HEIGHT), active.len())
                .collect::<Vec<_>>(),
        )
        .split(toast_area);

    for (toast, chunk) in active.iter().zip(chunks.iter()) {
        render_single_toast(f, toast, *chunk, theme);
    }
}

/// Renders a single toast notification.
fn render_single_toast(f: &mut Frame, toast: &Toast, area: Rect, theme: &Theme) {
    let color = match toast.level {
        ToastLevel::Success => theme.success,
        ToastLevel::Error => theme.error,
    };

    let max_width = area.width.saturating_sub(4) as usize;
    let chars: Vec<char> = toast.message.chars().collect();
    let mut wrapped: Vec<String> = chars
        .chunks(max_width.max(1))
        .take(2)
        .map(|c| c.iter().collect())
        .collect();
    if chars.len() > max_width * 2
        && let Some(last) = wrapped.last_mut()
    {
        let keep = max_width.saturating_sub(3);
        *last = last.chars().take(keep).collect::<String>() + "...";
    }

    let label = Span::styled(
        format!(" {} ", toast.level.label()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    );
    let mut lines = Vec::with_capacity(2);
    let mut wrapped = wrapped.into_iter();
    lines.push(Line::from(vec![
        label,
        Span::raw(wrapped.next().unwrap_or_default()),
    ]));
    for rest in wrapped {
        lines.push(Line::from(vec![Span::raw("     "), Span::raw(rest)]));
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(toast.title.as_str(), Style::default().fg(color)));
    if toast.is_persistent() {
        block = block.title_bottom(Line::from(" Esc to dismiss ").right_aligned());
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    f.render_widget(paragraph, area);
}
