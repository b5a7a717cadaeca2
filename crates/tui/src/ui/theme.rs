//! TUI-specific theme helpers and style builders.
//!
//! This module extends `logview_config::Theme` with ergonomic helpers
//! for building ratatui `Style` objects consistently across the TUI.

use logview_config::Theme;
use ratatui::style::{Modifier, Style};

/// Spinner characters for animated loading indicator.
///
/// These Braille patterns create a smooth spinning animation when cycled.
pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Get the spinner character for a given animation frame.
///
/// # Example
///
/// ```
/// use logview_tui::ui::theme::spinner_char;
///
/// assert_eq!(spinner_char(0), spinner_char(8));
/// ```
pub fn spinner_char(frame: u8) -> char {
    SPINNER_CHARS[frame as usize % SPINNER_CHARS.len()]
}

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    /// Get the base text style.
    fn text(&self) -> Style;

    /// Get the dimmed text style.
    fn text_dim(&self) -> Style;

    /// Get the title style (bold accent).
    fn title(&self) -> Style;

    /// Get the border style.
    fn border(&self) -> Style;

    /// Get the selected row style.
    fn highlight(&self) -> Style;

    fn success(&self) -> Style;

    fn warning(&self) -> Style;

    fn error(&self) -> Style;

    fn info(&self) -> Style;

    /// Style for disabled actions and hints.
    fn disabled(&self) -> Style;

    /// Get the table header style.
    fn table_header(&self) -> Style;

    /// Style for a log level label.
    ///
    /// Matching is case-insensitive; unknown levels use the plain text style.
    fn log_level(&self, level: &str) -> Style;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn highlight(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight_bg)
    }

    fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    fn disabled(&self) -> Style {
        Style::default().fg(self.disabled)
    }

    fn table_header(&self) -> Style {
        Style::default()
            .fg(self.table_header_fg)
            .bg(self.table_header_bg)
            .add_modifier(Modifier::BOLD)
    }

    fn log_level(&self, level: &str) -> Style {
        match level.trim().to_ascii_uppercase().as_str() {
            "ERROR" | "CRITICAL" | "FATAL" => Style::default()
                .fg(self.log_error)
                .add_modifier(Modifier::BOLD),
            "WARN" | "WARNING" => Style::default().fg(self.log_warn),
            "INFO" => Style::default().fg(self.log_info),
            "DEBUG" | "TRACE" => Style::default().fg(self.log_debug),
            _ => self.text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logview_config::ColorTheme;

    #[test]
    fn test_spinner_cycles() {
        for frame in 0..16u8 {
            assert_eq!(
                spinner_char(frame),
                SPINNER_CHARS[frame as usize % SPINNER_CHARS.len()]
            );
        }
        assert_eq!(spinner_char(255), SPINNER_CHARS[255 % 8]);
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let theme = Theme::default();
        assert_eq!(theme.log_level("error").fg, Some(theme.log_error));
        assert_eq!(theme.log_level("ERROR").fg, Some(theme.log_error));
        assert_eq!(theme.log_level("Critical").fg, Some(theme.log_error));
        assert_eq!(theme.log_level("warning").fg, Some(theme.log_warn));
        assert_eq!(theme.log_level("WARN").fg, Some(theme.log_warn));
        assert_eq!(theme.log_level("info").fg, Some(theme.log_info));
        assert_eq!(theme.log_level("DEBUG").fg, Some(theme.log_debug));
    }

    #[test]
    fn test_unknown_level_uses_text_style() {
        let theme = Theme::from_color_theme(ColorTheme::Light);
        assert_eq!(theme.log_level("NOTICE"), theme.text());
        assert_eq!(theme.log_level(""), theme.text());
    }
}
