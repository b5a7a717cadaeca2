//! Theme types for the log viewer.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with all color values.
//! - Parse theme names given on the command line or in `LOGVIEW_THEME`.
//!
//! Does NOT handle:
//! - Actual rendering (see TUI crate).
//!
//! Invariants:
//! - Colors are semantically named (error/warn/success/info) for consistent usage.
//! - Theme names are snake_case, both when parsed and when serialized.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    /// All selectable themes, in display order.
    pub const ALL: [ColorTheme; 4] = [
        Self::Default,
        Self::Light,
        Self::HighContrast,
        Self::Monochrome,
    ];

    /// The snake_case key accepted by [`FromStr`] and written by `Display`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Light => "light",
            Self::HighContrast => "high_contrast",
            Self::Monochrome => "monochrome",
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|theme| theme.key() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|t| t.key()).collect();
                format!("unknown theme '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

/// Expanded runtime theme.
///
/// Invariants:
/// - Colors should be semantically meaningful (error/warn/success/info).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    // Selection / highlight
    pub highlight_fg: Color,
    pub highlight_bg: Color,

    // Semantics
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub disabled: Color,

    // Tables
    pub table_header_fg: Color,
    pub table_header_bg: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Theme {
    /// Expand a `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Cyan,
                title: Color::Cyan,
                accent: Color::Yellow,

                highlight_fg: Color::Yellow,
                highlight_bg: Color::DarkGray,

                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Cyan,
                disabled: Color::DarkGray,

                table_header_fg: Color::Cyan,
                table_header_bg: Color::DarkGray,

                log_error: Color::Red,
                log_warn: Color::Yellow,
                log_info: Color::Green,
                log_debug: Color::Blue,
            },
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::Gray,
                border: Color::Blue,
                title: Color::Blue,
                accent: Color::Magenta,

                highlight_fg: Color::Black,
                highlight_bg: Color::Gray,

                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Blue,
                disabled: Color::Gray,

                table_header_fg: Color::Black,
                table_header_bg: Color::Gray,

                log_error: Color::Red,
                log_warn: Color::Yellow,
                log_info: Color::Green,
                log_debug: Color::Blue,
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::White,
                border: Color::White,
                title: Color::Yellow,
                accent: Color::LightYellow,

                highlight_fg: Color::Black,
                highlight_bg: Color::Yellow,

                success: Color::LightGreen,
                warning: Color::LightYellow,
                error: Color::LightRed,
                info: Color::LightCyan,
                disabled: Color::Gray,

                table_header_fg: Color::Black,
                table_header_bg: Color::White,

                log_error: Color::LightRed,
                log_warn: Color::LightYellow,
                log_info: Color::LightGreen,
                log_debug: Color::LightCyan,
            },
            ColorTheme::Monochrome => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::White,
                title: Color::White,
                accent: Color::White,

                highlight_fg: Color::Black,
                highlight_bg: Color::White,

                success: Color::White,
                warning: Color::White,
                error: Color::White,
                info: Color::White,
                disabled: Color::DarkGray,

                table_header_fg: Color::Black,
                table_header_bg: Color::Gray,

                log_error: Color::White,
                log_warn: Color::White,
                log_info: Color::Gray,
                log_debug: Color::DarkGray,
            },
        }
    }
}

impl From<ColorTheme> for Theme {
    fn from(value: ColorTheme) -> Self {
        Self::from_color_theme(value)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::Default)
    }
}
