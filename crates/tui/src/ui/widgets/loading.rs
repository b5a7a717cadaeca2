//! Inline loading indicator.
//!
//! Used in the footer's analyze hint while an analysis is running.

use crate::ui::theme::spinner_char;

/// Text for an inline spinner, e.g. `"⠙ Analyzing..."`.
pub fn spinner_label(message: &str, spinner_frame: u8) -> String {
    format!("{} {}", spinner_char(spinner_frame), message)
}
