//! Keyboard input mapping.
//!
//! Responsibilities:
//! - Translate key presses into `Action`s based on what is on screen.
//! - Provide the key binding table used by the help dialog.
//!
//! Invariants:
//! - Ctrl+C always maps to `Quit`, even while a loading popup blocks input.
//! - While a loading popup is open, every other key is ignored.
//! - While a dialog is open, keys only scroll or close it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::App;

/// Key bindings shown in the help dialog, as (keys, description).
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("q / Ctrl+C", "Quit"),
    ("a", "Analyze logs with AI"),
    ("Enter", "Show record details"),
    ("↑ ↓ / k j", "Move selection"),
    ("PgUp PgDn", "Move selection by a page"),
    ("Home End / g G", "Jump to first or last record"),
    ("?", "Show this help"),
    ("Esc", "Close dialog or dismiss errors"),
];

/// Help dialog body built from `KEY_BINDINGS`.
pub fn help_text() -> String {
    let width = KEY_BINDINGS
        .iter()
        .map(|(keys, _)| keys.chars().count())
        .max()
        .unwrap_or(0);

    let mut text = String::from("Key bindings\n\n");
    for (keys, description) in KEY_BINDINGS {
        text.push_str(&format!("  {keys:<width$}  {description}\n"));
    }
    text.push_str("\nIn dialogs: ↑ ↓ scroll, Esc / Enter / q close.");
    text
}

impl App {
    /// Map a key press to an action, if it means anything right now.
    pub fn handle_input(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.notifications.is_blocking() {
            return None;
        }

        if self.notifications.has_dialog() {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::CloseDialog),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::DialogScrollUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::DialogScrollDown),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('a') => Some(Action::RunAnalysis),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Esc => Some(Action::DismissErrors),
            KeyCode::Enter => Some(Action::ShowRecordDetails),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::NavigateUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::NavigateDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::GoToTop),
            KeyCode::End | KeyCode::Char('G') => Some(Action::GoToBottom),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_text_lists_every_binding() {
        let text = help_text();
        for (keys, description) in KEY_BINDINGS {
            assert!(text.contains(keys), "missing {keys}");
            assert!(text.contains(description), "missing {description}");
        }
    }
}
