//! Notification surface shared by the log loader and the analysis runner.
//!
//! Responsibilities:
//! - Define the `Notifier` contract used by state machines to report status.
//! - Implement it for the terminal (`NotificationCenter`): toasts for
//!   success/error, a blocking popup for loading, a dialog for info.
//!
//! Does NOT handle:
//! - Rendering (see `crate::app::render`, `crate::ui::toast`, `crate::ui::popup`).
//! - Deciding when to notify (callers do, on state transitions).
//!
//! Invariants:
//! - At most one modal popup is open at a time.
//! - A Success, Error or Info notification replaces an open loading popup.
//! - Error toasts are persistent until `dismiss_errors` is called.
//! - The dialog scroll offset counts wrapped rows and never passes the point
//!   where the last row reaches the bottom of the viewport.

use crate::ui::popup::{Popup, PopupType, wrap_dialog_text};
use crate::ui::toast::Toast;

/// Kind of a notification; selects how the surface presents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
    Loading,
}

/// A single status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Sink for status notifications.
///
/// Implementors only need `notify` and `dismiss_loading`; the `show_*`
/// helpers build the matching `Notification`.
pub trait Notifier {
    /// Present a notification.
    fn notify(&mut self, notification: Notification);

    /// Close an open loading notification, if any.
    fn dismiss_loading(&mut self);

    fn show_loading(&mut self, title: &str, body: &str) {
        self.notify(Notification::new(NotificationKind::Loading, title, body));
    }

    fn show_success(&mut self, title: &str, body: &str) {
        self.notify(Notification::new(NotificationKind::Success, title, body));
    }

    fn show_error(&mut self, title: &str, body: &str) {
        self.notify(Notification::new(NotificationKind::Error, title, body));
    }

    fn show_info(&mut self, title: &str, body: &str) {
        self.notify(Notification::new(NotificationKind::Info, title, body));
    }
}

/// Terminal notification surface: a toast stack plus one modal popup.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    toasts: Vec<Toast>,
    modal: Option<Popup>,
    modal_scroll: usize,
    /// Inner width and height of the modal as last laid out
    viewport: Option<(u16, u16)>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active toasts, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// The open modal popup, if any.
    pub fn modal(&self) -> Option<&Popup> {
        self.modal.as_ref()
    }

    /// Scroll offset of the open modal.
    pub fn modal_scroll(&self) -> usize {
        self.modal_scroll
    }

    /// True while a blocking (loading) popup is open.
    pub fn is_blocking(&self) -> bool {
        self.modal.as_ref().is_some_and(|p| p.kind.is_blocking())
    }

    /// True while a dismissible dialog is open.
    pub fn has_dialog(&self) -> bool {
        self.modal.as_ref().is_some_and(|p| !p.kind.is_blocking())
    }

    /// Open a popup, replacing whatever modal was open.
    pub fn open(&mut self, popup: Popup) {
        self.modal = Some(popup);
        self.modal_scroll = 0;
    }

    /// Close the open dialog. Blocking popups are left in place.
    pub fn close_dialog(&mut self) {
        if self.has_dialog() {
            self.modal = None;
            self.modal_scroll = 0;
        }
    }

    /// Record the modal's text area so scrolling can follow wrapped rows.
    ///
    /// Called on every draw; a resize re-clamps the current offset.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = Some((width, height));
        self.modal_scroll = self.modal_scroll.min(self.max_scroll());
    }

    pub fn scroll_up(&mut self) {
        self.modal_scroll = self.modal_scroll.saturating_sub(1);
    }

    /// Scroll down one row, stopping once the last row is visible.
    pub fn scroll_down(&mut self) {
        self.modal_scroll = (self.modal_scroll + 1).min(self.max_scroll());
    }

    fn max_scroll(&self) -> usize {
        let Some(popup) = &self.modal else {
            return 0;
        };
        match self.viewport {
            Some((width, height)) => wrap_dialog_text(&popup.content, width as usize)
                .len()
                .saturating_sub(height as usize),
            // Not drawn yet: bound by logical lines.
            None => popup.content.lines().count().saturating_sub(1),
        }
    }

    /// Remove persistent error toasts. Returns how many were removed.
    pub fn dismiss_errors(&mut self) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_persistent());
        before - self.toasts.len()
    }

    /// Drop toasts whose TTL has elapsed.
    pub fn prune_expired(&mut self) {
        self.toasts.retain(|t| !t.is_expired());
    }

    fn push_toast(&mut self, toast: Toast) {
        tracing::debug!(level = ?toast.level, id = %toast.id, "Showing toast");
        self.toasts.push(toast);
    }
}

impl Notifier for NotificationCenter {
    fn notify(&mut self, notification: Notification) {
        let Notification { kind, title, body } = notification;
        match kind {
            NotificationKind::Loading => {
                self.open(
                    Popup::builder(PopupType::Loading)
                        .title(title)
                        .content(body)
                        .build(),
                );
            }
            NotificationKind::Success => {
                self.dismiss_loading();
                self.push_toast(Toast::success(title, body));
            }
            NotificationKind::Error => {
                self.dismiss_loading();
                self.push_toast(Toast::error(title, body));
            }
            NotificationKind::Info => {
                self.open(
                    Popup::builder(PopupType::Info)
                        .title(title)
                        .content(body)
                        .build(),
                );
            }
        }
    }

    fn dismiss_loading(&mut self) {
        if self.is_blocking() {
            self.modal = None;
            self.modal_scroll = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toast::ToastLevel;

    #[test]
    fn test_loading_opens_blocking_popup() {
        let mut center = NotificationCenter::new();
        center.show_loading("Loading logs", "Fetching...");

        assert!(center.is_blocking());
        assert!(!center.has_dialog());
        assert_eq!(center.modal().unwrap().title, "Loading logs");
    }

    #[test]
    fn test_success_replaces_loading_with_toast() {
        let mut center = NotificationCenter::new();
        center.show_loading("Loading logs", "Fetching...");
        center.show_success("Logs loaded", "Loaded 3 log records.");

        assert!(center.modal().is_none());
        assert_eq!(center.toasts().len(), 1);
        assert_eq!(center.toasts()[0].level, ToastLevel::Success);
        assert!(!center.toasts()[0].is_persistent());
    }

    #[test]
    fn test_error_replaces_loading_with_persistent_toast() {
        let mut center = NotificationCenter::new();
        center.show_loading("Analyzing", "...");
        center.show_error("Analysis failed", "HTTP error");

        assert!(center.modal().is_none());
        assert!(center.toasts()[0].is_persistent());
        assert_eq!(center.toasts()[0].message, "HTTP error");
    }

    #[test]
    fn test_info_replaces_loading_with_dialog() {
        let mut center = NotificationCenter::new();
        center.show_loading("Analyzing", "...");
        center.show_info("AI Analysis", "Line1\nLine2");

        assert!(center.has_dialog());
        assert_eq!(center.modal().unwrap().kind, PopupType::Info);
        assert_eq!(center.modal().unwrap().content, "Line1\nLine2");
    }

    #[test]
    fn test_close_dialog_leaves_loading_open() {
        let mut center = NotificationCenter::new();
        center.show_loading("Loading logs", "...");
        center.close_dialog();
        assert!(center.is_blocking());

        center.dismiss_loading();
        center.show_info("Details", "x");
        center.close_dialog();
        assert!(center.modal().is_none());
    }

    #[test]
    fn test_dismiss_loading_keeps_dialog() {
        let mut center = NotificationCenter::new();
        center.show_info("Details", "x");
        center.dismiss_loading();
        assert!(center.has_dialog());
    }

    #[test]
    fn test_dismiss_errors_keeps_timed_toasts() {
        let mut center = NotificationCenter::new();
        center.show_error("Failed", "one");
        center.show_success("Done", "two");
        center.show_error("Failed", "three");

        assert_eq!(center.dismiss_errors(), 2);
        assert_eq!(center.toasts().len(), 1);
        assert_eq!(center.toasts()[0].message, "two");
    }

    #[test]
    fn test_scroll_follows_wrapped_rows() {
        let mut center = NotificationCenter::new();
        // One logical line that wraps to 10 rows of 10 characters.
        let body = "123456789 ".repeat(10);
        center.show_info("AI Analysis", body.trim_end());
        center.set_viewport(10, 4);

        for _ in 0..50 {
            center.scroll_down();
        }
        assert_eq!(center.modal_scroll(), 6);
    }

    #[test]
    fn test_resizing_viewport_reclamps_offset() {
        let mut center = NotificationCenter::new();
        center.show_info("Details", "a\nb\nc\nd\ne\nf");
        center.set_viewport(20, 2);
        for _ in 0..10 {
            center.scroll_down();
        }
        assert_eq!(center.modal_scroll(), 4);

        center.set_viewport(20, 5);
        assert_eq!(center.modal_scroll(), 1);
    }

    #[test]
    fn test_scroll_is_bounded_by_content() {
        let mut center = NotificationCenter::new();
        center.show_info("Details", "a\nb\nc");

        for _ in 0..10 {
            center.scroll_down();
        }
        assert_eq!(center.modal_scroll(), 2);

        for _ in 0..10 {
            center.scroll_up();
        }
        assert_eq!(center.modal_scroll(), 0);
    }
}
