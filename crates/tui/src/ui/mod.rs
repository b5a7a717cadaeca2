//! UI components for the TUI.
//!
//! This module contains the notification surface, popups, toasts, the log
//! table screen, shared widgets and theme helpers.

pub mod notify;
pub mod popup;
pub mod screens;
pub mod theme;
pub mod toast;
pub mod widgets;

pub use notify::{Notification, NotificationCenter, NotificationKind, Notifier};
pub use toast::{Toast, ToastLevel};
