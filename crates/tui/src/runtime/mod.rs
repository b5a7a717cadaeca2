//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Client creation
//! - Configuration loading
//! - Async side effect handlers for API calls
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `logview_tui::app` and `logview_tui::ui`).
//! - HTTP details (see `logview_client`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.
//! - Side effects run in separate tokio tasks to avoid blocking the UI.

pub mod client;
pub mod config;
pub mod side_effects;
pub mod terminal;
