//! Centralized constants for the log viewer workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default backend base URL (the development server address).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Backend Endpoints
// =============================================================================

/// Path of the log listing endpoint. The trailing slash is part of the route.
pub const LOGS_PATH: &str = "/api/logs/";

/// Path of the AI analysis endpoint.
pub const ANALYZE_PATH: &str = "/api/ai/analyze";

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval for animations in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Default directory for the rolling log file.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// File name prefix for the rolling log file.
pub const LOG_FILE_NAME: &str = "logview.log";

/// Rows moved by PageUp/PageDown in the log table.
pub const PAGE_SIZE: usize = 10;

// =============================================================================
// Notification Defaults
// =============================================================================

/// Lifetime of a success toast in milliseconds.
pub const SUCCESS_TOAST_TTL_MS: u64 = 1500;

/// Maximum number of toasts kept on screen at once.
pub const MAX_VISIBLE_TOASTS: usize = 4;

/// Width of a toast in terminal columns.
pub const TOAST_WIDTH: u16 = 48;

/// Default popup width as a percentage of the terminal width.
pub const POPUP_WIDTH_PERCENT: u16 = 60;

/// Default popup height as a percentage of the terminal height.
pub const POPUP_HEIGHT_PERCENT: u16 = 50;

/// Popup size used for the analysis result and record details dialogs.
pub const LARGE_POPUP_PERCENT: u16 = 80;

/// Placeholder rendered for absent or empty optional columns.
pub const NOT_AVAILABLE: &str = "N/A";
