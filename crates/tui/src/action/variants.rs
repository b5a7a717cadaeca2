//! Action enum definition.

use crossterm::event::KeyEvent;
use logview_client::{ClientError, LogRecord};
use std::sync::Arc;

/// Everything that can happen to the application.
#[derive(Debug, Clone)]
pub enum Action {
    // Terminal events
    /// A key press from the terminal
    Input(KeyEvent),
    /// Terminal resized to (width, height)
    Resize(u16, u16),
    /// Periodic UI tick (spinner frames, toast expiry)
    Tick,
    /// Exit the application
    Quit,

    // Log loading
    /// Request the one-shot log fetch
    LoadLogs,
    /// Result of the log fetch
    LogsLoaded(Result<Vec<LogRecord>, Arc<ClientError>>),

    // Analysis
    /// Request an AI analysis of the stored logs
    RunAnalysis,
    /// Result of the analysis request
    AnalysisFinished(Result<String, Arc<ClientError>>),

    // Table navigation
    NavigateUp,
    NavigateDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,

    // Dialogs and notifications
    /// Open the detail dialog for the selected record
    ShowRecordDetails,
    /// Open the key binding help
    OpenHelp,
    /// Close the open dialog
    CloseDialog,
    /// Scroll the open dialog up one line
    DialogScrollUp,
    /// Scroll the open dialog down one line
    DialogScrollDown,
    /// Dismiss persistent error toasts
    DismissErrors,
}
