//! One-shot log loading state machine.
//!
//! Responsibilities:
//! - Track `NotStarted → Pending → Loaded | Failed`.
//! - Report each transition through a `Notifier`.
//!
//! Does NOT handle:
//! - Issuing the HTTP request (see `crate::runtime::side_effects::logs`).
//!
//! Invariants:
//! - `begin` succeeds at most once per loader; there is no retry or refetch.
//! - The loading notification is shown by `begin`, never by rendering.
//! - A result is applied only while `Pending`.

use logview_client::{ClientError, LogRecord};
use std::sync::Arc;

use crate::ui::notify::Notifier;

/// Lifecycle of the log collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    /// The fetch has not been issued yet.
    #[default]
    NotStarted,
    /// The fetch is in flight.
    Pending,
    /// The fetch succeeded; records are in backend order.
    Loaded(Vec<LogRecord>),
    /// The fetch failed; holds the failure message.
    Failed(String),
}

/// Owns the log collection and its load state.
#[derive(Debug, Default)]
pub struct LogLoader {
    state: LoadState,
}

impl LogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Loaded records, or `None` unless the state is `Loaded`.
    pub fn records(&self) -> Option<&[LogRecord]> {
        match &self.state {
            LoadState::Loaded(records) => Some(records),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, LoadState::Loaded(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, LoadState::Pending)
    }

    /// Accept the load request if it has never been issued.
    ///
    /// Returns `true` when the caller should start the fetch.
    pub fn begin(&mut self, notifier: &mut impl Notifier) -> bool {
        if self.state != LoadState::NotStarted {
            tracing::debug!(state = self.state_name(), "Ignoring repeated log load request");
            return false;
        }

        self.state = LoadState::Pending;
        notifier.show_loading("Loading logs", "Fetching log records from the backend...");
        true
    }

    /// Apply the fetch result.
    pub fn finish(
        &mut self,
        result: Result<Vec<LogRecord>, Arc<ClientError>>,
        notifier: &mut impl Notifier,
    ) {
        if !self.is_pending() {
            tracing::warn!(state = self.state_name(), "Discarding log load result outside Pending");
            return;
        }

        match result {
            Ok(records) => {
                tracing::info!(count = records.len(), "Log records loaded");
                notifier.show_success("Logs loaded", &loaded_message(records.len()));
                self.state = LoadState::Loaded(records);
            }
            Err(e) => {
                let message = e.to_string();
                tracing::error!(error = %message, "Failed to load log records");
                notifier.show_error("Failed to load logs", &message);
                self.state = LoadState::Failed(message);
            }
        }
    }

    fn state_name(&self) -> &'static str {
        match self.state {
            LoadState::NotStarted => "NotStarted",
            LoadState::Pending => "Pending",
            LoadState::Loaded(_) => "Loaded",
            LoadState::Failed(_) => "Failed",
        }
    }
}

fn loaded_message(count: usize) -> String {
    if count == 1 {
        "Loaded 1 log record.".to_string()
    } else {
        format!("Loaded {count} log records.")
    }
}
