//! AI analysis request state machine.
//!
//! Responsibilities:
//! - Guard the analysis request so at most one is in flight.
//! - Report start, result and failure through a `Notifier`.
//!
//! Invariants:
//! - `try_start` is a no-op while `Running` or before logs are loaded.
//! - `finish` always leaves the runner `Idle`.
//! - The previous result is discarded when a new run starts.

use logview_client::ClientError;
use std::sync::Arc;

use crate::ui::notify::Notifier;

/// Whether an analysis request is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalysisState {
    #[default]
    Idle,
    Running,
}

/// Drives the analysis request lifecycle.
#[derive(Debug, Default)]
pub struct AnalysisRunner {
    state: AnalysisState,
    last_result: Option<String>,
}

impl AnalysisRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AnalysisState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnalysisState::Running
    }

    /// The text of the most recent successful analysis.
    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    /// Whether a new analysis may start.
    pub fn is_enabled(&self, logs_loaded: bool) -> bool {
        logs_loaded && !self.is_running()
    }

    /// Start an analysis if allowed.
    ///
    /// Returns `true` when the caller should issue the request.
    pub fn try_start(&mut self, logs_loaded: bool, notifier: &mut impl Notifier) -> bool {
        if self.is_running() {
            tracing::debug!("Analysis already running, ignoring request");
            return false;
        }
        if !logs_loaded {
            tracing::debug!("Logs not loaded, analysis unavailable");
            return false;
        }

        self.last_result = None;
        self.state = AnalysisState::Running;
        notifier.show_loading("Analyzing logs", "Waiting for the AI summary...");
        true
    }

    /// Apply the analysis result and return to `Idle`.
    pub fn finish(&mut self, result: Result<String, Arc<ClientError>>, notifier: &mut impl Notifier) {
        if !self.is_running() {
            tracing::warn!("Discarding analysis result with no request in flight");
            return;
        }

        match result {
            Ok(text) => {
                tracing::info!(chars = text.chars().count(), "Analysis finished");
                notifier.show_info("AI Analysis", &text);
                self.last_result = Some(text);
            }
            Err(e) => {
                let message = e.to_string();
                tracing::error!(error = %message, "Analysis failed");
                notifier.show_error("Analysis failed", &message);
            }
        }
        self.state = AnalysisState::Idle;
    }
}
