//! Side effect dispatcher.
//!
//! Routes request actions to their handlers inside a tracing span that
//! records the action type and dispatch duration.

use std::time::Instant;
use tokio::sync::mpsc::Sender;
use tracing::{Instrument, info_span};

use crate::action::Action;
use crate::runtime::side_effects::{
    CancellationToken, SharedClient, TaskTracker, analysis, logs,
};

/// Handle side effects (async API calls) for actions.
///
/// Only `LoadLogs` and `RunAnalysis` start work; every other action is
/// ignored here.
///
/// # Arguments
///
/// * `action` - The action to handle
/// * `client` - The shared backend client
/// * `tx` - The action channel sender for sending results
/// * `task_tracker` - Tracker the spawned tasks are registered on
/// * `cancel` - Session token; cancelling it abandons in-flight requests
pub async fn handle_side_effects(
    action: Action,
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
    cancel: CancellationToken,
) {
    let action_name = action_type_name(&action);
    let start = Instant::now();

    let span = info_span!(
        "tui.handle_action",
        action_type = action_name,
        duration_ms = tracing::field::Empty,
    );

    async move {
        match action {
            Action::LoadLogs => {
                logs::handle_load_logs(client, tx, &task_tracker, cancel);
            }
            Action::RunAnalysis => {
                analysis::handle_run_analysis(client, tx, &task_tracker, cancel);
            }
            _ => {}
        }

        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}

/// Get a safe action name for tracing (no payloads).
fn action_type_name(action: &Action) -> &'static str {
    match action {
        Action::Input(_) => "Input",
        Action::Resize(..) => "Resize",
        Action::Tick => "Tick",
        Action::Quit => "Quit",
        Action::LoadLogs => "LoadLogs",
        Action::LogsLoaded(_) => "LogsLoaded",
        Action::RunAnalysis => "RunAnalysis",
        Action::AnalysisFinished(_) => "AnalysisFinished",
        Action::NavigateUp => "NavigateUp",
        Action::NavigateDown => "NavigateDown",
        Action::PageUp => "PageUp",
        Action::PageDown => "PageDown",
        Action::GoToTop => "GoToTop",
        Action::GoToBottom => "GoToBottom",
        Action::ShowRecordDetails => "ShowRecordDetails",
        Action::OpenHelp => "OpenHelp",
        Action::CloseDialog => "CloseDialog",
        Action::DialogScrollUp => "DialogScrollUp",
        Action::DialogScrollDown => "DialogScrollDown",
        Action::DismissErrors => "DismissErrors",
    }
}
