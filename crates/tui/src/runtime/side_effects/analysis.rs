//! AI analysis side effect handler.

use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use crate::action::Action;
use crate::runtime::side_effects::{CancellationToken, SharedClient, TaskTracker, deliver};

/// Spawn a single analysis request.
pub(super) fn handle_run_analysis(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: &TaskTracker,
    cancel: CancellationToken,
) {
    task_tracker.spawn(async move {
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Analysis cancelled, dropping request");
                return;
            }
            result = client.analyze_logs() => result,
        };

        let action = Action::AnalysisFinished(result.map_err(Arc::new));
        if !deliver(&tx, &cancel, action).await {
            tracing::debug!("Analysis result dropped: session cancelled or channel closed");
        }
    });
}
