//! Log loading side effect handler.
//!
//! Does NOT handle:
//! - Direct state modification (sends `LogsLoaded` for that).

use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use crate::action::Action;
use crate::runtime::side_effects::{CancellationToken, SharedClient, TaskTracker, deliver};

/// Spawn the one-shot log fetch.
pub(super) fn handle_load_logs(
    client: SharedClient,
    tx: Sender<Action>,
    task_tracker: &TaskTracker,
    cancel: CancellationToken,
) {
    task_tracker.spawn(async move {
        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Log load cancelled, dropping request");
                return;
            }
            result = client.list_logs() => result,
        };

        let action = Action::LogsLoaded(result.map_err(Arc::new));
        if !deliver(&tx, &cancel, action).await {
            tracing::debug!("Log load result dropped: session cancelled or channel closed");
        }
    });
}
