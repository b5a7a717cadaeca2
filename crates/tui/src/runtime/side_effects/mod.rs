//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Run the network calls behind accepted `LoadLogs` and `RunAnalysis`
//!   requests as tracked background tasks.
//! - Send results back via the action channel for state updates.
//!
//! Does NOT handle:
//! - Deciding whether a request is allowed (see `App::update`).
//! - UI rendering or terminal management.
//!
//! Invariants:
//! - Every task is spawned on the session `TaskTracker`.
//! - Every task races its request against the session `CancellationToken`.
//! - Results go through `deliver`, which checks the token again, so a request
//!   that completes after cancellation is dropped instead of sent.

mod analysis;
mod dispatcher;
mod logs;

use logview_client::LogViewerClient;
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

use crate::action::Action;

pub use dispatcher::handle_side_effects;
pub use tokio_util::sync::CancellationToken;
pub use tokio_util::task::TaskTracker;

/// Client shared by all side-effect tasks.
pub type SharedClient = Arc<LogViewerClient>;

/// Send a result action unless the session has been cancelled.
///
/// Returns `true` if the action reached the channel. A send that is waiting
/// on a full channel gives up as soon as the token is cancelled.
pub(crate) async fn deliver(
    tx: &Sender<Action>,
    cancel: &CancellationToken,
    action: Action,
) -> bool {
    if cancel.is_cancelled() {
        return false;
    }
    tokio::select! {
        biased;
        _ = cancel.cancelled() => false,
        sent = tx.send(action) => sent.is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_deliver_sends_while_session_active() {
        let (tx, mut rx) = mpsc::channel(1);
        let cancel = CancellationToken::new();

        assert!(deliver(&tx, &cancel, Action::AnalysisFinished(Ok("done".into()))).await);
        assert!(matches!(rx.try_recv(), Ok(Action::AnalysisFinished(Ok(_)))));
    }

    #[tokio::test]
    async fn test_deliver_drops_result_finished_after_cancel() {
        let (tx, mut rx) = mpsc::channel(1);
        let cancel = CancellationToken::new();
        cancel.cancel();

        assert!(!deliver(&tx, &cancel, Action::LogsLoaded(Ok(Vec::new()))).await);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_deliver_gives_up_on_full_channel_when_cancelled() {
        let (tx, _rx) = mpsc::channel(1);
        let cancel = CancellationToken::new();
        tx.send(Action::Tick).await.unwrap();

        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let sent = tokio::time::timeout(
            Duration::from_secs(1),
            deliver(&tx, &cancel, Action::LogsLoaded(Ok(Vec::new()))),
        )
        .await
        .expect("deliver should return once cancelled");
        assert!(!sent);
    }

    #[tokio::test]
    async fn test_deliver_reports_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let cancel = CancellationToken::new();

        assert!(!deliver(&tx, &cancel, Action::Tick).await);
    }
}
