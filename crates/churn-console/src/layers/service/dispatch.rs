use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::backend::PredictionBackend;
use super::events::UiEvent;
use crate::layers::form::Submission;

/// Runs one submission and reports its settlement to the UI loop.
///
/// The task exits without reporting once `shutdown` is cancelled, so a torn
/// down UI never receives a late update.
pub(crate) fn spawn_submission(
    submission: Submission,
    backend: Arc<dyn PredictionBackend>,
    events: mpsc::Sender<UiEvent>,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let Submission { seq, request } = submission;
        let outcome = tokio::select! {
            _ = shutdown.cancelled() => {
                tracing::debug!(seq, "submission abandoned on shutdown");
                return;
            }
            outcome = backend.predict(&request) => outcome,
        };
        if events.send(UiEvent::Settled { seq, outcome }).await.is_err() {
            tracing::debug!(seq, "ui closed before settlement");
        }
    })
}

pub(crate) fn spawn_health_probe(
    backend: Arc<dyn PredictionBackend>,
    events: mpsc::Sender<UiEvent>,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let status = tokio::select! {
            _ = shutdown.cancelled() => return,
            status = backend.health() => status,
        };
        match &status {
            Ok(health) => tracing::info!(message = %health.message, "backend reachable"),
            Err(err) => tracing::warn!(error = %err, "backend health probe failed"),
        }
        if events.send(UiEvent::Health(status)).await.is_err() {
            tracing::debug!("ui closed before health report");
        }
    })
}
