//! First-success race across concurrent probes.

use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run every probe on its own task and return the first non-empty label.
///
/// Returns `None` once the deadline passes, or earlier if every probe has
/// finished without a label. Probes still running at that point are left
/// detached; whatever they produce afterwards is dropped.
pub async fn race_first<F>(probes: Vec<F>, deadline: Duration) -> Option<String>
where
    F: Future<Output = Option<String>> + Send + 'static,
{
    if probes.is_empty() {
        return None;
    }

    // One slot per probe so a send never waits on the receiver.
    let (tx, mut rx) = mpsc::channel(probes.len());
    for probe in probes {
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Some(label) = probe.await.filter(|label| !label.is_empty()) {
                let _ = tx.try_send(label);
            }
        });
    }
    drop(tx);

    match tokio::time::timeout(deadline, rx.recv()).await {
        Ok(winner) => winner,
        Err(_) => {
            tracing::debug!(deadline_ms = %deadline.as_millis(), "Region race deadline reached");
            None
        }
    }
}
