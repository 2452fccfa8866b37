use std::collections::HashMap;
use std::time::Duration;

use glimpsy_core::{Scheduler, TimerError, TimerKind, TimerToken};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Create a tokio-backed scheduler and the stream its fired tokens arrive on.
#[must_use]
pub fn timer_channel() -> (TokioScheduler, TimerEvents) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        TokioScheduler {
            tx,
            pending: HashMap::new(),
        },
        TimerEvents { rx },
    )
}

/// One-shot timers on the ambient tokio runtime, at most one per `TimerKind`.
#[derive(Debug)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<TimerToken>,
    pending: HashMap<TimerKind, JoinHandle<()>>,
}

impl TokioScheduler {
    #[must_use]
    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending
            .get(&kind)
            .is_some_and(|task| !task.is_finished())
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, token: TimerToken, delay: Duration) -> Result<(), TimerError> {
        let runtime = Handle::try_current().map_err(|_| TimerError::NoRuntime(token.kind))?;
        self.cancel(token.kind);

        let tx = self.tx.clone();
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(token).is_err() {
                tracing::debug!(kind = %token.kind, "timer fired after its receiver closed");
            }
        });
        self.pending.insert(token.kind, task);
        Ok(())
    }

    fn cancel(&mut self, kind: TimerKind) {
        if let Some(task) = self.pending.remove(&kind) {
            task.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.pending.drain() {
            task.abort();
        }
    }
}

/// Receiving end for fired timer tokens.
#[derive(Debug)]
pub struct TimerEvents {
    rx: mpsc::UnboundedReceiver<TimerToken>,
}

impl TimerEvents {
    /// Wait for the next fired timer. `None` once the scheduler is gone.
    pub async fn next(&mut self) -> Option<TimerToken> {
        self.rx.recv().await
    }

    pub fn try_next(&mut self) -> Option<TimerToken> {
        self.rx.try_recv().ok()
    }
}
