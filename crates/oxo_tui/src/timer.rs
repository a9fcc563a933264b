//! Cancellable delayed events.
//!
//! The auto-reset after a finished game may be superseded by a manual
//! restart or a newer schedule. Firings carry a generation tag; anything
//! stale is dropped instead of resetting a game that has already moved on.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

/// A delayed event delivered back to the UI loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    /// Generation the timer belonged to when scheduled.
    pub generation: u64,
}

/// Schedules at most one pending delayed event at a time.
pub struct ResetTimer {
    tx: UnboundedSender<TimerFired>,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl ResetTimer {
    /// Creates a timer that delivers events through `tx`.
    pub fn new(tx: UnboundedSender<TimerFired>) -> Self {
        Self {
            tx,
            generation: 0,
            pending: None,
        }
    }

    /// Schedules a firing after `delay`, superseding any pending one.
    pub fn schedule(&mut self, delay: Duration) {
        self.cancel();
        let generation = self.generation;
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(TimerFired { generation });
        }));
        debug!(generation, ?delay, "scheduled reset timer");
    }

    /// Cancels the pending firing and invalidates any event it already
    /// sent.
    ///
    /// Aborting the task is not enough on its own: the event may sit in
    /// the channel already, so the generation is bumped as well.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Checks whether `fired` matches the most recent schedule.
    pub fn is_current(&self, fired: TimerFired) -> bool {
        fired.generation == self.generation
    }
}

impl Drop for ResetTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
