//! Deferred completions for the simulated authentication round-trip.
//!
//! Each completion is a tokio timer task. When the timer fires, the task
//! reports its [`CompletionId`] through a channel that the engine drains on
//! its own tick, so completion side effects always run on the event loop.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use gatekeep_types::CompletionId;

/// A single-shot completion that has been scheduled and may still be pending.
///
/// Dropping the handle does not cancel the timer; call [`Self::cancel`].
#[derive(Debug)]
pub struct ScheduledCompletion {
    id: CompletionId,
    handle: JoinHandle<()>,
}

impl ScheduledCompletion {
    #[must_use]
    pub fn id(&self) -> CompletionId {
        self.id
    }

    /// Abort the timer. A completion that already fired is unaffected.
    pub fn cancel(self) {
        debug!(completion = %self.id, "Completion cancelled");
        self.handle.abort();
    }
}

#[derive(Debug)]
pub struct CompletionScheduler {
    tx: mpsc::UnboundedSender<CompletionId>,
    rx: mpsc::UnboundedReceiver<CompletionId>,
    next_id: CompletionId,
}

impl CompletionScheduler {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            next_id: CompletionId::new(1),
        }
    }

    /// Schedule a completion to fire after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, delay: Duration) -> ScheduledCompletion {
        let id = self.next_id;
        self.next_id = id.next();

        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver lives as long as the scheduler; a closed channel means
            // the engine is gone and nobody cares about this completion.
            let _ = tx.send(id);
        });

        ScheduledCompletion { id, handle }
    }

    /// Completions whose timers have fired since the last drain, oldest first.
    pub fn drain_fired(&mut self) -> Vec<CompletionId> {
        let mut fired = Vec::new();
        while let Ok(id) = self.rx.try_recv() {
            fired.push(id);
        }
        fired
    }
}

impl Default for CompletionScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::CompletionScheduler;

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let mut scheduler = CompletionScheduler::new();
        let completion = scheduler.schedule(Duration::from_millis(5000));

        tokio::time::sleep(Duration::from_millis(4999)).await;
        assert!(scheduler.drain_fired().is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(scheduler.drain_fired(), vec![completion.id()]);
        assert!(scheduler.drain_fired().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_completion_never_fires() {
        let mut scheduler = CompletionScheduler::new();
        let completion = scheduler.schedule(Duration::from_millis(100));
        completion.cancel();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(scheduler.drain_fired().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn ids_are_unique_and_fire_in_deadline_order() {
        let mut scheduler = CompletionScheduler::new();
        let late = scheduler.schedule(Duration::from_millis(300));
        let early = scheduler.schedule(Duration::from_millis(100));
        assert_ne!(late.id(), early.id());

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(scheduler.drain_fired(), vec![early.id(), late.id()]);
    }
}
