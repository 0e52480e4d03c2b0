//! Cancellable delayed tasks.
//!
//! [`Debouncer`] keeps at most one pending task. Scheduling a new one aborts
//! the previous task if it has not fired yet, so a superseded task never runs.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Runs the most recently scheduled task after a settle delay.
///
/// Outside a tokio runtime there is nothing to wait on, so tasks run as soon
/// as they are scheduled.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer with the given settle delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Settle delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `task` once the delay elapses, replacing any pending task.
    pub fn schedule<F>(&mut self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let Ok(runtime) = Handle::try_current() else {
            log::debug!("No runtime for delayed task, running it now");
            task();
            return;
        };
        let delay = self.delay;
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        }));
    }

    /// Abort the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                log::debug!("Cancelling superseded task");
            }
            handle.abort();
        }
    }

    /// Whether a task is scheduled and has not run yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
