//! Enter-key debouncing for presentation layers.
//!
//! The headless CLI submits once per invocation and never needs it. A UI
//! front end wraps its Enter handler in a [`Debounce`] so a burst of key
//! presses turns into one `submit`.

use std::{
    future::Future,
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};
use tokio::task::AbortHandle;

/// Delay applied to Enter-key submissions.
pub const ENTER_DEBOUNCE: Duration = Duration::from_millis(250);

/// Trailing-edge debouncer: each call replaces the pending one, and only the
/// last call in a burst runs, `delay` after it was made.
#[derive(Clone, Debug)]
pub struct Debounce {
    delay: Duration,
    pending: Arc<Mutex<Option<AbortHandle>>>,
}

impl Debounce {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Schedules `task`, dropping any call still waiting out its delay. A
    /// task that has already started runs to completion.
    /// Must be called from within a tokio runtime.
    pub fn call<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Detached so a later call can no longer abort it.
            tokio::spawn(task);
        })
        .abort_handle();
        *pending = Some(handle);
    }

    /// Drops the pending call, if it has not started yet.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(ENTER_DEBOUNCE)
    }
}
