//! Cancellable timers that end a session's analysis pause.
//!
//! One pending timer per session, tagged with the attempt it completes.
//! Dropping the timer set aborts every pending task, so nothing fires after
//! the owning view is gone.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug)]
struct PendingTimer {
    attempt: u32,
    handle: JoinHandle<()>,
}

type PendingMap = HashMap<Uuid, PendingTimer>;

fn lock(pending: &Mutex<PendingMap>) -> MutexGuard<'_, PendingMap> {
    // Every critical section leaves the map consistent, so a poisoned lock
    // is still safe to use.
    pending.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Pending analysis completions keyed by session.
#[derive(Debug, Default)]
pub struct AnalysisTimers {
    pending: Arc<Mutex<PendingMap>>,
}

impl AnalysisTimers {
    /// Creates an empty timer set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `on_fire` after `delay`, unless cancelled first. Replaces (and
    /// aborts) any timer already pending for the session.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, session_id: Uuid, attempt: u32, delay: Duration, on_fire: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let pending = Arc::clone(&self.pending);
        let mut timers = lock(&self.pending);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            {
                let mut timers = lock(&pending);
                if timers
                    .get(&session_id)
                    .is_some_and(|timer| timer.attempt == attempt)
                {
                    timers.remove(&session_id);
                }
            }
            debug!(%session_id, attempt, "analysis timer fired");
            on_fire.await;
        });

        if let Some(previous) = timers.insert(session_id, PendingTimer { attempt, handle }) {
            previous.handle.abort();
            debug!(%session_id, attempt = previous.attempt, "replaced pending analysis timer");
        }
    }

    /// Cancels the pending timer for a session. Returns whether one existed.
    pub fn cancel(&self, session_id: Uuid) -> bool {
        let removed = lock(&self.pending).remove(&session_id);
        if let Some(timer) = &removed {
            timer.handle.abort();
            debug!(%session_id, attempt = timer.attempt, "cancelled analysis timer");
        }
        removed.is_some()
    }

    /// Aborts every pending timer.
    pub fn cancel_all(&self) {
        for (_, timer) in lock(&self.pending).drain() {
            timer.handle.abort();
        }
    }

    /// The attempt a session's pending timer will complete, if any.
    #[must_use]
    pub fn pending_attempt(&self, session_id: Uuid) -> Option<u32> {
        lock(&self.pending).get(&session_id).map(|timer| timer.attempt)
    }

    /// Number of timers still waiting.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        lock(&self.pending).len()
    }
}

impl Drop for AnalysisTimers {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
