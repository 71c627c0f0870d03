//! Mock `EventRepository` implementations for tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use studio_core::error::DomainError;
use studio_core::repository::{EventRepository, StoredEvent};
use uuid::Uuid;

/// An event repository that replays a fixed stream from every `load_events`
/// call and records every append and discard.
#[derive(Debug)]
pub struct RecordingEventRepository {
    load_result: Vec<StoredEvent>,
    appended: Mutex<Vec<(Uuid, i64, Vec<StoredEvent>)>>,
    discarded: Mutex<Vec<Uuid>>,
}

impl RecordingEventRepository {
    /// Create a repository that returns `load_result` from every load.
    #[must_use]
    pub fn new(load_result: Vec<StoredEvent>) -> Self {
        Self {
            load_result,
            appended: Mutex::new(Vec::new()),
            discarded: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of every `(aggregate_id, expected_version, events)`
    /// append.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn appended_events(&self) -> Vec<(Uuid, i64, Vec<StoredEvent>)> {
        self.appended.lock().unwrap().clone()
    }

    /// Returns the ids passed to `discard_stream`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn discarded_streams(&self) -> Vec<Uuid> {
        self.discarded.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventRepository for RecordingEventRepository {
    async fn load_events(&self, _aggregate_id: Uuid) -> Result<Vec<StoredEvent>, DomainError> {
        Ok(self.load_result.clone())
    }

    async fn append_events(
        &self,
        aggregate_id: Uuid,
        expected_version: i64,
        events: &[StoredEvent],
    ) -> Result<(), DomainError> {
        self.appended
            .lock()
            .unwrap()
            .push((aggregate_id, expected_version, events.to_vec()));
        Ok(())
    }

    async fn discard_stream(&self, aggregate_id: Uuid) -> Result<(), DomainError> {
        self.discarded.lock().unwrap().push(aggregate_id);
        Ok(())
    }
}

/// An event repository with no streams that silently accepts writes.
/// Useful for "aggregate not found" scenarios and creation commands.
#[derive(Debug)]
pub struct EmptyEventRepository;

#[async_trait]
impl EventRepository for EmptyEventRepository {
    async fn load_events(&self, _aggregate_id: Uuid) -> Result<Vec<StoredEvent>, DomainError> {
        Ok(vec![])
    }

    async fn append_events(
        &self,
        _aggregate_id: Uuid,
        _expected_version: i64,
        _events: &[StoredEvent],
    ) -> Result<(), DomainError> {
        Ok(())
    }

    async fn discard_stream(&self, _aggregate_id: Uuid) -> Result<(), DomainError> {
        Ok(())
    }
}

/// An event repository whose every call fails with an infrastructure error.
#[derive(Debug)]
pub struct FailingEventRepository;

#[async_trait]
impl EventRepository for FailingEventRepository {
    async fn load_events(&self, _aggregate_id: Uuid) -> Result<Vec<StoredEvent>, DomainError> {
        Err(DomainError::Infrastructure("session store unavailable".into()))
    }

    async fn append_events(
        &self,
        _aggregate_id: Uuid,
        _expected_version: i64,
        _events: &[StoredEvent],
    ) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("session store unavailable".into()))
    }

    async fn discard_stream(&self, _aggregate_id: Uuid) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("session store unavailable".into()))
    }
}

/// Wraps a working repository and makes the next `n` appends lose a race:
/// they fail with `DomainError::ConcurrencyConflict` and write nothing.
#[derive(Debug)]
pub struct ConflictingEventRepository<R> {
    inner: R,
    conflicts_left: AtomicU32,
    refused: AtomicU32,
}

impl<R: EventRepository> ConflictingEventRepository<R> {
    /// Wraps `inner` with no conflicts armed.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            conflicts_left: AtomicU32::new(0),
            refused: AtomicU32::new(0),
        }
    }

    /// Makes the next `n` appends fail.
    pub fn conflict_next(&self, n: u32) {
        self.conflicts_left.store(n, Ordering::SeqCst);
    }

    /// Number of appends refused so far.
    pub fn refused_appends(&self) -> u32 {
        self.refused.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<R: EventRepository> EventRepository for ConflictingEventRepository<R> {
    async fn load_events(&self, aggregate_id: Uuid) -> Result<Vec<StoredEvent>, DomainError> {
        self.inner.load_events(aggregate_id).await
    }

    async fn append_events(
        &self,
        aggregate_id: Uuid,
        expected_version: i64,
        events: &[StoredEvent],
    ) -> Result<(), DomainError> {
        let armed = self
            .conflicts_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if armed {
            self.refused.fetch_add(1, Ordering::SeqCst);
            return Err(DomainError::ConcurrencyConflict {
                aggregate_id,
                expected: expected_version,
                actual: expected_version + 1,
            });
        }
        self.inner
            .append_events(aggregate_id, expected_version, events)
            .await
    }

    async fn discard_stream(&self, aggregate_id: Uuid) -> Result<(), DomainError> {
        self.inner.discard_stream(aggregate_id).await
    }
}
