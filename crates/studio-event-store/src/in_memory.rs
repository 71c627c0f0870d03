//! In-memory implementation of the `EventRepository` trait.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use studio_core::error::DomainError;
use studio_core::repository::{EventRepository, StoredEvent};

/// Event repository backed by a map of per-aggregate streams.
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    streams: RwLock<HashMap<Uuid, Vec<StoredEvent>>>,
}

impl InMemoryEventRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live streams.
    pub fn stream_count(&self) -> usize {
        self.streams.read().map_or(0, |streams| streams.len())
    }
}

fn poisoned<T>(_: PoisonError<T>) -> DomainError {
    DomainError::Infrastructure("event store lock poisoned".to_owned())
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn load_events(&self, aggregate_id: Uuid) -> Result<Vec<StoredEvent>, DomainError> {
        let streams = self.streams.read().map_err(poisoned)?;
        Ok(streams.get(&aggregate_id).cloned().unwrap_or_default())
    }

    async fn append_events(
        &self,
        aggregate_id: Uuid,
        expected_version: i64,
        events: &[StoredEvent],
    ) -> Result<(), DomainError> {
        if events.is_empty() {
            return Ok(());
        }

        let mut streams = self.streams.write().map_err(poisoned)?;
        let actual = streams
            .get(&aggregate_id)
            .and_then(|stream| stream.last())
            .map_or(0, |e| e.sequence_number);
        if actual != expected_version {
            return Err(DomainError::ConcurrencyConflict {
                aggregate_id,
                expected: expected_version,
                actual,
            });
        }

        let mut next = expected_version + 1;
        for event in events {
            if event.aggregate_id != aggregate_id || event.sequence_number != next {
                return Err(DomainError::Infrastructure(format!(
                    "event {} of stream {aggregate_id} is #{}, expected #{next}",
                    event.event_id, event.sequence_number
                )));
            }
            next += 1;
        }

        streams
            .entry(aggregate_id)
            .or_default()
            .extend_from_slice(events);
        debug!(%aggregate_id, appended = events.len(), version = next - 1, "appended events");
        Ok(())
    }

    async fn discard_stream(&self, aggregate_id: Uuid) -> Result<(), DomainError> {
        let mut streams = self.streams.write().map_err(poisoned)?;
        if let Some(stream) = streams.remove(&aggregate_id) {
            debug!(%aggregate_id, events = stream.len(), "discarded stream");
        }
        Ok(())
    }
}
