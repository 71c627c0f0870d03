//! Aggregate root abstraction.

use uuid::Uuid;

use crate::event::DomainEvent;

/// Trait for state containers that are rebuilt from their event stream.
///
/// Aggregates in this workspace apply every raised event immediately, so
/// `version` always counts the events the in-memory state reflects,
/// committed or not. Callers that persist must capture the version before
/// issuing a command and use it as the concurrency guard.
pub trait AggregateRoot: Send + Sync {
    /// The event type this aggregate raises and consumes.
    type Event: DomainEvent;

    /// Returns the aggregate identifier.
    fn aggregate_id(&self) -> Uuid;

    /// Returns the number of events applied so far.
    fn version(&self) -> i64;

    /// Mutates internal state from one event. Must not fail: anything that
    /// can be rejected is rejected before the event is raised.
    fn apply(&mut self, event: &Self::Event);

    /// Returns events raised since the last persistence.
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Clears uncommitted events after persistence.
    fn clear_uncommitted_events(&mut self);
}
