//! Command handlers for quote builders.

use studio_core::aggregate::AggregateRoot;
use studio_core::clock::Clock;
use studio_core::error::DomainError;
use studio_core::repository::{EventRepository, StoredEvent};
use tracing::debug;
use uuid::Uuid;

use crate::domain::aggregates::QuoteBuilder;
use crate::domain::commands::{
    AddService, OpenQuote, RemoveService, ResetQuote, ToggleAddOn, UpdateEventDetails,
    UpdateServiceOption,
};
use crate::domain::events::{QuoteEvent, QuoteEventKind};

/// Result of a handled command.
#[derive(Debug)]
pub struct QuoteCommandResult {
    /// The quote affected by the command.
    pub aggregate_id: Uuid,
    /// Whether the command raised an event.
    pub changed: bool,
    /// The events persisted; empty when nothing changed.
    pub stored_events: Vec<StoredEvent>,
}

/// Rebuilds a quote from its stream.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` for an empty stream and
/// `DomainError::Infrastructure` if an event cannot be decoded.
pub(crate) fn reconstitute(
    quote_id: Uuid,
    existing_events: &[StoredEvent],
) -> Result<QuoteBuilder, DomainError> {
    if existing_events.is_empty() {
        return Err(DomainError::AggregateNotFound(quote_id));
    }
    let mut builder = QuoteBuilder::new(quote_id);
    for stored in existing_events {
        let kind: QuoteEventKind = stored.decode()?;
        builder.apply(&QuoteEvent {
            metadata: stored.metadata(),
            kind,
        });
    }
    Ok(builder)
}

fn drain(builder: &mut QuoteBuilder) -> Vec<StoredEvent> {
    let stored = builder
        .uncommitted_events()
        .iter()
        .map(StoredEvent::from_domain)
        .collect();
    builder.clear_uncommitted_events();
    stored
}

async fn execute<F>(
    quote_id: Uuid,
    repo: &dyn EventRepository,
    command: F,
) -> Result<QuoteCommandResult, DomainError>
where
    F: FnOnce(&mut QuoteBuilder) -> bool + Send,
{
    let existing_events = repo.load_events(quote_id).await?;
    let mut builder = reconstitute(quote_id, &existing_events)?;
    let expected_version = builder.version();

    let changed = command(&mut builder);

    let stored_events = drain(&mut builder);
    if !stored_events.is_empty() {
        repo.append_events(quote_id, expected_version, &stored_events)
            .await?;
    }
    debug!(%quote_id, changed, "quote command handled");

    Ok(QuoteCommandResult {
        aggregate_id: quote_id,
        changed,
        stored_events,
    })
}

/// Handles `OpenQuote`.
///
/// # Errors
///
/// Returns `DomainError::ConcurrencyConflict` if the quote id is already in
/// use.
pub async fn handle_open_quote(
    command: &OpenQuote,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<QuoteCommandResult, DomainError> {
    let mut builder = QuoteBuilder::new(command.quote_id);
    let changed = builder.open(command.correlation_id, clock);
    let stored_events = drain(&mut builder);

    repo.append_events(command.quote_id, 0, &stored_events)
        .await?;

    Ok(QuoteCommandResult {
        aggregate_id: command.quote_id,
        changed,
        stored_events,
    })
}

/// Handles `AddService`.
///
/// # Errors
///
/// Returns `DomainError` if loading or appending fails.
pub async fn handle_add_service(
    command: &AddService,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<QuoteCommandResult, DomainError> {
    execute(command.quote_id, repo, |builder| {
        builder.add_service(
            command.instance_id,
            command.service,
            command.correlation_id,
            clock,
        )
    })
    .await
}

/// Handles `RemoveService`.
///
/// # Errors
///
/// Returns `DomainError` if loading or appending fails.
pub async fn handle_remove_service(
    command: &RemoveService,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<QuoteCommandResult, DomainError> {
    execute(command.quote_id, repo, |builder| {
        builder.remove_service(command.instance_id, command.correlation_id, clock)
    })
    .await
}

/// Handles `UpdateServiceOption`.
///
/// # Errors
///
/// Returns `DomainError` if loading or appending fails.
pub async fn handle_update_service_option(
    command: &UpdateServiceOption,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<QuoteCommandResult, DomainError> {
    execute(command.quote_id, repo, |builder| {
        builder.update_service_option(
            command.instance_id,
            &command.option_id,
            &command.value,
            command.correlation_id,
            clock,
        )
    })
    .await
}

/// Handles `ToggleAddOn`.
///
/// # Errors
///
/// Returns `DomainError` if loading or appending fails.
pub async fn handle_toggle_add_on(
    command: &ToggleAddOn,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<QuoteCommandResult, DomainError> {
    execute(command.quote_id, repo, |builder| {
        builder.toggle_add_on(command.add_on, command.correlation_id, clock);
        true
    })
    .await
}

/// Handles `UpdateEventDetails`.
///
/// # Errors
///
/// Returns `DomainError` if loading or appending fails.
pub async fn handle_update_event_details(
    command: &UpdateEventDetails,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<QuoteCommandResult, DomainError> {
    let patch = command.patch.clone();
    execute(command.quote_id, repo, |builder| {
        builder.update_event_details(patch, command.correlation_id, clock)
    })
    .await
}

/// Handles `ResetQuote`.
///
/// # Errors
///
/// Returns `DomainError` if loading or appending fails.
pub async fn handle_reset_quote(
    command: &ResetQuote,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Result<QuoteCommandResult, DomainError> {
    execute(command.quote_id, repo, |builder| {
        builder.reset(command.correlation_id, clock);
        true
    })
    .await
}
