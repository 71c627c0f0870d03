//! Command handlers for demo quiz sessions.
//!
//! Each handler loads the session stream, reconstitutes the runner through
//! the registry, executes the command, and appends whatever it raised.
//! Commands that change nothing append nothing.

use studio_core::clock::Clock;
use studio_core::error::DomainError;
use studio_core::repository::{EventRepository, StoredEvent};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::aggregates::Transition;
use crate::domain::commands::{
    CompleteAnalysis, GoToNextStep, GoToPreviousStep, OpenDemo, RecordAnswer, RestartDemo,
};
use crate::domain::events::QuizEventKind;
use crate::domain::runner::QuizRunner;
use crate::registry::DemoRegistry;

/// How many times a timer-driven completion reloads after losing an
/// optimistic concurrency race.
pub const COMPLETE_ANALYSIS_ATTEMPTS: usize = 3;

/// Result of a handled command.
#[derive(Debug)]
pub struct DemoCommandResult {
    /// The session affected by the command.
    pub aggregate_id: Uuid,
    /// What the command did.
    pub transition: Transition,
    /// The events persisted; empty for no-ops.
    pub stored_events: Vec<StoredEvent>,
}

/// Rebuilds a session runner from its stream. The first event names the
/// experience, which selects the quiz.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the stream does not begin with
/// `QuizStarted` or an event cannot be replayed, and
/// `DomainError::Validation` if the experience is no longer registered.
pub(crate) fn reconstitute(
    session_id: Uuid,
    existing_events: &[StoredEvent],
    registry: &DemoRegistry,
) -> Result<Box<dyn QuizRunner>, DomainError> {
    let first = existing_events
        .first()
        .ok_or(DomainError::AggregateNotFound(session_id))?;
    let QuizEventKind::QuizStarted(started) = first.decode::<QuizEventKind>()? else {
        return Err(DomainError::Infrastructure(format!(
            "session stream {session_id} does not begin with {}",
            crate::domain::events::QUIZ_STARTED_EVENT_TYPE
        )));
    };

    let mut runner = registry.open(started.slug, session_id)?;
    for stored in existing_events {
        runner.replay(stored)?;
    }
    Ok(runner)
}

async fn execute<F>(
    session_id: Uuid,
    repo: &dyn EventRepository,
    registry: &DemoRegistry,
    command: F,
) -> Result<DemoCommandResult, DomainError>
where
    F: FnOnce(&mut dyn QuizRunner) -> Transition + Send,
{
    let existing_events = repo.load_events(session_id).await?;
    if existing_events.is_empty() {
        return Err(DomainError::AggregateNotFound(session_id));
    }
    let mut runner = reconstitute(session_id, &existing_events, registry)?;
    let expected_version = runner.version();

    let transition = command(runner.as_mut());

    let stored_events = runner.take_uncommitted();
    if !stored_events.is_empty() {
        repo.append_events(session_id, expected_version, &stored_events)
            .await?;
    }
    debug!(%session_id, ?transition, events = stored_events.len(), "demo command handled");

    Ok(DemoCommandResult {
        aggregate_id: session_id,
        transition,
        stored_events,
    })
}

/// Handles `OpenDemo`: starts a fresh session of the requested experience.
///
/// # Errors
///
/// Returns `DomainError::Validation` for an unregistered experience and
/// `DomainError::ConcurrencyConflict` if the session id is already in use.
pub async fn handle_open_demo(
    command: &OpenDemo,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    registry: &DemoRegistry,
) -> Result<DemoCommandResult, DomainError> {
    let mut runner = registry.open(command.slug, command.session_id)?;
    let transition = runner.start(command.correlation_id, clock);
    let stored_events = runner.take_uncommitted();

    repo.append_events(command.session_id, 0, &stored_events)
        .await?;
    debug!(session_id = %command.session_id, slug = %command.slug, "demo opened");

    Ok(DemoCommandResult {
        aggregate_id: command.session_id,
        transition,
        stored_events,
    })
}

/// Handles `RecordAnswer`.
///
/// # Errors
///
/// Returns `DomainError` if loading, replaying or appending fails.
pub async fn handle_record_answer(
    command: &RecordAnswer,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    registry: &DemoRegistry,
) -> Result<DemoCommandResult, DomainError> {
    let value = command.value.clone();
    execute(command.session_id, repo, registry, |runner| {
        runner.record_answer(&command.step_id, value, command.correlation_id, clock)
    })
    .await
}

/// Handles `GoToNextStep`. When the transition is `AnalysisStarted` the
/// caller owns scheduling the completion.
///
/// # Errors
///
/// Returns `DomainError` if loading, replaying or appending fails.
pub async fn handle_go_next(
    command: &GoToNextStep,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    registry: &DemoRegistry,
) -> Result<DemoCommandResult, DomainError> {
    execute(command.session_id, repo, registry, |runner| {
        runner.go_next(command.correlation_id, clock)
    })
    .await
}

/// Handles `GoToPreviousStep`.
///
/// # Errors
///
/// Returns `DomainError` if loading, replaying or appending fails.
pub async fn handle_go_prev(
    command: &GoToPreviousStep,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    registry: &DemoRegistry,
) -> Result<DemoCommandResult, DomainError> {
    execute(command.session_id, repo, registry, |runner| {
        runner.go_prev(command.correlation_id, clock)
    })
    .await
}

/// Handles `RestartDemo`.
///
/// # Errors
///
/// Returns `DomainError` if loading, replaying or appending fails.
pub async fn handle_restart(
    command: &RestartDemo,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    registry: &DemoRegistry,
) -> Result<DemoCommandResult, DomainError> {
    execute(command.session_id, repo, registry, |runner| {
        runner.restart(command.correlation_id, clock)
    })
    .await
}

/// Handles `CompleteAnalysis`, normally issued by the analysis timer.
///
/// # Errors
///
/// Returns `DomainError` if loading, replaying or appending fails.
pub async fn handle_complete_analysis(
    command: &CompleteAnalysis,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    registry: &DemoRegistry,
) -> Result<DemoCommandResult, DomainError> {
    execute(command.session_id, repo, registry, |runner| {
        runner.complete_analysis(command.attempt, command.correlation_id, clock)
    })
    .await
}

/// Runs `handle_complete_analysis`, reloading and retrying when a concurrent
/// command got its events in first. The retry sees the newer stream, so a
/// completion for an attempt that was since abandoned becomes a no-op.
///
/// # Errors
///
/// Returns the last `DomainError::ConcurrencyConflict` once every attempt
/// lost, or any other error immediately.
pub async fn complete_analysis_with_retry(
    command: &CompleteAnalysis,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    registry: &DemoRegistry,
) -> Result<DemoCommandResult, DomainError> {
    let mut tries = 1;
    loop {
        match handle_complete_analysis(command, clock, repo, registry).await {
            Err(DomainError::ConcurrencyConflict { .. }) if tries < COMPLETE_ANALYSIS_ATTEMPTS => {
                warn!(
                    session_id = %command.session_id,
                    attempt = command.attempt,
                    tries,
                    "analysis completion lost a race, retrying"
                );
                tries += 1;
            }
            other => return other,
        }
    }
}
