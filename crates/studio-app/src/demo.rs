//! Demo surface: what the experience pages call.
//!
//! Every mutation returns the fresh session view in the requested locale,
//! or the configured default when the caller passes none.
//! Entering the analysis pause schedules its completion on the shared
//! timers; leaving it cancels the timer.

use std::sync::Arc;

use studio_core::locale::Locale;
use studio_demo::application::command_handlers::{
    self, DemoCommandResult, complete_analysis_with_retry,
};
use studio_demo::application::query_handlers::{self, DemoSessionView, ExperienceSummary};
use studio_demo::domain::aggregates::Transition;
use studio_demo::domain::answers::AnswerValue;
use studio_demo::domain::commands::{
    CompleteAnalysis, GoToNextStep, GoToPreviousStep, OpenDemo, RecordAnswer, RestartDemo,
};
use studio_demo::domain::slug::ExperienceSlug;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::error::ViewError;
use crate::state::AppState;

/// Lists every experience that can be opened.
#[must_use]
pub fn list_experiences(state: &AppState) -> Vec<ExperienceSummary> {
    query_handlers::list_experiences(&state.registry)
}

/// Opens a new session of the experience at route `slug`.
///
/// # Errors
///
/// Returns an `invalid_request` error for an unknown slug.
#[instrument(skip(state))]
pub async fn open_demo(
    state: &AppState,
    slug: &str,
    locale: Option<Locale>,
) -> Result<DemoSessionView, ViewError> {
    let slug: ExperienceSlug = slug.parse()?;
    let command = OpenDemo {
        correlation_id: Uuid::new_v4(),
        session_id: Uuid::now_v7(),
        slug,
    };

    info!(
        correlation_id = %command.correlation_id,
        session_id = %command.session_id,
        "opening demo"
    );

    command_handlers::handle_open_demo(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
        &state.registry,
    )
    .await?;

    session(state, command.session_id, locale).await
}

/// Reads a session.
///
/// # Errors
///
/// Returns a `not_found` error for an unknown or closed session.
pub async fn session(
    state: &AppState,
    session_id: Uuid,
    locale: Option<Locale>,
) -> Result<DemoSessionView, ViewError> {
    Ok(query_handlers::get_demo_session(
        session_id,
        state.locale(locale),
        &*state.event_repository,
        &state.registry,
    )
    .await?)
}

/// Stores the answer for `step_id`.
///
/// # Errors
///
/// Returns a `not_found` error for an unknown session.
#[instrument(skip(state, value))]
pub async fn record_answer(
    state: &AppState,
    session_id: Uuid,
    step_id: &str,
    value: AnswerValue,
    locale: Option<Locale>,
) -> Result<DemoSessionView, ViewError> {
    let command = RecordAnswer {
        correlation_id: Uuid::new_v4(),
        session_id,
        step_id: step_id.to_owned(),
        value,
    };
    command_handlers::handle_record_answer(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
        &state.registry,
    )
    .await?;

    session(state, session_id, locale).await
}

/// Presses "next". Leaving the last step schedules the analysis pause.
///
/// # Errors
///
/// Returns a `not_found` error for an unknown session.
#[instrument(skip(state))]
pub async fn go_next(
    state: &AppState,
    session_id: Uuid,
    locale: Option<Locale>,
) -> Result<DemoSessionView, ViewError> {
    let command = GoToNextStep {
        correlation_id: Uuid::new_v4(),
        session_id,
    };
    let result = command_handlers::handle_go_next(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
        &state.registry,
    )
    .await?;

    if let Transition::AnalysisStarted { attempt, duration } = result.transition {
        schedule_completion(state, session_id, attempt, duration);
    }

    session(state, session_id, locale).await
}

/// Presses "back". Cancels a pending analysis pause.
///
/// # Errors
///
/// Returns a `not_found` error for an unknown session.
#[instrument(skip(state))]
pub async fn go_prev(
    state: &AppState,
    session_id: Uuid,
    locale: Option<Locale>,
) -> Result<DemoSessionView, ViewError> {
    state.timers.cancel(session_id);
    let command = GoToPreviousStep {
        correlation_id: Uuid::new_v4(),
        session_id,
    };
    command_handlers::handle_go_prev(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
        &state.registry,
    )
    .await?;

    session(state, session_id, locale).await
}

/// Starts the session over. Cancels a pending analysis pause.
///
/// # Errors
///
/// Returns a `not_found` error for an unknown session.
#[instrument(skip(state))]
pub async fn restart(
    state: &AppState,
    session_id: Uuid,
    locale: Option<Locale>,
) -> Result<DemoSessionView, ViewError> {
    state.timers.cancel(session_id);
    let command = RestartDemo {
        correlation_id: Uuid::new_v4(),
        session_id,
    };
    command_handlers::handle_restart(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
        &state.registry,
    )
    .await?;

    session(state, session_id, locale).await
}

/// Tears the session down: the pending timer is cancelled and the stream
/// discarded, so nothing can change it afterwards.
///
/// # Errors
///
/// Returns an `internal` error if the store fails.
#[instrument(skip(state))]
pub async fn close_demo(state: &AppState, session_id: Uuid) -> Result<(), ViewError> {
    let cancelled = state.timers.cancel(session_id);
    state.event_repository.discard_stream(session_id).await?;
    info!(cancelled, "demo closed");
    Ok(())
}

fn schedule_completion(
    state: &AppState,
    session_id: Uuid,
    attempt: u32,
    delay: std::time::Duration,
) {
    let clock = Arc::clone(&state.clock);
    let repo = Arc::clone(&state.event_repository);
    let registry = Arc::clone(&state.registry);

    state.timers.schedule(session_id, attempt, delay, async move {
        let command = CompleteAnalysis {
            correlation_id: Uuid::new_v4(),
            session_id,
            attempt,
        };
        match complete_analysis_with_retry(&command, &*clock, &*repo, &registry).await {
            Ok(DemoCommandResult { transition, .. }) => {
                info!(%session_id, attempt, ?transition, "analysis finished");
            }
            Err(err) => {
                warn!(%session_id, attempt, error = %err, "analysis completion failed");
            }
        }
    });
}
