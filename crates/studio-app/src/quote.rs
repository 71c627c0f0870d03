//! Quote surface: what the quote builder page calls.

use std::ops::RangeInclusive;

use studio_core::locale::Locale;
use studio_quote::application::command_handlers;
use studio_quote::application::query_handlers::{self, CatalogView, QuoteView};
use studio_quote::domain::catalog::{AddOnId, ServiceKey};
use studio_quote::domain::commands::{
    AddService, OpenQuote, RemoveService, ResetQuote, ToggleAddOn, UpdateEventDetails,
    UpdateServiceOption,
};
use studio_quote::domain::details::EventDetailsPatch;
use studio_quote::domain::estimate::OptionValue;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ViewError;
use crate::state::AppState;

/// Event length the duration stepper allows, in days.
pub const DURATION_DAYS: RangeInclusive<u32> = 1..=30;

/// Attendee counts the attendee stepper allows.
pub const ATTENDEES: RangeInclusive<u32> = 50..=1000;

/// Applies the steppers' bounds to a patch before it reaches the calculator.
#[must_use]
pub fn clamp_patch(mut patch: EventDetailsPatch) -> EventDetailsPatch {
    patch.duration_days = patch
        .duration_days
        .map(|days| days.clamp(*DURATION_DAYS.start(), *DURATION_DAYS.end()));
    patch.attendees = patch
        .attendees
        .map(|count| count.clamp(*ATTENDEES.start(), *ATTENDEES.end()));
    patch
}

/// The pricing tables.
#[must_use]
pub fn catalog(state: &AppState, locale: Option<Locale>) -> CatalogView {
    query_handlers::list_catalog(state.locale(locale))
}

/// Opens an empty quote.
///
/// # Errors
///
/// Returns an `internal` error if the store fails.
#[instrument(skip(state))]
pub async fn open_quote(
    state: &AppState,
    locale: Option<Locale>,
) -> Result<QuoteView, ViewError> {
    let command = OpenQuote {
        correlation_id: Uuid::new_v4(),
        quote_id: Uuid::now_v7(),
    };
    info!(correlation_id = %command.correlation_id, quote_id = %command.quote_id, "opening quote");

    command_handlers::handle_open_quote(&command, state.clock.as_ref(), &*state.event_repository)
        .await?;

    quote(state, command.quote_id, locale).await
}

/// Reads a quote with its estimate.
///
/// # Errors
///
/// Returns a `not_found` error for an unknown or closed quote.
pub async fn quote(
    state: &AppState,
    quote_id: Uuid,
    locale: Option<Locale>,
) -> Result<QuoteView, ViewError> {
    let locale = state.locale(locale);
    Ok(query_handlers::get_quote(quote_id, locale, &*state.event_repository).await?)
}

/// Adds the service at route key `service`. Returns the new instance id and
/// the updated view.
///
/// # Errors
///
/// Returns `invalid_request` for an unknown service and `not_found` for an
/// unknown quote.
#[instrument(skip(state))]
pub async fn add_service(
    state: &AppState,
    quote_id: Uuid,
    service: &str,
    locale: Option<Locale>,
) -> Result<(Uuid, QuoteView), ViewError> {
    let service: ServiceKey = service.parse()?;
    let command = AddService {
        correlation_id: Uuid::new_v4(),
        quote_id,
        instance_id: Uuid::now_v7(),
        service,
    };
    command_handlers::handle_add_service(&command, state.clock.as_ref(), &*state.event_repository)
        .await?;

    Ok((command.instance_id, quote(state, quote_id, locale).await?))
}

/// Removes a service instance; absent instances are fine.
///
/// # Errors
///
/// Returns a `not_found` error for an unknown quote.
#[instrument(skip(state))]
pub async fn remove_service(
    state: &AppState,
    quote_id: Uuid,
    instance_id: Uuid,
    locale: Option<Locale>,
) -> Result<QuoteView, ViewError> {
    let command = RemoveService {
        correlation_id: Uuid::new_v4(),
        quote_id,
        instance_id,
    };
    command_handlers::handle_remove_service(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
    )
    .await?;

    quote(state, quote_id, locale).await
}

/// Changes one option of a service instance.
///
/// # Errors
///
/// Returns a `not_found` error for an unknown quote.
#[instrument(skip(state, value))]
pub async fn update_service_option(
    state: &AppState,
    quote_id: Uuid,
    instance_id: Uuid,
    option_id: &str,
    value: OptionValue,
    locale: Option<Locale>,
) -> Result<QuoteView, ViewError> {
    let command = UpdateServiceOption {
        correlation_id: Uuid::new_v4(),
        quote_id,
        instance_id,
        option_id: option_id.to_owned(),
        value,
    };
    command_handlers::handle_update_service_option(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
    )
    .await?;

    quote(state, quote_id, locale).await
}

/// Flips an add-on.
///
/// # Errors
///
/// Returns a `not_found` error for an unknown quote.
#[instrument(skip(state))]
pub async fn toggle_add_on(
    state: &AppState,
    quote_id: Uuid,
    add_on: AddOnId,
    locale: Option<Locale>,
) -> Result<QuoteView, ViewError> {
    let command = ToggleAddOn {
        correlation_id: Uuid::new_v4(),
        quote_id,
        add_on,
    };
    command_handlers::handle_toggle_add_on(&command, state.clock.as_ref(), &*state.event_repository)
        .await?;

    quote(state, quote_id, locale).await
}

/// Edits event details. Duration and attendees are clamped to the
/// steppers' bounds first.
///
/// # Errors
///
/// Returns a `not_found` error for an unknown quote.
#[instrument(skip(state, patch))]
pub async fn update_event_details(
    state: &AppState,
    quote_id: Uuid,
    patch: EventDetailsPatch,
    locale: Option<Locale>,
) -> Result<QuoteView, ViewError> {
    let command = UpdateEventDetails {
        correlation_id: Uuid::new_v4(),
        quote_id,
        patch: clamp_patch(patch),
    };
    command_handlers::handle_update_event_details(
        &command,
        state.clock.as_ref(),
        &*state.event_repository,
    )
    .await?;

    quote(state, quote_id, locale).await
}

/// Clears the quote.
///
/// # Errors
///
/// Returns a `not_found` error for an unknown quote.
#[instrument(skip(state))]
pub async fn reset_quote(
    state: &AppState,
    quote_id: Uuid,
    locale: Option<Locale>,
) -> Result<QuoteView, ViewError> {
    let command = ResetQuote {
        correlation_id: Uuid::new_v4(),
        quote_id,
    };
    command_handlers::handle_reset_quote(&command, state.clock.as_ref(), &*state.event_repository)
        .await?;

    quote(state, quote_id, locale).await
}

/// Discards the quote's stream.
///
/// # Errors
///
/// Returns an `internal` error if the store fails.
#[instrument(skip(state))]
pub async fn close_quote(state: &AppState, quote_id: Uuid) -> Result<(), ViewError> {
    state.event_repository.discard_stream(quote_id).await?;
    Ok(())
}
