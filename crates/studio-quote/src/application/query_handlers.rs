//! Query handlers for quote builders.

use rust_decimal::Decimal;
use serde::Serialize;
use studio_core::aggregate::AggregateRoot;
use studio_core::error::DomainError;
use studio_core::locale::Locale;
use studio_core::repository::EventRepository;
use uuid::Uuid;

use crate::application::command_handlers;
use crate::domain::catalog::{ADD_ONS, AddOnId, SERVICES, ServiceKey, ServiceOption};
use crate::domain::details::EventDetails;
use crate::domain::estimate::{QuoteEstimate, ServiceOptions};
use crate::domain::money::format_won;

/// One service line of a quote.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceLineView {
    /// Instance identifier.
    pub instance_id: Uuid,
    /// The catalog service.
    pub service: ServiceKey,
    /// Display name in the requested locale.
    pub name: &'static str,
    /// Current option values.
    pub options: ServiceOptions,
    /// Line subtotal.
    pub subtotal: Decimal,
    /// Line subtotal, formatted.
    pub subtotal_display: String,
}

/// One selected add-on.
#[derive(Debug, Clone, Serialize)]
pub struct AddOnLineView {
    /// The add-on.
    pub id: AddOnId,
    /// Display name in the requested locale.
    pub name: &'static str,
    /// Flat price.
    pub price: Decimal,
}

/// Read-only view of a quote with its derived estimate.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteView {
    /// The quote identifier.
    pub quote_id: Uuid,
    /// Service lines in the order they were added.
    pub services: Vec<ServiceLineView>,
    /// Selected add-ons.
    pub add_ons: Vec<AddOnLineView>,
    /// Event parameters.
    pub details: EventDetails,
    /// Price breakdown.
    pub estimate: QuoteEstimate,
    /// The total, formatted for `locale`.
    pub total_display: String,
    /// Current version (event count).
    pub version: i64,
}

/// A service as offered in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceCatalogEntry {
    /// The catalog service.
    pub key: ServiceKey,
    /// Display name in the requested locale.
    pub name: &'static str,
    /// Price before options.
    pub base_price: i64,
    /// Configurable options.
    pub options: &'static [ServiceOption],
}

/// An add-on as offered in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct AddOnCatalogEntry {
    /// The add-on.
    pub id: AddOnId,
    /// Display name in the requested locale.
    pub name: &'static str,
    /// Flat price.
    pub price: i64,
}

/// The pricing tables the service selector renders.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    /// Every service.
    pub services: Vec<ServiceCatalogEntry>,
    /// Every add-on.
    pub add_ons: Vec<AddOnCatalogEntry>,
}

/// Retrieves a quote with its estimate, names and amounts in `locale`.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if no events exist for the id.
/// Returns `DomainError::Infrastructure` if the stream cannot be decoded.
pub async fn get_quote(
    quote_id: Uuid,
    locale: Locale,
    repo: &dyn EventRepository,
) -> Result<QuoteView, DomainError> {
    let stored_events = repo.load_events(quote_id).await?;
    let builder = command_handlers::reconstitute(quote_id, &stored_events)?;
    let estimate = builder.estimate();

    let services = builder
        .services()
        .iter()
        .map(|service| ServiceLineView {
            instance_id: service.instance_id,
            service: service.key,
            name: service.key.definition().name_for(locale),
            options: service.options.clone(),
            subtotal: service.subtotal,
            subtotal_display: format_won(service.subtotal, locale),
        })
        .collect();
    let add_ons = builder
        .add_ons()
        .iter()
        .map(|id| {
            let definition = id.definition();
            AddOnLineView {
                id: *id,
                name: definition.name_for(locale),
                price: Decimal::from(definition.price),
            }
        })
        .collect();

    Ok(QuoteView {
        quote_id,
        services,
        add_ons,
        details: builder.details().clone(),
        estimate,
        total_display: format_won(estimate.total, locale),
        version: builder.version(),
    })
}

/// Lists every service and add-on with names in `locale`.
#[must_use]
pub fn list_catalog(locale: Locale) -> CatalogView {
    CatalogView {
        services: SERVICES
            .iter()
            .map(|definition| ServiceCatalogEntry {
                key: definition.key,
                name: definition.name_for(locale),
                base_price: definition.base_price,
                options: definition.options,
            })
            .collect(),
        add_ons: ADD_ONS
            .iter()
            .map(|definition| AddOnCatalogEntry {
                id: definition.id,
                name: definition.name_for(locale),
                price: definition.price,
            })
            .collect(),
    }
}
