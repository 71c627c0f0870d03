#![allow(dead_code)]

use rust_decimal::Decimal;
use studio_core::clock::Clock;
use studio_core::locale::Locale;
use studio_core::repository::EventRepository;
use studio_quote::application::command_handlers::{
    handle_add_service, handle_open_quote, handle_toggle_add_on,
};
use studio_quote::application::query_handlers::get_quote;
use studio_quote::domain::catalog::{AddOnId, ServiceKey};
use studio_quote::domain::commands::{AddService, OpenQuote, ToggleAddOn};
use studio_test_support::init_test_tracing;
use uuid::Uuid;

/// Opens an empty quote and returns its id.
pub async fn open_quote(clock: &dyn Clock, repo: &dyn EventRepository) -> Uuid {
    init_test_tracing();
    let quote_id = Uuid::new_v4();
    handle_open_quote(
        &OpenQuote {
            correlation_id: Uuid::new_v4(),
            quote_id,
        },
        clock,
        repo,
    )
    .await
    .unwrap();
    quote_id
}

/// Adds a service and returns the new instance id.
pub async fn add_service(
    quote_id: Uuid,
    service: ServiceKey,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) -> Uuid {
    let instance_id = Uuid::new_v4();
    handle_add_service(
        &AddService {
            correlation_id: Uuid::new_v4(),
            quote_id,
            instance_id,
            service,
        },
        clock,
        repo,
    )
    .await
    .unwrap();
    instance_id
}

/// Flips an add-on.
pub async fn toggle_add_on(
    quote_id: Uuid,
    add_on: AddOnId,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
) {
    handle_toggle_add_on(
        &ToggleAddOn {
            correlation_id: Uuid::new_v4(),
            quote_id,
            add_on,
        },
        clock,
        repo,
    )
    .await
    .unwrap();
}

/// Current estimated total.
pub async fn total(quote_id: Uuid, repo: &dyn EventRepository) -> Decimal {
    get_quote(quote_id, Locale::Ko, repo)
        .await
        .unwrap()
        .estimate
        .total
}
