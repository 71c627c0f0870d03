//! Aggregate root for a quote under construction.

use rust_decimal::Decimal;
use serde::Serialize;
use studio_core::aggregate::AggregateRoot;
use studio_core::clock::Clock;
use studio_core::event::EventMetadata;
use tracing::warn;
use uuid::Uuid;

use super::catalog::{AddOnId, ServiceKey};
use super::details::{EventDetails, EventDetailsPatch};
use super::estimate::{
    self, AddOnSelection, OptionValue, QuoteEstimate, ServiceOptions, default_options,
    normalize_option_value, service_subtotal,
};
use super::events::{
    AddOnToggled, EventDetailsUpdated, QuoteEvent, QuoteEventKind, QuoteOpened, QuoteReset,
    ServiceAdded, ServiceOptionUpdated, ServiceRemoved,
};

/// One service instance in a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedService {
    /// Instance identifier; the same service may be added more than once.
    pub instance_id: Uuid,
    /// The catalog service.
    pub key: ServiceKey,
    /// Current option values.
    pub options: ServiceOptions,
    /// Base price plus option contributions.
    pub subtotal: Decimal,
}

impl SelectedService {
    fn new(instance_id: Uuid, key: ServiceKey) -> Self {
        let definition = key.definition();
        let options = default_options(definition);
        let subtotal = service_subtotal(definition, &options);
        Self {
            instance_id,
            key,
            options,
            subtotal,
        }
    }

    fn set_option(&mut self, option_id: &str, value: OptionValue) {
        self.options.insert(option_id.to_owned(), value);
        self.subtotal = service_subtotal(self.key.definition(), &self.options);
    }
}

/// The aggregate root holding one visitor's quote selections.
///
/// Every method returns whether it raised an event. The calculator never
/// rejects input: requests that cannot apply are logged and dropped.
#[derive(Debug)]
pub struct QuoteBuilder {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (events applied).
    pub(crate) version: i64,
    /// Whether `QuoteOpened` has been applied.
    pub(crate) opened: bool,
    /// Services in the order they were added.
    pub(crate) services: Vec<SelectedService>,
    /// Selected add-ons.
    pub(crate) add_ons: AddOnSelection,
    /// Event parameters.
    pub(crate) details: EventDetails,
    /// Uncommitted events pending persistence.
    uncommitted_events: Vec<QuoteEvent>,
}

impl QuoteBuilder {
    /// Creates an unopened, empty quote.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            version: 0,
            opened: false,
            services: Vec::new(),
            add_ons: AddOnSelection::new(),
            details: EventDetails::default(),
            uncommitted_events: Vec::new(),
        }
    }

    /// Services in the order they were added.
    #[must_use]
    pub fn services(&self) -> &[SelectedService] {
        &self.services
    }

    /// Looks up one service instance.
    #[must_use]
    pub fn service(&self, instance_id: Uuid) -> Option<&SelectedService> {
        self.services
            .iter()
            .find(|service| service.instance_id == instance_id)
    }

    /// Selected add-ons.
    #[must_use]
    pub fn add_ons(&self) -> &AddOnSelection {
        &self.add_ons
    }

    /// Event parameters.
    #[must_use]
    pub fn details(&self) -> &EventDetails {
        &self.details
    }

    /// Derives the current estimate.
    #[must_use]
    pub fn estimate(&self) -> QuoteEstimate {
        estimate::estimate(
            self.services.iter().map(|service| service.subtotal),
            &self.add_ons,
            &self.details,
        )
    }

    fn raise(&mut self, kind: QuoteEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = QuoteEvent {
            metadata: EventMetadata::for_command(
                kind.event_type(),
                self.id,
                self.version + 1,
                correlation_id,
                clock.now(),
            ),
            kind,
        };
        self.apply(&event);
        self.uncommitted_events.push(event);
    }

    /// Opens the quote. Opening twice is a no-op.
    pub fn open(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> bool {
        if self.opened {
            return false;
        }
        self.raise(
            QuoteEventKind::QuoteOpened(QuoteOpened { quote_id: self.id }),
            correlation_id,
            clock,
        );
        true
    }

    /// Appends a new instance of `service` with default options. Each call
    /// adds a separate entry; only a reused instance id is dropped.
    pub fn add_service(
        &mut self,
        instance_id: Uuid,
        service: ServiceKey,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> bool {
        if self.service(instance_id).is_some() {
            warn!(quote_id = %self.id, %instance_id, "service instance already exists");
            return false;
        }
        self.raise(
            QuoteEventKind::ServiceAdded(ServiceAdded {
                quote_id: self.id,
                instance_id,
                service,
            }),
            correlation_id,
            clock,
        );
        true
    }

    /// Removes an instance. Removing an absent instance does nothing.
    pub fn remove_service(
        &mut self,
        instance_id: Uuid,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> bool {
        if self.service(instance_id).is_none() {
            return false;
        }
        self.raise(
            QuoteEventKind::ServiceRemoved(ServiceRemoved {
                quote_id: self.id,
                instance_id,
            }),
            correlation_id,
            clock,
        );
        true
    }

    /// Overwrites one option of an instance. Quantities are clamped into the
    /// option's bounds. Unknown instances or options and values of the wrong
    /// kind are ignored.
    pub fn update_service_option(
        &mut self,
        instance_id: Uuid,
        option_id: &str,
        value: &OptionValue,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> bool {
        let Some(service) = self.service(instance_id) else {
            warn!(quote_id = %self.id, %instance_id, "option update for unknown service instance");
            return false;
        };
        let definition = service.key.definition();
        let Some(option) = definition.option(option_id) else {
            warn!(service = %service.key, option_id, "unknown service option");
            return false;
        };
        let Some(value) = normalize_option_value(option, value) else {
            warn!(service = %service.key, option_id, ?value, "value does not fit the option");
            return false;
        };
        if service.options.get(option_id) == Some(&value) {
            return false;
        }

        self.raise(
            QuoteEventKind::ServiceOptionUpdated(ServiceOptionUpdated {
                quote_id: self.id,
                instance_id,
                option_id: option_id.to_owned(),
                value,
            }),
            correlation_id,
            clock,
        );
        true
    }

    /// Selects the add-on if absent, deselects it otherwise.
    pub fn toggle_add_on(&mut self, add_on: AddOnId, correlation_id: Uuid, clock: &dyn Clock) {
        let selected = !self.add_ons.contains(&add_on);
        self.raise(
            QuoteEventKind::AddOnToggled(AddOnToggled {
                quote_id: self.id,
                add_on,
                selected,
            }),
            correlation_id,
            clock,
        );
    }

    /// Shallow-merges `patch` into the event details. Values are not
    /// clamped here. An empty patch raises nothing.
    pub fn update_event_details(
        &mut self,
        patch: EventDetailsPatch,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> bool {
        if patch.is_empty() {
            return false;
        }
        self.raise(
            QuoteEventKind::EventDetailsUpdated(EventDetailsUpdated {
                quote_id: self.id,
                patch,
            }),
            correlation_id,
            clock,
        );
        true
    }

    /// Clears services and add-ons and restores default event details.
    pub fn reset(&mut self, correlation_id: Uuid, clock: &dyn Clock) {
        self.raise(
            QuoteEventKind::QuoteReset(QuoteReset { quote_id: self.id }),
            correlation_id,
            clock,
        );
    }
}

impl AggregateRoot for QuoteBuilder {
    type Event = QuoteEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            QuoteEventKind::QuoteOpened(_) => {
                self.opened = true;
            }
            QuoteEventKind::ServiceAdded(payload) => {
                self.services
                    .push(SelectedService::new(payload.instance_id, payload.service));
            }
            QuoteEventKind::ServiceRemoved(payload) => {
                self.services
                    .retain(|service| service.instance_id != payload.instance_id);
            }
            QuoteEventKind::ServiceOptionUpdated(payload) => {
                if let Some(service) = self
                    .services
                    .iter_mut()
                    .find(|service| service.instance_id == payload.instance_id)
                {
                    service.set_option(&payload.option_id, payload.value.clone());
                }
            }
            QuoteEventKind::AddOnToggled(payload) => {
                if payload.selected {
                    self.add_ons.insert(payload.add_on);
                } else {
                    self.add_ons.remove(&payload.add_on);
                }
            }
            QuoteEventKind::EventDetailsUpdated(payload) => {
                self.details.merge(&payload.patch);
            }
            QuoteEventKind::QuoteReset(_) => {
                self.services.clear();
                self.add_ons.clear();
                self.details = EventDetails::default();
            }
        }
        self.version += 1;
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn clear_uncommitted_events(&mut self) {
        self.uncommitted_events.clear();
    }
}
