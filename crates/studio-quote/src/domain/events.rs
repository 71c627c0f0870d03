//! Domain events for quote builders.

use serde::{Deserialize, Serialize};
use studio_core::event::{DomainEvent, EventMetadata};
use uuid::Uuid;

use super::catalog::{AddOnId, ServiceKey};
use super::details::EventDetailsPatch;
use super::estimate::OptionValue;

/// Emitted when a visitor opens the calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteOpened {
    /// The quote identifier.
    pub quote_id: Uuid,
}

/// Emitted when a service instance is added with its default options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceAdded {
    /// The quote identifier.
    pub quote_id: Uuid,
    /// Identifier of the new instance.
    pub instance_id: Uuid,
    /// The catalog service.
    pub service: ServiceKey,
}

/// Emitted when a service instance is removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRemoved {
    /// The quote identifier.
    pub quote_id: Uuid,
    /// The removed instance.
    pub instance_id: Uuid,
}

/// Emitted when one option of a service instance changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOptionUpdated {
    /// The quote identifier.
    pub quote_id: Uuid,
    /// The instance being configured.
    pub instance_id: Uuid,
    /// The option id within the service.
    pub option_id: String,
    /// The normalized value.
    pub value: OptionValue,
}

/// Emitted when an add-on is selected or deselected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOnToggled {
    /// The quote identifier.
    pub quote_id: Uuid,
    /// The add-on.
    pub add_on: AddOnId,
    /// Whether it is now selected.
    pub selected: bool,
}

/// Emitted when event details are edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDetailsUpdated {
    /// The quote identifier.
    pub quote_id: Uuid,
    /// The fields that changed.
    pub patch: EventDetailsPatch,
}

/// Emitted when the visitor clears the quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteReset {
    /// The quote identifier.
    pub quote_id: Uuid,
}

/// Event type identifier for [`QuoteOpened`].
pub const QUOTE_OPENED_EVENT_TYPE: &str = "quote.opened";

/// Event type identifier for [`ServiceAdded`].
pub const SERVICE_ADDED_EVENT_TYPE: &str = "quote.service_added";

/// Event type identifier for [`ServiceRemoved`].
pub const SERVICE_REMOVED_EVENT_TYPE: &str = "quote.service_removed";

/// Event type identifier for [`ServiceOptionUpdated`].
pub const SERVICE_OPTION_UPDATED_EVENT_TYPE: &str = "quote.service_option_updated";

/// Event type identifier for [`AddOnToggled`].
pub const ADD_ON_TOGGLED_EVENT_TYPE: &str = "quote.add_on_toggled";

/// Event type identifier for [`EventDetailsUpdated`].
pub const EVENT_DETAILS_UPDATED_EVENT_TYPE: &str = "quote.event_details_updated";

/// Event type identifier for [`QuoteReset`].
pub const QUOTE_RESET_EVENT_TYPE: &str = "quote.reset";

/// Event payload variants for quote builders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum QuoteEventKind {
    /// The calculator was opened.
    QuoteOpened(QuoteOpened),
    /// A service was added.
    ServiceAdded(ServiceAdded),
    /// A service was removed.
    ServiceRemoved(ServiceRemoved),
    /// A service option changed.
    ServiceOptionUpdated(ServiceOptionUpdated),
    /// An add-on was toggled.
    AddOnToggled(AddOnToggled),
    /// Event details changed.
    EventDetailsUpdated(EventDetailsUpdated),
    /// The quote was cleared.
    QuoteReset(QuoteReset),
}

impl QuoteEventKind {
    /// The event type string for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::QuoteOpened(_) => QUOTE_OPENED_EVENT_TYPE,
            Self::ServiceAdded(_) => SERVICE_ADDED_EVENT_TYPE,
            Self::ServiceRemoved(_) => SERVICE_REMOVED_EVENT_TYPE,
            Self::ServiceOptionUpdated(_) => SERVICE_OPTION_UPDATED_EVENT_TYPE,
            Self::AddOnToggled(_) => ADD_ON_TOGGLED_EVENT_TYPE,
            Self::EventDetailsUpdated(_) => EVENT_DETAILS_UPDATED_EVENT_TYPE,
            Self::QuoteReset(_) => QUOTE_RESET_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for quote builders.
#[derive(Debug, Clone)]
pub struct QuoteEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: QuoteEventKind,
}

impl DomainEvent for QuoteEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        serde_json::to_value(&self.kind).expect("QuoteEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
