//! Commands for quote builders.

use studio_core::command::Command;
use uuid::Uuid;

use super::catalog::{AddOnId, ServiceKey};
use super::details::EventDetailsPatch;
use super::estimate::OptionValue;

macro_rules! quote_command {
    ($name:ident, $type:literal) => {
        impl Command for $name {
            fn command_type(&self) -> &'static str {
                $type
            }

            fn correlation_id(&self) -> Uuid {
                self.correlation_id
            }
        }
    };
}

/// Command to open an empty quote.
#[derive(Debug, Clone)]
pub struct OpenQuote {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The identifier for the new quote.
    pub quote_id: Uuid,
}

/// Command to add a service from the catalog.
#[derive(Debug, Clone)]
pub struct AddService {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The quote identifier.
    pub quote_id: Uuid,
    /// Identifier for the new instance, chosen by the caller.
    pub instance_id: Uuid,
    /// The catalog service.
    pub service: ServiceKey,
}

/// Command to remove a service instance.
#[derive(Debug, Clone)]
pub struct RemoveService {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The quote identifier.
    pub quote_id: Uuid,
    /// The instance to remove.
    pub instance_id: Uuid,
}

/// Command to change one option of a service instance.
#[derive(Debug, Clone)]
pub struct UpdateServiceOption {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The quote identifier.
    pub quote_id: Uuid,
    /// The instance to configure.
    pub instance_id: Uuid,
    /// The option id within the service.
    pub option_id: String,
    /// The requested value.
    pub value: OptionValue,
}

/// Command to flip an add-on.
#[derive(Debug, Clone)]
pub struct ToggleAddOn {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The quote identifier.
    pub quote_id: Uuid,
    /// The add-on.
    pub add_on: AddOnId,
}

/// Command to edit event details.
#[derive(Debug, Clone)]
pub struct UpdateEventDetails {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The quote identifier.
    pub quote_id: Uuid,
    /// The fields to change.
    pub patch: EventDetailsPatch,
}

/// Command to clear every selection.
#[derive(Debug, Clone)]
pub struct ResetQuote {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The quote identifier.
    pub quote_id: Uuid,
}

quote_command!(OpenQuote, "quote.open");
quote_command!(AddService, "quote.add_service");
quote_command!(RemoveService, "quote.remove_service");
quote_command!(UpdateServiceOption, "quote.update_service_option");
quote_command!(ToggleAddOn, "quote.toggle_add_on");
quote_command!(UpdateEventDetails, "quote.update_event_details");
quote_command!(ResetQuote, "quote.reset");
