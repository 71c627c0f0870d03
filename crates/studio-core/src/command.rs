//! Command abstractions.

use uuid::Uuid;

/// A user action addressed to one aggregate.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Stable name of the command, used in logs.
    fn command_type(&self) -> &'static str;

    /// Correlation ID linking the command to the events it raises.
    fn correlation_id(&self) -> Uuid;
}
