//! Errors shared by the demo and quote streams.

use thiserror::Error;
use uuid::Uuid;

/// Why a session or quote command could not run.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The session or quote was never opened, or has been closed.
    #[error("no open session or quote with id {0}")]
    AggregateNotFound(Uuid),

    /// Another command on the same session or quote appended first.
    #[error("stream {aggregate_id} is at version {actual}, command expected {expected}")]
    ConcurrencyConflict {
        /// The session or quote id.
        aggregate_id: Uuid,
        /// The version the command was decided against.
        expected: i64,
        /// The version found in the stream.
        actual: i64,
    },

    /// A request the engine refuses, such as an unknown experience slug or
    /// service key.
    #[error("rejected: {0}")]
    Validation(String),

    /// A stream that cannot be replayed, or a store failure.
    #[error("session store: {0}")]
    Infrastructure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message_names_the_stream_and_both_versions() {
        // Arrange
        let aggregate_id = Uuid::new_v4();

        // Act
        let message = DomainError::ConcurrencyConflict {
            aggregate_id,
            expected: 4,
            actual: 5,
        }
        .to_string();

        // Assert
        assert_eq!(
            message,
            format!("stream {aggregate_id} is at version 5, command expected 4")
        );
    }
}
