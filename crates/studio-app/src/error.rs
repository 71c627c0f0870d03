//! Studio application error types.

use serde::Serialize;
use studio_core::error::DomainError;
use thiserror::Error;

/// Startup errors for the application host.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable is present but invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The tracing subscriber could not be installed.
    #[error("telemetry error: {0}")]
    Telemetry(String),
}

/// Error body handed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// View-facing wrapper around `DomainError`.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ViewError(pub DomainError);

impl From<DomainError> for ViewError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ViewError {
    /// Stable code the views branch on.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match &self.0 {
            DomainError::AggregateNotFound(_) => "not_found",
            DomainError::ConcurrencyConflict { .. } => "conflict",
            DomainError::Validation(_) => "invalid_request",
            DomainError::Infrastructure(_) => "internal",
        }
    }

    /// The body rendered for this error.
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.code(),
            message: self.0.to_string(),
        }
    }
}
