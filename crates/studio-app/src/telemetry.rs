//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, StudioConfig};
use crate::error::AppError;

/// Builds the filter: `RUST_LOG` when set, otherwise the configured
/// directive.
///
/// # Errors
///
/// Returns `AppError::Config` if the configured directive does not parse.
pub fn env_filter(config: &StudioConfig) -> Result<EnvFilter, AppError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.log_filter)
            .map_err(|e| AppError::Config(format!("STUDIO_LOG is not a valid filter: {e}")))
    })
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns `AppError::Config` for an invalid filter and
/// `AppError::Telemetry` if a global subscriber is already installed.
pub fn init_tracing(config: &StudioConfig) -> Result<(), AppError> {
    let filter = env_filter(config)?;
    let installed = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .try_init(),
    };
    installed.map_err(|e| AppError::Telemetry(e.to_string()))?;

    tracing::info!(
        log_format = ?config.log_format,
        locale = %config.default_locale,
        "studio telemetry initialized"
    );
    Ok(())
}
