//! Studio application host.
//!
//! Wires the demo engine and the quote calculator to one injectable
//! [`state::AppState`] and exposes the operations the site's views call.
//! The embedding process calls [`bootstrap`] once at startup and hands the
//! returned state to every view. Nothing here outlives the process.

pub mod config;
pub mod demo;
pub mod error;
pub mod inquiry;
pub mod quote;
pub mod state;
pub mod telemetry;

use crate::config::StudioConfig;
use crate::error::AppError;
use crate::state::AppState;

/// Reads `STUDIO_*` from the environment, installs the tracing subscriber
/// and builds the shared state.
///
/// # Errors
///
/// Returns `AppError::Config` for an invalid variable and
/// `AppError::Telemetry` if a subscriber is already installed.
pub fn bootstrap() -> Result<AppState, AppError> {
    start(StudioConfig::from_env()?)
}

/// Installs the tracing subscriber for `config` and builds the shared state.
///
/// # Errors
///
/// Returns `AppError::Config` for an invalid log filter and
/// `AppError::Telemetry` if a subscriber is already installed.
pub fn start(config: StudioConfig) -> Result<AppState, AppError> {
    telemetry::init_tracing(&config)?;
    tracing::info!(
        experiences = studio_demo::domain::slug::ExperienceSlug::ALL.len(),
        analyze_duration_override = ?config.analyze_duration_override,
        "studio host ready"
    );
    Ok(AppState::new(config))
}
