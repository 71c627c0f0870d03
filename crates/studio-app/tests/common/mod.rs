//! Shared test helpers for application-level flows.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use studio_app::config::StudioConfig;
use studio_app::state::AppState;
use studio_event_store::InMemoryEventRepository;
use studio_test_support::{fixed_clock, init_test_tracing};

/// Config with no simulated latency.
pub fn test_config() -> StudioConfig {
    StudioConfig {
        inquiry_latency: Duration::ZERO,
        ..StudioConfig::default()
    }
}

/// State over a fixed clock and a fresh in-memory store.
pub fn test_state_with(config: StudioConfig) -> AppState {
    init_test_tracing();
    AppState::with_parts(
        config,
        Arc::new(fixed_clock()),
        Arc::new(InMemoryEventRepository::new()),
    )
}

/// State with the default test config.
pub fn test_state() -> AppState {
    test_state_with(test_config())
}
