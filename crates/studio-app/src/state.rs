//! Shared application state.

use std::sync::Arc;

use studio_core::clock::{Clock, SystemClock};
use studio_core::locale::Locale;
use studio_core::repository::EventRepository;
use studio_demo::application::analysis_timer::AnalysisTimers;
use studio_demo::registry::DemoRegistry;
use studio_event_store::InMemoryEventRepository;

use crate::config::StudioConfig;

/// Everything the surfaces need, injected rather than global so tests build
/// independent instances.
#[derive(Clone)]
pub struct AppState {
    /// Time source for event timestamps and receipts.
    pub clock: Arc<dyn Clock>,
    /// Session-scoped event streams.
    pub event_repository: Arc<dyn EventRepository>,
    /// Experiences that can be opened.
    pub registry: Arc<DemoRegistry>,
    /// Pending analysis pauses.
    pub timers: Arc<AnalysisTimers>,
    /// Host configuration.
    pub config: Arc<StudioConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("registry", &self.registry)
            .field("timers", &self.timers)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Creates state with the wall clock, an empty in-memory store, and every
    /// standard experience registered.
    #[must_use]
    pub fn new(config: StudioConfig) -> Self {
        Self::with_parts(
            config,
            Arc::new(SystemClock),
            Arc::new(InMemoryEventRepository::new()),
        )
    }

    /// Creates state around the given clock and repository.
    #[must_use]
    pub fn with_parts(
        config: StudioConfig,
        clock: Arc<dyn Clock>,
        event_repository: Arc<dyn EventRepository>,
    ) -> Self {
        Self {
            clock,
            event_repository,
            registry: Arc::new(
                DemoRegistry::standard().with_analyze_duration(config.analyze_duration_override),
            ),
            timers: Arc::new(AnalysisTimers::new()),
            config: Arc::new(config),
        }
    }

    /// The locale a view renders in: `requested`, else the configured default.
    #[must_use]
    pub fn locale(&self, requested: Option<Locale>) -> Locale {
        requested.unwrap_or(self.config.default_locale)
    }
}
