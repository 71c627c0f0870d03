//! Slug-keyed catalog of the quizzes the engine can open.

use std::collections::HashMap;
use std::time::Duration;

use studio_core::error::DomainError;
use tracing::debug;
use uuid::Uuid;

use crate::domain::aggregates::QuizSession;
use crate::domain::quiz::{Quiz, QuizConfig};
use crate::domain::runner::QuizRunner;
use crate::domain::slug::ExperienceSlug;
use crate::quizzes::{
    CafeMenuQuiz, CoupleChemistryQuiz, FortuneQuiz, PersonalColorQuiz, PetMatchQuiz,
    ScentProfileQuiz, StyleProfilerQuiz, TravelStyleQuiz, WorkPersonaQuiz,
};

type OpenFn = fn(Uuid, Option<Duration>) -> Box<dyn QuizRunner>;

#[derive(Clone, Copy)]
struct Entry {
    config: &'static QuizConfig,
    open: OpenFn,
}

fn open_session<Q: Quiz>(id: Uuid, analyze_duration: Option<Duration>) -> Box<dyn QuizRunner> {
    Box::new(QuizSession::new(id, Q::default()).with_analyze_duration(analyze_duration))
}

/// Registry of quizzes by experience slug.
#[derive(Default)]
pub struct DemoRegistry {
    entries: HashMap<ExperienceSlug, Entry>,
    analyze_duration: Option<Duration>,
}

impl std::fmt::Debug for DemoRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoRegistry")
            .field("slugs", &self.slugs())
            .field("analyze_duration", &self.analyze_duration)
            .finish()
    }
}

impl DemoRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every quiz the site publishes.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register::<PersonalColorQuiz>();
        registry.register::<ScentProfileQuiz>();
        registry.register::<StyleProfilerQuiz>();
        registry.register::<CoupleChemistryQuiz>();
        registry.register::<FortuneQuiz>();
        registry.register::<TravelStyleQuiz>();
        registry.register::<WorkPersonaQuiz>();
        registry.register::<PetMatchQuiz>();
        registry.register::<CafeMenuQuiz>();
        registry
    }

    /// Makes every session opened from here pause for `duration` instead of
    /// its quiz's own analysis length.
    #[must_use]
    pub fn with_analyze_duration(mut self, duration: Option<Duration>) -> Self {
        self.analyze_duration = duration;
        self
    }

    /// Length of the analysis pause for the quiz behind `slug`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if no quiz is registered for `slug`.
    pub fn analyze_duration(&self, slug: ExperienceSlug) -> Result<Duration, DomainError> {
        let config = self.config(slug)?;
        Ok(self.analyze_duration.unwrap_or(config.analyze_duration))
    }

    /// Registers a quiz under the slug its config declares, replacing any
    /// earlier registration for that slug.
    pub fn register<Q: Quiz>(&mut self) {
        let config = Q::default().config();
        debug!(slug = %config.slug, steps = config.total_steps(), "registered quiz");
        self.entries.insert(
            config.slug,
            Entry {
                config,
                open: open_session::<Q>,
            },
        );
    }

    /// Creates an unstarted session of the quiz behind `slug`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if no quiz is registered for `slug`.
    pub fn open(&self, slug: ExperienceSlug, id: Uuid) -> Result<Box<dyn QuizRunner>, DomainError> {
        self.entry(slug).map(|entry| (entry.open)(id, self.analyze_duration))
    }

    /// Static configuration of the quiz behind `slug`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if no quiz is registered for `slug`.
    pub fn config(&self, slug: ExperienceSlug) -> Result<&'static QuizConfig, DomainError> {
        self.entry(slug).map(|entry| entry.config)
    }

    /// Registered slugs in catalog order.
    #[must_use]
    pub fn slugs(&self) -> Vec<ExperienceSlug> {
        let mut slugs: Vec<_> = self.entries.keys().copied().collect();
        slugs.sort();
        slugs
    }

    fn entry(&self, slug: ExperienceSlug) -> Result<Entry, DomainError> {
        self.entries
            .get(&slug)
            .copied()
            .ok_or_else(|| DomainError::Validation(format!("experience not available: {slug}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::QuizPhase;

    #[test]
    fn test_standard_registry_covers_every_experience() {
        // Arrange
        let registry = DemoRegistry::standard();

        // Act
        let slugs = registry.slugs();

        // Assert
        assert_eq!(slugs, ExperienceSlug::ALL.to_vec());
        for slug in ExperienceSlug::ALL {
            let config = registry.config(*slug).unwrap();
            assert_eq!(config.slug, *slug);
            assert!(!config.steps.is_empty(), "{slug} has no steps");
        }
    }

    #[test]
    fn test_open_returns_an_unstarted_session() {
        // Arrange
        let registry = DemoRegistry::standard();
        let id = Uuid::new_v4();

        // Act
        let runner = registry.open(ExperienceSlug::Fortune, id).unwrap();

        // Assert
        assert_eq!(runner.id(), id);
        assert_eq!(runner.version(), 0);
        assert_eq!(runner.phase(), QuizPhase::Step { index: 0 });
        assert_eq!(runner.config().slug, ExperienceSlug::Fortune);
    }

    #[test]
    fn test_analyze_duration_override_applies_to_every_quiz() {
        // Arrange
        let registry =
            DemoRegistry::standard().with_analyze_duration(Some(Duration::from_millis(75)));

        // Act
        let durations: Vec<_> = ExperienceSlug::ALL
            .iter()
            .map(|slug| registry.analyze_duration(*slug).unwrap())
            .collect();

        // Assert
        assert!(durations.iter().all(|d| *d == Duration::from_millis(75)));
        assert_eq!(
            DemoRegistry::standard()
                .analyze_duration(ExperienceSlug::PersonalColor)
                .unwrap(),
            Duration::from_millis(2500)
        );
    }

    #[test]
    fn test_open_unregistered_slug_returns_validation_error() {
        // Arrange
        let registry = DemoRegistry::new();

        // Act
        let result = registry.open(ExperienceSlug::PetMatch, Uuid::new_v4());

        // Assert
        match result {
            Err(DomainError::Validation(msg)) => assert!(msg.contains("pet-match")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
