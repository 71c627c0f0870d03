//! Completing an analysis while other writers keep winning the race.

mod common;

use studio_core::error::DomainError;
use studio_core::locale::Locale;
use studio_demo::application::command_handlers::complete_analysis_with_retry;
use studio_demo::application::query_handlers::get_demo_session;
use studio_demo::domain::aggregates::{QuizPhase, Transition};
use studio_demo::domain::answers::AnswerValue;
use studio_demo::domain::commands::CompleteAnalysis;
use studio_demo::domain::slug::ExperienceSlug;
use studio_demo::registry::DemoRegistry;
use studio_event_store::InMemoryEventRepository;
use studio_test_support::{ConflictingEventRepository, FixedClock, fixed_clock};
use uuid::Uuid;

struct Contended {
    clock: FixedClock,
    repo: ConflictingEventRepository<InMemoryEventRepository>,
    registry: DemoRegistry,
}

impl Contended {
    fn new() -> Self {
        Self {
            clock: fixed_clock(),
            repo: ConflictingEventRepository::new(InMemoryEventRepository::new()),
            registry: DemoRegistry::standard(),
        }
    }

    /// Answers the personal color quiz and returns the pending completion.
    async fn analyzing_personal_color(&self) -> CompleteAnalysis {
        let (clock, repo, registry) = (&self.clock, &self.repo, &self.registry);
        let session_id =
            common::open(ExperienceSlug::PersonalColor, clock, repo, registry).await;
        let answers = [
            ("undertone", AnswerValue::choice("cool")),
            ("coloring", AnswerValue::choices(["hazel"])),
            ("preference", AnswerValue::choice("winter")),
        ];
        let mut last = None;
        for (step_id, value) in answers {
            let result =
                common::answer_and_advance(session_id, step_id, value, clock, repo, registry)
                    .await;
            last = Some(result.transition);
        }
        let Some(Transition::AnalysisStarted { attempt, .. }) = last else {
            panic!("expected AnalysisStarted, got {last:?}");
        };
        CompleteAnalysis {
            correlation_id: Uuid::new_v4(),
            session_id,
            attempt,
        }
    }

    async fn phase(&self, session_id: Uuid) -> QuizPhase {
        get_demo_session(session_id, Locale::Ko, &self.repo, &self.registry)
            .await
            .unwrap()
            .phase
    }
}

#[tokio::test]
async fn test_completion_survives_two_lost_races() {
    // Arrange
    let contended = Contended::new();
    let command = contended.analyzing_personal_color().await;
    contended.repo.conflict_next(2);

    // Act
    let result = complete_analysis_with_retry(
        &command,
        &contended.clock,
        &contended.repo,
        &contended.registry,
    )
    .await
    .unwrap();

    // Assert
    assert_eq!(
        result.transition,
        Transition::ResultRevealed {
            result_key: "summer"
        }
    );
    assert_eq!(contended.repo.refused_appends(), 2);
    assert_eq!(contended.phase(command.session_id).await, QuizPhase::Result);
}

#[tokio::test]
async fn test_completion_gives_up_after_three_lost_races() {
    // Arrange
    let contended = Contended::new();
    let command = contended.analyzing_personal_color().await;
    contended.repo.conflict_next(3);

    // Act
    let result = complete_analysis_with_retry(
        &command,
        &contended.clock,
        &contended.repo,
        &contended.registry,
    )
    .await;

    // Assert
    match result {
        Err(DomainError::ConcurrencyConflict { aggregate_id, .. }) => {
            assert_eq!(aggregate_id, command.session_id);
        }
        other => panic!("expected ConcurrencyConflict, got {other:?}"),
    }
    assert_eq!(contended.repo.refused_appends(), 3);
    assert_eq!(contended.phase(command.session_id).await, QuizPhase::Analyzing);
}
