//! The analysis pause driven by real timers on a paused tokio clock.

mod common;

use std::sync::Arc;
use std::time::Duration;

use studio_core::clock::Clock;
use studio_core::locale::Locale;
use studio_core::repository::EventRepository;
use studio_demo::application::analysis_timer::AnalysisTimers;
use studio_demo::application::command_handlers::{complete_analysis_with_retry, handle_go_prev};
use studio_demo::application::query_handlers::get_demo_session;
use studio_demo::domain::aggregates::{QuizPhase, Transition};
use studio_demo::domain::answers::AnswerValue;
use studio_demo::domain::commands::{CompleteAnalysis, GoToPreviousStep};
use studio_demo::domain::slug::ExperienceSlug;
use studio_demo::registry::DemoRegistry;
use studio_event_store::InMemoryEventRepository;
use studio_test_support::fixed_clock;
use uuid::Uuid;

struct Harness {
    clock: Arc<dyn Clock>,
    repo: Arc<dyn EventRepository>,
    registry: Arc<DemoRegistry>,
    timers: AnalysisTimers,
}

impl Harness {
    fn new() -> Self {
        Self {
            clock: Arc::new(fixed_clock()),
            repo: Arc::new(InMemoryEventRepository::new()),
            registry: Arc::new(DemoRegistry::standard()),
            timers: AnalysisTimers::new(),
        }
    }

    /// Runs the scent quiz to its analysis pause and schedules completion.
    async fn start_scent_analysis(&self) -> (Uuid, Duration) {
        let (clock, repo, registry) = (&*self.clock, &*self.repo, &*self.registry);
        let session_id = common::open(ExperienceSlug::ScentProfile, clock, repo, registry).await;
        for (step_id, value) in [
            ("mood", AnswerValue::choice("calm")),
            ("place", AnswerValue::choice("forest")),
        ] {
            common::answer_and_advance(session_id, step_id, value, clock, repo, registry).await;
        }
        let last = common::answer_and_advance(
            session_id,
            "intensity",
            AnswerValue::Number(3),
            clock,
            repo,
            registry,
        )
        .await;
        let Transition::AnalysisStarted { attempt, duration } = last.transition else {
            panic!("expected AnalysisStarted, got {:?}", last.transition);
        };

        let (clock, repo, registry) = (
            Arc::clone(&self.clock),
            Arc::clone(&self.repo),
            Arc::clone(&self.registry),
        );
        self.timers.schedule(session_id, attempt, duration, async move {
            let command = CompleteAnalysis {
                correlation_id: Uuid::new_v4(),
                session_id,
                attempt,
            };
            complete_analysis_with_retry(&command, &*clock, &*repo, &registry)
                .await
                .unwrap();
        });
        (session_id, duration)
    }

    async fn phase(&self, session_id: Uuid) -> QuizPhase {
        get_demo_session(session_id, Locale::Ko, &*self.repo, &self.registry)
            .await
            .unwrap()
            .phase
    }
}

#[tokio::test(start_paused = true)]
async fn test_result_appears_once_the_pause_elapses() {
    // Arrange
    let harness = Harness::new();
    let (session_id, duration) = harness.start_scent_analysis().await;

    // Act
    let during = harness.phase(session_id).await;
    tokio::time::sleep(duration + Duration::from_millis(10)).await;
    let after = get_demo_session(session_id, Locale::Ko, &*harness.repo, &harness.registry)
        .await
        .unwrap();

    // Assert
    assert_eq!(during, QuizPhase::Analyzing);
    assert_eq!(after.phase, QuizPhase::Result);
    assert_eq!(after.result.unwrap().key, "woody");
    assert_eq!(harness.timers.pending_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_going_back_during_the_pause_cancels_the_result() {
    // Arrange
    let harness = Harness::new();
    let (session_id, duration) = harness.start_scent_analysis().await;

    // Act
    harness.timers.cancel(session_id);
    handle_go_prev(
        &GoToPreviousStep {
            correlation_id: Uuid::new_v4(),
            session_id,
        },
        &*harness.clock,
        &*harness.repo,
        &harness.registry,
    )
    .await
    .unwrap();
    tokio::time::sleep(duration * 2).await;

    // Assert
    assert_eq!(harness.phase(session_id).await, QuizPhase::Step { index: 2 });
}

#[tokio::test(start_paused = true)]
async fn test_uncancelled_stale_timer_still_changes_nothing() {
    // Arrange
    let harness = Harness::new();
    let (session_id, duration) = harness.start_scent_analysis().await;

    // Act
    handle_go_prev(
        &GoToPreviousStep {
            correlation_id: Uuid::new_v4(),
            session_id,
        },
        &*harness.clock,
        &*harness.repo,
        &harness.registry,
    )
    .await
    .unwrap();
    tokio::time::sleep(duration * 2).await;

    // Assert
    assert_eq!(harness.phase(session_id).await, QuizPhase::Step { index: 2 });
}
