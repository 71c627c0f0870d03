//! End-to-end session flows through the command and query handlers against
//! the in-memory event store.

mod common;

use studio_core::error::DomainError;
use studio_core::locale::Locale;
use studio_core::repository::{EventRepository, StoredEvent};
use studio_demo::application::command_handlers::{
    handle_complete_analysis, handle_go_next, handle_go_prev, handle_open_demo, handle_restart,
};
use studio_demo::application::query_handlers::get_demo_session;
use studio_demo::domain::aggregates::{QuizPhase, Transition};
use studio_demo::domain::answers::AnswerValue;
use studio_demo::domain::commands::{
    CompleteAnalysis, GoToNextStep, GoToPreviousStep, OpenDemo, RestartDemo,
};
use studio_demo::domain::events::{
    QUIZ_STARTED_EVENT_TYPE, QuizEventKind, QuizStarted, RESULT_REVEALED_EVENT_TYPE,
    ResultRevealed,
};
use studio_demo::domain::slug::ExperienceSlug;
use studio_demo::registry::DemoRegistry;
use studio_event_store::InMemoryEventRepository;
use studio_test_support::{RecordingEventRepository, fixed_clock};
use uuid::Uuid;

async fn personal_color_through_last_step(
    repo: &InMemoryEventRepository,
    registry: &DemoRegistry,
) -> (Uuid, Transition) {
    let clock = fixed_clock();
    let session_id = common::open(ExperienceSlug::PersonalColor, &clock, repo, registry).await;
    for (step_id, value) in [
        ("undertone", AnswerValue::choice("cool")),
        ("coloring", AnswerValue::choices(["hazel"])),
    ] {
        common::answer_and_advance(session_id, step_id, value, &clock, repo, registry).await;
    }
    let last = common::answer_and_advance(
        session_id,
        "preference",
        AnswerValue::choice("winter"),
        &clock,
        repo,
        registry,
    )
    .await;
    (session_id, last.transition)
}

fn complete(session_id: Uuid, attempt: u32) -> CompleteAnalysis {
    CompleteAnalysis {
        correlation_id: Uuid::new_v4(),
        session_id,
        attempt,
    }
}

#[tokio::test]
async fn test_personal_color_scenario_reveals_summer() {
    // Arrange
    let clock = fixed_clock();
    let repo = InMemoryEventRepository::new();
    let registry = DemoRegistry::standard();
    let (session_id, transition) = personal_color_through_last_step(&repo, &registry).await;

    // Act
    let Transition::AnalysisStarted { attempt, .. } = transition else {
        panic!("expected AnalysisStarted, got {transition:?}");
    };
    let analyzing = get_demo_session(session_id, Locale::Ko, &repo, &registry)
        .await
        .unwrap();
    let completed =
        handle_complete_analysis(&complete(session_id, attempt), &clock, &repo, &registry)
            .await
            .unwrap();
    let view = get_demo_session(session_id, Locale::Ko, &repo, &registry)
        .await
        .unwrap();

    // Assert
    assert_eq!(analyzing.phase, QuizPhase::Analyzing);
    assert_eq!(analyzing.progress_percent, 100);
    assert!(analyzing.result.is_none());

    assert_eq!(completed.transition, Transition::ResultRevealed { result_key: "summer" });
    assert_eq!(completed.stored_events.len(), 1);
    assert_eq!(completed.stored_events[0].event_type, RESULT_REVEALED_EVENT_TYPE);

    assert_eq!(view.phase, QuizPhase::Result);
    assert_eq!(view.progress_percent, 100);
    let result = view.result.unwrap();
    assert_eq!(result.key, "summer");
    assert_eq!(result.name, "여름 쿨 라이트");
}

#[tokio::test]
async fn test_result_name_follows_requested_locale() {
    // Arrange
    let clock = fixed_clock();
    let repo = InMemoryEventRepository::new();
    let registry = DemoRegistry::standard();
    let (session_id, _) = personal_color_through_last_step(&repo, &registry).await;
    handle_complete_analysis(&complete(session_id, 1), &clock, &repo, &registry)
        .await
        .unwrap();

    // Act
    let view = get_demo_session(session_id, Locale::En, &repo, &registry)
        .await
        .unwrap();

    // Assert
    assert_eq!(view.result.unwrap().name, "Summer Cool Light");
}

#[tokio::test]
async fn test_blocked_next_persists_nothing() {
    // Arrange
    let clock = fixed_clock();
    let repo = InMemoryEventRepository::new();
    let registry = DemoRegistry::standard();
    let session_id = common::open(ExperienceSlug::CafeMenu, &clock, &repo, &registry).await;

    // Act
    let result = handle_go_next(
        &GoToNextStep {
            correlation_id: Uuid::new_v4(),
            session_id,
        },
        &clock,
        &repo,
        &registry,
    )
    .await
    .unwrap();

    // Assert
    assert_eq!(result.transition, Transition::Blocked);
    assert!(result.stored_events.is_empty());
    assert_eq!(repo.load_events(session_id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_go_prev_from_result_returns_to_last_question() {
    // Arrange
    let clock = fixed_clock();
    let repo = InMemoryEventRepository::new();
    let registry = DemoRegistry::standard();
    let (session_id, _) = personal_color_through_last_step(&repo, &registry).await;
    handle_complete_analysis(&complete(session_id, 1), &clock, &repo, &registry)
        .await
        .unwrap();

    // Act
    let result = handle_go_prev(
        &GoToPreviousStep {
            correlation_id: Uuid::new_v4(),
            session_id,
        },
        &clock,
        &repo,
        &registry,
    )
    .await
    .unwrap();
    let view = get_demo_session(session_id, Locale::Ko, &repo, &registry)
        .await
        .unwrap();

    // Assert
    assert_eq!(result.transition, Transition::Retreated { to: 2 });
    assert_eq!(view.phase, QuizPhase::Step { index: 2 });
    assert_eq!(view.step.unwrap().id, "preference");
    assert!(view.result.is_none());
    assert_eq!(view.answers.choice("preference"), Some("winter"));
    assert!(view.can_proceed);
    assert_eq!(view.progress_percent, 66);
}

#[tokio::test]
async fn test_stale_completion_after_reentering_analysis_is_ignored() {
    // Arrange
    let clock = fixed_clock();
    let repo = InMemoryEventRepository::new();
    let registry = DemoRegistry::standard();
    let (session_id, _) = personal_color_through_last_step(&repo, &registry).await;
    let prev = GoToPreviousStep {
        correlation_id: Uuid::new_v4(),
        session_id,
    };
    handle_go_prev(&prev, &clock, &repo, &registry).await.unwrap();
    let next = GoToNextStep {
        correlation_id: Uuid::new_v4(),
        session_id,
    };
    let rerun = handle_go_next(&next, &clock, &repo, &registry).await.unwrap();

    // Act
    let stale = handle_complete_analysis(&complete(session_id, 1), &clock, &repo, &registry)
        .await
        .unwrap();

    // Assert
    assert!(matches!(rerun.transition, Transition::AnalysisStarted { attempt: 2, .. }));
    assert_eq!(stale.transition, Transition::Unchanged);
    assert!(stale.stored_events.is_empty());
    let view = get_demo_session(session_id, Locale::Ko, &repo, &registry)
        .await
        .unwrap();
    assert_eq!(view.phase, QuizPhase::Analyzing);
}

#[tokio::test]
async fn test_restart_clears_answers_and_result() {
    // Arrange
    let clock = fixed_clock();
    let repo = InMemoryEventRepository::new();
    let registry = DemoRegistry::standard();
    let (session_id, _) = personal_color_through_last_step(&repo, &registry).await;
    handle_complete_analysis(&complete(session_id, 1), &clock, &repo, &registry)
        .await
        .unwrap();

    // Act
    let result = handle_restart(
        &RestartDemo {
            correlation_id: Uuid::new_v4(),
            session_id,
        },
        &clock,
        &repo,
        &registry,
    )
    .await
    .unwrap();
    let view = get_demo_session(session_id, Locale::Ko, &repo, &registry)
        .await
        .unwrap();

    // Assert
    assert_eq!(result.transition, Transition::Restarted);
    assert_eq!(view.phase, QuizPhase::Step { index: 0 });
    assert!(view.answers.is_empty());
    assert!(view.result.is_none());
    assert!(!view.can_proceed);
    assert_eq!(view.progress_percent, 0);
}

#[tokio::test]
async fn test_opening_an_existing_session_id_conflicts() {
    // Arrange
    let clock = fixed_clock();
    let repo = InMemoryEventRepository::new();
    let registry = DemoRegistry::standard();
    let session_id = common::open(ExperienceSlug::Fortune, &clock, &repo, &registry).await;

    // Act
    let result = handle_open_demo(
        &OpenDemo {
            correlation_id: Uuid::new_v4(),
            session_id,
            slug: ExperienceSlug::PetMatch,
        },
        &clock,
        &repo,
        &registry,
    )
    .await;

    // Assert
    match result {
        Err(DomainError::ConcurrencyConflict { expected, actual, .. }) => {
            assert_eq!(expected, 0);
            assert_eq!(actual, 1);
        }
        other => panic!("expected ConcurrencyConflict, got {other:?}"),
    }
}

#[tokio::test]
async fn test_replaying_an_unknown_result_key_is_an_infrastructure_error() {
    // Arrange
    let session_id = Uuid::new_v4();
    let clock = fixed_clock();
    let stored = |sequence_number: i64, event_type: &str, kind: QuizEventKind| StoredEvent {
        event_id: Uuid::new_v4(),
        aggregate_id: session_id,
        event_type: event_type.to_owned(),
        payload: serde_json::to_value(kind).unwrap(),
        sequence_number,
        correlation_id: Uuid::new_v4(),
        causation_id: Uuid::new_v4(),
        occurred_at: clock.0,
    };
    let repo = RecordingEventRepository::new(vec![
        stored(
            1,
            QUIZ_STARTED_EVENT_TYPE,
            QuizEventKind::QuizStarted(QuizStarted {
                session_id,
                slug: ExperienceSlug::PersonalColor,
            }),
        ),
        stored(
            2,
            RESULT_REVEALED_EVENT_TYPE,
            QuizEventKind::ResultRevealed(ResultRevealed {
                session_id,
                attempt: 1,
                result_key: "monsoon".to_owned(),
            }),
        ),
    ]);
    let registry = DemoRegistry::standard();

    // Act
    let result = get_demo_session(session_id, Locale::Ko, &repo, &registry).await;

    // Assert
    match result {
        Err(DomainError::Infrastructure(msg)) => assert!(msg.contains("monsoon")),
        other => panic!("expected Infrastructure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_commands_on_unknown_session_return_not_found() {
    // Arrange
    let clock = fixed_clock();
    let repo = InMemoryEventRepository::new();
    let registry = DemoRegistry::standard();
    let session_id = Uuid::new_v4();

    // Act
    let result = handle_go_next(
        &GoToNextStep {
            correlation_id: Uuid::new_v4(),
            session_id,
        },
        &clock,
        &repo,
        &registry,
    )
    .await;

    // Assert
    assert!(matches!(result, Err(DomainError::AggregateNotFound(id)) if id == session_id));
}
