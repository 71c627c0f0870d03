#![allow(dead_code)]

use studio_core::clock::Clock;
use studio_core::repository::EventRepository;
use studio_demo::application::command_handlers::{
    DemoCommandResult, handle_go_next, handle_open_demo, handle_record_answer,
};
use studio_demo::domain::answers::{AnswerValue, QuizAnswers};
use studio_demo::domain::commands::{GoToNextStep, OpenDemo, RecordAnswer};
use studio_demo::domain::quiz::Quiz;
use studio_demo::domain::slug::ExperienceSlug;
use studio_demo::registry::DemoRegistry;
use studio_test_support::init_test_tracing;
use uuid::Uuid;

/// Every complete answer set a quiz accepts: the cartesian product of each
/// step's answer domain.
pub fn every_answer_set<Q: Quiz>(quiz: &Q) -> Vec<QuizAnswers> {
    quiz.config()
        .steps
        .iter()
        .fold(vec![QuizAnswers::new()], |sets, step| {
            let domain = step.answer_domain();
            sets.iter()
                .flat_map(|partial| {
                    domain
                        .iter()
                        .map(move |value| partial.clone().with(step.id, value.clone()))
                })
                .collect()
        })
}

/// Opens a session and returns its id.
pub async fn open(
    slug: ExperienceSlug,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    registry: &DemoRegistry,
) -> Uuid {
    init_test_tracing();
    let session_id = Uuid::new_v4();
    handle_open_demo(
        &OpenDemo {
            correlation_id: Uuid::new_v4(),
            session_id,
            slug,
        },
        clock,
        repo,
        registry,
    )
    .await
    .unwrap();
    session_id
}

/// Records an answer then presses "next", returning what "next" did.
pub async fn answer_and_advance(
    session_id: Uuid,
    step_id: &str,
    value: AnswerValue,
    clock: &dyn Clock,
    repo: &dyn EventRepository,
    registry: &DemoRegistry,
) -> DemoCommandResult {
    handle_record_answer(
        &RecordAnswer {
            correlation_id: Uuid::new_v4(),
            session_id,
            step_id: step_id.to_owned(),
            value,
        },
        clock,
        repo,
        registry,
    )
    .await
    .unwrap();
    handle_go_next(
        &GoToNextStep {
            correlation_id: Uuid::new_v4(),
            session_id,
        },
        clock,
        repo,
        registry,
    )
    .await
    .unwrap()
}
