//! Aggregate root for a demo quiz session.

use std::time::Duration;

use serde::Serialize;
use studio_core::aggregate::AggregateRoot;
use studio_core::clock::Clock;
use studio_core::event::EventMetadata;
use tracing::debug;
use uuid::Uuid;

use super::answers::{AnswerValue, QuizAnswers};
use super::events::{
    AnalysisStarted, AnswerRecorded, QuizEvent, QuizEventKind, QuizRestarted, QuizStarted,
    ResultRevealed, StepChanged,
};
use super::quiz::{Quiz, QuizConfig, QuizOutcome};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizPhase {
    /// Showing question `index`.
    Step {
        /// Zero-based step index.
        index: usize,
    },
    /// The timed pause between the last answer and the result.
    Analyzing,
    /// Showing the computed result.
    Result,
}

/// What a command did to the session. Anything other than `Blocked` or
/// `Unchanged` raised exactly one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The session was opened.
    Started,
    /// An answer was stored.
    AnswerRecorded,
    /// "Next" pressed while the current step cannot proceed.
    Blocked,
    /// The command does not apply in the current phase.
    Unchanged,
    /// Moved forward to a question step.
    Advanced {
        /// New step index.
        to: usize,
    },
    /// Moved back to a question step.
    Retreated {
        /// New step index.
        to: usize,
    },
    /// The analysis pause began; the caller must schedule completion.
    AnalysisStarted {
        /// Attempt to complete.
        attempt: u32,
        /// How long to wait.
        duration: Duration,
    },
    /// The result was computed.
    ResultRevealed {
        /// Key of the outcome.
        result_key: &'static str,
    },
    /// Back to the first step with no answers.
    Restarted,
}

/// The aggregate root for one visitor's run through one quiz.
#[derive(Debug)]
pub struct QuizSession<Q: Quiz> {
    /// Aggregate identifier.
    pub id: Uuid,
    quiz: Q,
    /// Current version (events applied).
    pub(crate) version: i64,
    /// Whether `QuizStarted` has been applied.
    pub(crate) started: bool,
    /// Current phase.
    pub(crate) phase: QuizPhase,
    /// Answers so far.
    pub(crate) answers: QuizAnswers,
    /// Number of analyses started; identifies the pending one.
    pub(crate) attempt: u32,
    /// Result of the current attempt, once revealed.
    pub(crate) outcome: Option<Q::Outcome>,
    /// Replaces the quiz's own analysis pause when set.
    analyze_duration: Option<Duration>,
    /// Uncommitted events pending persistence.
    uncommitted_events: Vec<QuizEvent>,
}

impl<Q: Quiz> QuizSession<Q> {
    /// Creates a session that has not been started yet.
    #[must_use]
    pub fn new(id: Uuid, quiz: Q) -> Self {
        Self {
            id,
            quiz,
            version: 0,
            started: false,
            phase: QuizPhase::Step { index: 0 },
            answers: QuizAnswers::new(),
            attempt: 0,
            outcome: None,
            analyze_duration: None,
            uncommitted_events: Vec::new(),
        }
    }

    /// Uses `duration` for the analysis pause instead of the quiz's own.
    #[must_use]
    pub fn with_analyze_duration(mut self, duration: Option<Duration>) -> Self {
        self.analyze_duration = duration;
        self
    }

    /// Length of the analysis pause this session will wait.
    #[must_use]
    pub fn analyze_duration(&self) -> Duration {
        self.analyze_duration.unwrap_or(self.config().analyze_duration)
    }

    /// Static configuration of the quiz being run.
    #[must_use]
    pub fn config(&self) -> &'static QuizConfig {
        self.quiz.config()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Answers so far.
    #[must_use]
    pub fn answers(&self) -> &QuizAnswers {
        &self.answers
    }

    /// The revealed outcome, only while in `Result`.
    #[must_use]
    pub fn outcome(&self) -> Option<Q::Outcome> {
        self.outcome
    }

    /// Attempt counter of the latest analysis.
    #[must_use]
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Whether "next" is enabled. Always false outside question steps.
    #[must_use]
    pub fn can_proceed(&self) -> bool {
        match self.phase {
            QuizPhase::Step { index } => self
                .config()
                .steps
                .get(index)
                .is_some_and(|step| step.can_proceed(&self.answers)),
            QuizPhase::Analyzing | QuizPhase::Result => false,
        }
    }

    /// Progress bar percentage: 100 once the questions are done, otherwise
    /// the share of steps already passed.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        match self.phase {
            QuizPhase::Analyzing | QuizPhase::Result => 100,
            QuizPhase::Step { index } => {
                let total = self.config().total_steps().max(1);
                u8::try_from(index.min(total) * 100 / total).unwrap_or(100)
            }
        }
    }

    /// Applies `kind` and queues it for persistence.
    fn raise(&mut self, kind: QuizEventKind, correlation_id: Uuid, clock: &dyn Clock) {
        let event = QuizEvent {
            metadata: EventMetadata::for_command(
                kind.event_type(),
                self.id,
                self.version + 1,
                correlation_id,
                clock.now(),
            ),
            kind,
        };
        self.apply(&event);
        self.uncommitted_events.push(event);
    }

    /// Opens the session at the first step. Opening twice is a no-op.
    pub fn start(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Transition {
        if self.started {
            return Transition::Unchanged;
        }
        let slug = self.config().slug;
        self.raise(
            QuizEventKind::QuizStarted(QuizStarted {
                session_id: self.id,
                slug,
            }),
            correlation_id,
            clock,
        );
        Transition::Started
    }

    /// Stores an answer. Only question steps accept answers; the value is
    /// not checked here, `can_proceed` judges it when "next" is pressed.
    pub fn record_answer(
        &mut self,
        step_id: &str,
        value: AnswerValue,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Transition {
        if !matches!(self.phase, QuizPhase::Step { .. }) {
            return Transition::Unchanged;
        }
        self.raise(
            QuizEventKind::AnswerRecorded(AnswerRecorded {
                session_id: self.id,
                step_id: step_id.to_owned(),
                value,
            }),
            correlation_id,
            clock,
        );
        Transition::AnswerRecorded
    }

    /// Advances to the next step, or from the last step into the analysis
    /// pause. Blocked while the current step cannot proceed.
    pub fn go_next(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Transition {
        let QuizPhase::Step { index } = self.phase else {
            return Transition::Unchanged;
        };
        if !self.can_proceed() {
            return Transition::Blocked;
        }

        let config = self.config();
        if index < config.last_step() {
            let to = index + 1;
            self.raise(
                QuizEventKind::StepAdvanced(StepChanged {
                    session_id: self.id,
                    to,
                }),
                correlation_id,
                clock,
            );
            return Transition::Advanced { to };
        }

        let attempt = self.attempt + 1;
        let duration = self.analyze_duration();
        self.raise(
            QuizEventKind::AnalysisStarted(AnalysisStarted {
                session_id: self.id,
                attempt,
                duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            }),
            correlation_id,
            clock,
        );
        Transition::AnalysisStarted { attempt, duration }
    }

    /// Goes back one step. From the analysis pause or the result it returns
    /// to the last question; at the first step it does nothing.
    pub fn go_prev(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Transition {
        let to = match self.phase {
            QuizPhase::Step { index: 0 } => return Transition::Unchanged,
            QuizPhase::Step { index } => index - 1,
            QuizPhase::Analyzing | QuizPhase::Result => self.config().last_step(),
        };
        self.raise(
            QuizEventKind::StepRetreated(StepChanged {
                session_id: self.id,
                to,
            }),
            correlation_id,
            clock,
        );
        Transition::Retreated { to }
    }

    /// Resets to the first step with no answers, from any phase.
    pub fn restart(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Transition {
        self.raise(
            QuizEventKind::QuizRestarted(QuizRestarted {
                session_id: self.id,
            }),
            correlation_id,
            clock,
        );
        Transition::Restarted
    }

    /// Ends the analysis pause of `attempt` by computing the result. The
    /// scoring function runs only here, and only while the session is still
    /// analyzing that attempt, so it runs at most once per attempt.
    pub fn complete_analysis(
        &mut self,
        attempt: u32,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Transition {
        if self.phase != QuizPhase::Analyzing || attempt != self.attempt {
            debug!(
                session_id = %self.id,
                attempt,
                current_attempt = self.attempt,
                "ignoring stale analysis completion"
            );
            return Transition::Unchanged;
        }

        let outcome = self.quiz.compute_result(&self.answers);
        let result_key = outcome.key();
        self.raise(
            QuizEventKind::ResultRevealed(ResultRevealed {
                session_id: self.id,
                attempt,
                result_key: result_key.to_owned(),
            }),
            correlation_id,
            clock,
        );
        Transition::ResultRevealed { result_key }
    }
}

impl<Q: Quiz> AggregateRoot for QuizSession<Q> {
    type Event = QuizEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            QuizEventKind::QuizStarted(_) => {
                self.started = true;
                self.phase = QuizPhase::Step { index: 0 };
            }
            QuizEventKind::AnswerRecorded(payload) => {
                self.answers
                    .insert(payload.step_id.clone(), payload.value.clone());
            }
            QuizEventKind::StepAdvanced(payload) | QuizEventKind::StepRetreated(payload) => {
                self.phase = QuizPhase::Step { index: payload.to };
                self.outcome = None;
            }
            QuizEventKind::AnalysisStarted(payload) => {
                self.phase = QuizPhase::Analyzing;
                self.attempt = payload.attempt;
                self.outcome = None;
            }
            QuizEventKind::ResultRevealed(payload) => {
                self.phase = QuizPhase::Result;
                self.outcome = Q::Outcome::from_key(&payload.result_key);
            }
            QuizEventKind::QuizRestarted(_) => {
                self.phase = QuizPhase::Step { index: 0 };
                self.answers.clear();
                self.outcome = None;
            }
        }
        self.version += 1;
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn clear_uncommitted_events(&mut self) {
        self.uncommitted_events.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use studio_core::event::DomainEvent;
    use studio_test_support::fixed_clock;

    use super::*;
    use crate::domain::events::{ANALYSIS_STARTED_EVENT_TYPE, QUIZ_STARTED_EVENT_TYPE};
    use crate::domain::quiz::ResultData;
    use crate::domain::slug::ExperienceSlug;
    use crate::domain::step::{ChoiceOption, QuizStep, StepKind};

    static COMPUTE_CALLS: AtomicUsize = AtomicUsize::new(0);

    const MOODS: &[ChoiceOption] = &[
        ChoiceOption::new("calm", "차분", "🌊"),
        ChoiceOption::new("bold", "대담", "🔥"),
    ];

    const STEPS: &[QuizStep] = &[
        QuizStep {
            id: "mood",
            prompt: "오늘 기분은?",
            kind: StepKind::SingleChoice { options: MOODS },
        },
        QuizStep {
            id: "energy",
            prompt: "에너지는?",
            kind: StepKind::Scale { min: 1, max: 5 },
        },
    ];

    const CONFIG: QuizConfig = QuizConfig {
        slug: ExperienceSlug::CafeMenu,
        title: "테스트",
        steps: STEPS,
        analyze_duration: Duration::from_millis(1500),
        analyze_emoji: "☕",
    };

    const DATA: ResultData = ResultData {
        name: "결과",
        name_en: "Result",
        headline: "",
        description: "",
        keywords: &[],
        emoji: "✨",
        accent: "#ffffff",
    };

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Vibe {
        Quiet,
        Loud,
    }

    impl QuizOutcome for Vibe {
        const ALL: &'static [Self] = &[Self::Quiet, Self::Loud];

        fn key(self) -> &'static str {
            match self {
                Self::Quiet => "quiet",
                Self::Loud => "loud",
            }
        }

        fn data(self) -> &'static ResultData {
            &DATA
        }
    }

    #[derive(Debug, Default)]
    struct VibeQuiz;

    impl Quiz for VibeQuiz {
        type Outcome = Vibe;

        fn config(&self) -> &'static QuizConfig {
            &CONFIG
        }

        fn compute_result(&self, answers: &QuizAnswers) -> Vibe {
            COMPUTE_CALLS.fetch_add(1, Ordering::SeqCst);
            if answers.choice("mood") == Some("bold") {
                Vibe::Loud
            } else {
                Vibe::Quiet
            }
        }
    }

    fn started() -> QuizSession<VibeQuiz> {
        let mut session = QuizSession::new(Uuid::new_v4(), VibeQuiz);
        session.start(Uuid::new_v4(), &fixed_clock());
        session
    }

    fn answered_through_last_step() -> QuizSession<VibeQuiz> {
        let clock = fixed_clock();
        let mut session = started();
        session.record_answer("mood", AnswerValue::choice("bold"), Uuid::new_v4(), &clock);
        session.go_next(Uuid::new_v4(), &clock);
        session.record_answer("energy", AnswerValue::Number(4), Uuid::new_v4(), &clock);
        session
    }

    #[test]
    fn test_start_produces_quiz_started_event() {
        // Arrange
        let session_id = Uuid::new_v4();
        let correlation_id = Uuid::new_v4();
        let clock = fixed_clock();
        let mut session = QuizSession::new(session_id, VibeQuiz);

        // Act
        let transition = session.start(correlation_id, &clock);

        // Assert
        assert_eq!(transition, Transition::Started);
        let events = session.uncommitted_events();
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.event_type(), QUIZ_STARTED_EVENT_TYPE);

        let meta = event.metadata();
        assert_eq!(meta.aggregate_id, session_id);
        assert_eq!(meta.sequence_number, 1);
        assert_eq!(meta.correlation_id, correlation_id);
        assert_eq!(meta.causation_id, correlation_id);
        assert_eq!(meta.occurred_at, clock.0);

        match &event.kind {
            QuizEventKind::QuizStarted(payload) => {
                assert_eq!(payload.session_id, session_id);
                assert_eq!(payload.slug, ExperienceSlug::CafeMenu);
            }
            other => panic!("expected QuizStarted, got {other:?}"),
        }
        assert_eq!(session.phase(), QuizPhase::Step { index: 0 });
        assert_eq!(session.progress_percent(), 0);
    }

    #[test]
    fn test_start_twice_is_a_no_op() {
        // Arrange
        let mut session = started();

        // Act
        let transition = session.start(Uuid::new_v4(), &fixed_clock());

        // Assert
        assert_eq!(transition, Transition::Unchanged);
        assert_eq!(session.uncommitted_events().len(), 1);
    }

    #[test]
    fn test_go_next_is_blocked_without_a_valid_answer() {
        // Arrange
        let clock = fixed_clock();
        let mut session = started();
        session.record_answer("mood", AnswerValue::choice("sleepy"), Uuid::new_v4(), &clock);

        // Act
        let transition = session.go_next(Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(transition, Transition::Blocked);
        assert_eq!(session.phase(), QuizPhase::Step { index: 0 });
        assert!(!session.can_proceed());
    }

    #[test]
    fn test_go_next_advances_and_reports_progress() {
        // Arrange
        let clock = fixed_clock();
        let mut session = started();
        session.record_answer("mood", AnswerValue::choice("calm"), Uuid::new_v4(), &clock);

        // Act
        let transition = session.go_next(Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(transition, Transition::Advanced { to: 1 });
        assert_eq!(session.phase(), QuizPhase::Step { index: 1 });
        assert_eq!(session.progress_percent(), 50);
        assert_eq!(session.version(), 3);
    }

    #[test]
    fn test_go_next_on_last_step_starts_analysis() {
        // Arrange
        let clock = fixed_clock();
        let mut session = answered_through_last_step();

        // Act
        let transition = session.go_next(Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(
            transition,
            Transition::AnalysisStarted {
                attempt: 1,
                duration: Duration::from_millis(1500),
            }
        );
        assert_eq!(session.phase(), QuizPhase::Analyzing);
        assert_eq!(session.progress_percent(), 100);
        let last = session.uncommitted_events().last().unwrap();
        assert_eq!(last.event_type(), ANALYSIS_STARTED_EVENT_TYPE);
    }

    #[test]
    fn test_analyze_duration_override_reaches_event_and_transition() {
        // Arrange
        let clock = fixed_clock();
        let mut session = answered_through_last_step()
            .with_analyze_duration(Some(Duration::from_millis(40)));

        // Act
        let transition = session.go_next(Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(session.analyze_duration(), Duration::from_millis(40));
        assert_eq!(
            transition,
            Transition::AnalysisStarted {
                attempt: 1,
                duration: Duration::from_millis(40),
            }
        );
        match &session.uncommitted_events().last().unwrap().kind {
            QuizEventKind::AnalysisStarted(payload) => assert_eq!(payload.duration_ms, 40),
            other => panic!("expected AnalysisStarted, got {other:?}"),
        }
    }

    #[test]
    fn test_answers_are_ignored_outside_question_steps() {
        // Arrange
        let clock = fixed_clock();
        let mut session = answered_through_last_step();
        session.go_next(Uuid::new_v4(), &clock);
        let version = session.version();

        // Act
        let transition =
            session.record_answer("mood", AnswerValue::choice("calm"), Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(transition, Transition::Unchanged);
        assert_eq!(session.version(), version);
        assert_eq!(session.answers().choice("mood"), Some("bold"));
    }

    #[test]
    fn test_complete_analysis_reveals_result_once() {
        // Arrange
        let clock = fixed_clock();
        let mut session = answered_through_last_step();
        session.go_next(Uuid::new_v4(), &clock);
        let before = COMPUTE_CALLS.load(Ordering::SeqCst);

        // Act
        let first = session.complete_analysis(1, Uuid::new_v4(), &clock);
        let second = session.complete_analysis(1, Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(first, Transition::ResultRevealed { result_key: "loud" });
        assert_eq!(second, Transition::Unchanged);
        assert_eq!(session.phase(), QuizPhase::Result);
        assert_eq!(session.outcome(), Some(Vibe::Loud));
        assert!(COMPUTE_CALLS.load(Ordering::SeqCst) > before);
    }

    #[test]
    fn test_stale_attempt_does_not_reveal_a_result() {
        // Arrange
        let clock = fixed_clock();
        let mut session = answered_through_last_step();
        session.go_next(Uuid::new_v4(), &clock);
        session.go_prev(Uuid::new_v4(), &clock);
        session.go_next(Uuid::new_v4(), &clock);

        // Act
        let stale = session.complete_analysis(1, Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(stale, Transition::Unchanged);
        assert_eq!(session.phase(), QuizPhase::Analyzing);
        assert_eq!(session.attempt(), 2);
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn test_go_prev_from_result_returns_to_last_step_keeping_answers() {
        // Arrange
        let clock = fixed_clock();
        let mut session = answered_through_last_step();
        session.go_next(Uuid::new_v4(), &clock);
        session.complete_analysis(1, Uuid::new_v4(), &clock);

        // Act
        let transition = session.go_prev(Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(transition, Transition::Retreated { to: 1 });
        assert_eq!(session.phase(), QuizPhase::Step { index: 1 });
        assert_eq!(session.outcome(), None);
        assert_eq!(session.answers().number("energy"), Some(4));
    }

    #[test]
    fn test_go_prev_on_first_step_is_a_no_op() {
        // Arrange
        let mut session = started();

        // Act
        let transition = session.go_prev(Uuid::new_v4(), &fixed_clock());

        // Assert
        assert_eq!(transition, Transition::Unchanged);
        assert_eq!(session.version(), 1);
    }

    #[test]
    fn test_restart_clears_answers_from_any_phase() {
        // Arrange
        let clock = fixed_clock();
        let mut session = answered_through_last_step();
        session.go_next(Uuid::new_v4(), &clock);
        session.complete_analysis(1, Uuid::new_v4(), &clock);

        // Act
        let transition = session.restart(Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(transition, Transition::Restarted);
        assert_eq!(session.phase(), QuizPhase::Step { index: 0 });
        assert!(session.answers().is_empty());
        assert_eq!(session.outcome(), None);
        assert_eq!(session.progress_percent(), 0);
    }

    #[test]
    fn test_sequence_numbers_follow_version() {
        // Arrange
        let session = answered_through_last_step();

        // Act
        let sequence: Vec<i64> = session
            .uncommitted_events()
            .iter()
            .map(|e| e.metadata().sequence_number)
            .collect();

        // Assert
        assert_eq!(sequence, vec![1, 2, 3, 4]);
        assert_eq!(session.version(), 4);
    }
}
