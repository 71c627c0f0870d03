//! Object-safe view of a quiz session, so that the application layer can
//! drive any quiz without knowing its outcome type.

use studio_core::aggregate::AggregateRoot;
use studio_core::clock::Clock;
use studio_core::error::DomainError;
use studio_core::repository::StoredEvent;
use uuid::Uuid;

use super::aggregates::{QuizPhase, QuizSession, Transition};
use super::answers::{AnswerValue, QuizAnswers};
use super::events::{QuizEvent, QuizEventKind};
use super::quiz::{Quiz, QuizConfig, QuizOutcome, ResultData};

/// A revealed result: its key and its static content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealedResult {
    /// Outcome key.
    pub key: &'static str,
    /// Outcome content.
    pub data: &'static ResultData,
}

/// Drives one session of some quiz.
pub trait QuizRunner: Send + Sync + std::fmt::Debug {
    /// Session identifier.
    fn id(&self) -> Uuid;

    /// Number of events applied.
    fn version(&self) -> i64;

    /// Static configuration of the quiz.
    fn config(&self) -> &'static QuizConfig;

    /// Current phase.
    fn phase(&self) -> QuizPhase;

    /// Answers so far.
    fn answers(&self) -> &QuizAnswers;

    /// Latest analysis attempt.
    fn attempt(&self) -> u32;

    /// Whether "next" is enabled.
    fn can_proceed(&self) -> bool;

    /// Progress bar percentage.
    fn progress_percent(&self) -> u8;

    /// The revealed result, only in the result phase.
    fn result(&self) -> Option<RevealedResult>;

    /// See [`QuizSession::start`].
    fn start(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Transition;

    /// See [`QuizSession::record_answer`].
    fn record_answer(
        &mut self,
        step_id: &str,
        value: AnswerValue,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Transition;

    /// See [`QuizSession::go_next`].
    fn go_next(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Transition;

    /// See [`QuizSession::go_prev`].
    fn go_prev(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Transition;

    /// See [`QuizSession::restart`].
    fn restart(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Transition;

    /// See [`QuizSession::complete_analysis`].
    fn complete_analysis(
        &mut self,
        attempt: u32,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Transition;

    /// Applies one stored event during reconstitution.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the payload cannot be decoded
    /// or names a result this quiz does not define.
    fn replay(&mut self, stored: &StoredEvent) -> Result<(), DomainError>;

    /// Drains the uncommitted events in their stored form.
    fn take_uncommitted(&mut self) -> Vec<StoredEvent>;
}

impl<Q: Quiz> QuizRunner for QuizSession<Q> {
    fn id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        AggregateRoot::version(self)
    }

    fn config(&self) -> &'static QuizConfig {
        QuizSession::config(self)
    }

    fn phase(&self) -> QuizPhase {
        QuizSession::phase(self)
    }

    fn answers(&self) -> &QuizAnswers {
        QuizSession::answers(self)
    }

    fn attempt(&self) -> u32 {
        QuizSession::attempt(self)
    }

    fn can_proceed(&self) -> bool {
        QuizSession::can_proceed(self)
    }

    fn progress_percent(&self) -> u8 {
        QuizSession::progress_percent(self)
    }

    fn result(&self) -> Option<RevealedResult> {
        if QuizSession::phase(self) != QuizPhase::Result {
            return None;
        }
        self.outcome().map(|outcome| RevealedResult {
            key: outcome.key(),
            data: outcome.data(),
        })
    }

    fn start(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Transition {
        QuizSession::start(self, correlation_id, clock)
    }

    fn record_answer(
        &mut self,
        step_id: &str,
        value: AnswerValue,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Transition {
        QuizSession::record_answer(self, step_id, value, correlation_id, clock)
    }

    fn go_next(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Transition {
        QuizSession::go_next(self, correlation_id, clock)
    }

    fn go_prev(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Transition {
        QuizSession::go_prev(self, correlation_id, clock)
    }

    fn restart(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Transition {
        QuizSession::restart(self, correlation_id, clock)
    }

    fn complete_analysis(
        &mut self,
        attempt: u32,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Transition {
        QuizSession::complete_analysis(self, attempt, correlation_id, clock)
    }

    fn replay(&mut self, stored: &StoredEvent) -> Result<(), DomainError> {
        let kind: QuizEventKind = stored.decode()?;
        if let QuizEventKind::ResultRevealed(payload) = &kind
            && Q::Outcome::from_key(&payload.result_key).is_none()
        {
            return Err(DomainError::Infrastructure(format!(
                "unknown result key {:?} for {}",
                payload.result_key,
                QuizSession::config(self).slug
            )));
        }
        self.apply(&QuizEvent {
            metadata: stored.metadata(),
            kind,
        });
        Ok(())
    }

    fn take_uncommitted(&mut self) -> Vec<StoredEvent> {
        let stored = self
            .uncommitted_events()
            .iter()
            .map(StoredEvent::from_domain)
            .collect();
        self.clear_uncommitted_events();
        stored
    }
}
