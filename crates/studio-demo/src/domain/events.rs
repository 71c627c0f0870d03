//! Domain events for demo quiz sessions.

use serde::{Deserialize, Serialize};
use studio_core::event::{DomainEvent, EventMetadata};
use uuid::Uuid;

use super::answers::AnswerValue;
use super::slug::ExperienceSlug;

/// Emitted when a visitor opens a demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizStarted {
    /// The session identifier.
    pub session_id: Uuid,
    /// The experience being run.
    pub slug: ExperienceSlug,
}

/// Emitted when an answer is stored or overwritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecorded {
    /// The session identifier.
    pub session_id: Uuid,
    /// The step the answer belongs to.
    pub step_id: String,
    /// The submitted value.
    pub value: AnswerValue,
}

/// Emitted when the visitor moves between question steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepChanged {
    /// The session identifier.
    pub session_id: Uuid,
    /// The step index after the move.
    pub to: usize,
}

/// Emitted when the last step is confirmed and the analysis pause begins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisStarted {
    /// The session identifier.
    pub session_id: Uuid,
    /// Attempt counter; only a completion for this attempt reveals a result.
    pub attempt: u32,
    /// Length of the pause.
    pub duration_ms: u64,
}

/// Emitted once per attempt when the result is computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRevealed {
    /// The session identifier.
    pub session_id: Uuid,
    /// The attempt the result belongs to.
    pub attempt: u32,
    /// Key of the computed outcome.
    pub result_key: String,
}

/// Emitted when the visitor starts over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRestarted {
    /// The session identifier.
    pub session_id: Uuid,
}

/// Event type identifier for [`QuizStarted`].
pub const QUIZ_STARTED_EVENT_TYPE: &str = "demo.quiz_started";

/// Event type identifier for [`AnswerRecorded`].
pub const ANSWER_RECORDED_EVENT_TYPE: &str = "demo.answer_recorded";

/// Event type identifier for a forward [`StepChanged`].
pub const STEP_ADVANCED_EVENT_TYPE: &str = "demo.step_advanced";

/// Event type identifier for a backward [`StepChanged`].
pub const STEP_RETREATED_EVENT_TYPE: &str = "demo.step_retreated";

/// Event type identifier for [`AnalysisStarted`].
pub const ANALYSIS_STARTED_EVENT_TYPE: &str = "demo.analysis_started";

/// Event type identifier for [`ResultRevealed`].
pub const RESULT_REVEALED_EVENT_TYPE: &str = "demo.result_revealed";

/// Event type identifier for [`QuizRestarted`].
pub const QUIZ_RESTARTED_EVENT_TYPE: &str = "demo.quiz_restarted";

/// Event payload variants for demo sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum QuizEventKind {
    /// A session was opened.
    QuizStarted(QuizStarted),
    /// An answer was stored.
    AnswerRecorded(AnswerRecorded),
    /// The visitor moved forward.
    StepAdvanced(StepChanged),
    /// The visitor moved back.
    StepRetreated(StepChanged),
    /// The analysis pause began.
    AnalysisStarted(AnalysisStarted),
    /// The result was computed.
    ResultRevealed(ResultRevealed),
    /// The session was reset.
    QuizRestarted(QuizRestarted),
}

impl QuizEventKind {
    /// The event type string for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::QuizStarted(_) => QUIZ_STARTED_EVENT_TYPE,
            Self::AnswerRecorded(_) => ANSWER_RECORDED_EVENT_TYPE,
            Self::StepAdvanced(_) => STEP_ADVANCED_EVENT_TYPE,
            Self::StepRetreated(_) => STEP_RETREATED_EVENT_TYPE,
            Self::AnalysisStarted(_) => ANALYSIS_STARTED_EVENT_TYPE,
            Self::ResultRevealed(_) => RESULT_REVEALED_EVENT_TYPE,
            Self::QuizRestarted(_) => QUIZ_RESTARTED_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for demo sessions.
#[derive(Debug, Clone)]
pub struct QuizEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: QuizEventKind,
}

impl DomainEvent for QuizEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("QuizEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
