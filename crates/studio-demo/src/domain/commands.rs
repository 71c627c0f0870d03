//! Commands for demo quiz sessions.

use studio_core::command::Command;
use uuid::Uuid;

use super::answers::AnswerValue;
use super::slug::ExperienceSlug;

/// Command to open a new session for an experience.
#[derive(Debug, Clone)]
pub struct OpenDemo {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The identifier for the new session.
    pub session_id: Uuid,
    /// The experience to run.
    pub slug: ExperienceSlug,
}

impl Command for OpenDemo {
    fn command_type(&self) -> &'static str {
        "demo.open"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to store an answer (`onUpdate` in the widgets).
#[derive(Debug, Clone)]
pub struct RecordAnswer {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session identifier.
    pub session_id: Uuid,
    /// The step being answered.
    pub step_id: String,
    /// The submitted value.
    pub value: AnswerValue,
}

impl Command for RecordAnswer {
    fn command_type(&self) -> &'static str {
        "demo.record_answer"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to press "next".
#[derive(Debug, Clone)]
pub struct GoToNextStep {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session identifier.
    pub session_id: Uuid,
}

impl Command for GoToNextStep {
    fn command_type(&self) -> &'static str {
        "demo.go_next"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to press "back".
#[derive(Debug, Clone)]
pub struct GoToPreviousStep {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session identifier.
    pub session_id: Uuid,
}

impl Command for GoToPreviousStep {
    fn command_type(&self) -> &'static str {
        "demo.go_prev"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to start the quiz over.
#[derive(Debug, Clone)]
pub struct RestartDemo {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session identifier.
    pub session_id: Uuid,
}

impl Command for RestartDemo {
    fn command_type(&self) -> &'static str {
        "demo.restart"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command issued by the analysis timer when the pause elapses.
#[derive(Debug, Clone)]
pub struct CompleteAnalysis {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The session identifier.
    pub session_id: Uuid,
    /// The attempt the timer was scheduled for.
    pub attempt: u32,
}

impl Command for CompleteAnalysis {
    fn command_type(&self) -> &'static str {
        "demo.complete_analysis"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
