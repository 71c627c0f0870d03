//! Answers accumulated during a quiz session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One answer as the view layer submits it.
///
/// Serialized untagged so the JSON shapes the widgets produce map directly:
/// `"cool"`, `["hazel", "green"]`, `3`, `{"a": "yes", "b": "no"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// A single option id.
    Choice(String),
    /// Several option ids.
    Choices(Vec<String>),
    /// A numeric value from a scale or stepper.
    Number(i64),
    /// Paired choices, one per participant.
    Pair {
        /// First participant's option id.
        a: String,
        /// Second participant's option id.
        b: String,
    },
}

impl AnswerValue {
    /// Shorthand for a single choice.
    pub fn choice(id: impl Into<String>) -> Self {
        Self::Choice(id.into())
    }

    /// Shorthand for a multi-choice answer.
    pub fn choices<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Choices(ids.into_iter().map(Into::into).collect())
    }

    /// Shorthand for a paired answer.
    pub fn pair(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self::Pair {
            a: a.into(),
            b: b.into(),
        }
    }
}

/// Step id → answer. Keys are only ever overwritten; the map is cleared as a
/// whole when the quiz restarts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizAnswers(BTreeMap<String, AnswerValue>);

impl QuizAnswers {
    /// Creates an empty answer set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `step_id`, replacing any earlier answer.
    pub fn insert(&mut self, step_id: impl Into<String>, value: AnswerValue) {
        self.0.insert(step_id.into(), value);
    }

    /// Builder-style `insert`, handy for tables of answers.
    #[must_use]
    pub fn with(mut self, step_id: impl Into<String>, value: AnswerValue) -> Self {
        self.insert(step_id, value);
        self
    }

    /// Removes every answer.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns the raw answer for a step.
    #[must_use]
    pub fn get(&self, step_id: &str) -> Option<&AnswerValue> {
        self.0.get(step_id)
    }

    /// Returns the option id of a single-choice answer.
    #[must_use]
    pub fn choice(&self, step_id: &str) -> Option<&str> {
        match self.0.get(step_id) {
            Some(AnswerValue::Choice(id)) => Some(id),
            _ => None,
        }
    }

    /// Returns the option ids of a multi-choice answer, empty when absent.
    #[must_use]
    pub fn choices(&self, step_id: &str) -> &[String] {
        match self.0.get(step_id) {
            Some(AnswerValue::Choices(ids)) => ids,
            _ => &[],
        }
    }

    /// Returns a numeric answer.
    #[must_use]
    pub fn number(&self, step_id: &str) -> Option<i64> {
        match self.0.get(step_id) {
            Some(AnswerValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Returns both halves of a paired answer.
    #[must_use]
    pub fn pair(&self, step_id: &str) -> Option<(&str, &str)> {
        match self.0.get(step_id) {
            Some(AnswerValue::Pair { a, b }) => Some((a, b)),
            _ => None,
        }
    }

    /// Number of answered steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing has been answered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates answers in step-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}
