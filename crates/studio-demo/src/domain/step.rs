//! Static step descriptors and the gate that enables "next".

use serde::Serialize;

use super::answers::{AnswerValue, QuizAnswers};

/// One selectable option of a choice step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    /// Option id stored in the answers.
    pub id: &'static str,
    /// Korean label.
    pub label: &'static str,
    /// Emoji shown on the option card.
    pub emoji: &'static str,
}

impl ChoiceOption {
    /// Declares an option.
    #[must_use]
    pub const fn new(id: &'static str, label: &'static str, emoji: &'static str) -> Self {
        Self { id, label, emoji }
    }
}

/// The input widget a step renders and the answer shape it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepKind {
    /// Exactly one option.
    SingleChoice {
        /// Declared options.
        options: &'static [ChoiceOption],
    },
    /// Between `min` and `max` distinct options.
    MultiChoice {
        /// Declared options.
        options: &'static [ChoiceOption],
        /// Fewest selections that enable "next".
        min: usize,
        /// Most selections allowed.
        max: usize,
    },
    /// An integer on an inclusive scale.
    Scale {
        /// Lowest value.
        min: i64,
        /// Highest value.
        max: i64,
    },
    /// One option per participant, drawn from the same list.
    PairedChoice {
        /// Declared options.
        options: &'static [ChoiceOption],
    },
}

/// Static descriptor of one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizStep {
    /// Key under which the answer is stored.
    pub id: &'static str,
    /// Prompt shown above the widget.
    pub prompt: &'static str,
    /// Widget and answer shape.
    pub kind: StepKind,
}

fn declares(options: &[ChoiceOption], id: &str) -> bool {
    options.iter().any(|o| o.id == id)
}

impl QuizStep {
    /// Whether the current answers let the visitor leave this step.
    #[must_use]
    pub fn can_proceed(&self, answers: &QuizAnswers) -> bool {
        match (self.kind, answers.get(self.id)) {
            (StepKind::SingleChoice { options }, Some(AnswerValue::Choice(id))) => {
                declares(options, id)
            }
            (StepKind::MultiChoice { options, min, max }, Some(AnswerValue::Choices(ids))) => {
                let distinct = ids
                    .iter()
                    .enumerate()
                    .all(|(i, id)| !ids[..i].contains(id));
                distinct
                    && (min..=max).contains(&ids.len())
                    && ids.iter().all(|id| declares(options, id))
            }
            (StepKind::Scale { min, max }, Some(AnswerValue::Number(n))) => (min..=max).contains(n),
            (StepKind::PairedChoice { options }, Some(AnswerValue::Pair { a, b })) => {
                declares(options, a) && declares(options, b)
            }
            _ => false,
        }
    }

    /// Every answer this step accepts, in declaration order. Multi-choice
    /// steps yield each subset of allowed size in option order.
    #[must_use]
    pub fn answer_domain(&self) -> Vec<AnswerValue> {
        match self.kind {
            StepKind::SingleChoice { options } => options
                .iter()
                .map(|o| AnswerValue::choice(o.id))
                .collect(),
            StepKind::MultiChoice { options, min, max } => {
                let mut domain = Vec::new();
                for mask in 1u32..(1 << options.len()) {
                    let picked: Vec<&str> = options
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| mask & (1 << i) != 0)
                        .map(|(_, o)| o.id)
                        .collect();
                    if (min..=max).contains(&picked.len()) {
                        domain.push(AnswerValue::choices(picked));
                    }
                }
                domain
            }
            StepKind::Scale { min, max } => (min..=max).map(AnswerValue::Number).collect(),
            StepKind::PairedChoice { options } => options
                .iter()
                .flat_map(|a| options.iter().map(|b| AnswerValue::pair(a.id, b.id)))
                .collect(),
        }
    }
}
