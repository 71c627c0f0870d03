//! The contract every concrete quiz fulfils.

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use serde::Serialize;
use studio_core::locale::Locale;

use super::answers::QuizAnswers;
use super::slug::ExperienceSlug;
use super::step::QuizStep;

/// Pre-authored content for one result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultData {
    /// Korean display name.
    pub name: &'static str,
    /// English display name.
    pub name_en: &'static str,
    /// One-line summary under the name.
    pub headline: &'static str,
    /// Body copy.
    pub description: &'static str,
    /// Hashtag-style keywords.
    pub keywords: &'static [&'static str],
    /// Emoji on the result card.
    pub emoji: &'static str,
    /// Accent color of the result card, `#rrggbb`.
    pub accent: &'static str,
}

impl ResultData {
    /// Display name for a locale.
    #[must_use]
    pub fn name_for(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ko => self.name,
            Locale::En => self.name_en,
        }
    }
}

/// The closed set of results one quiz can produce.
///
/// Implemented by a fieldless enum per quiz so that every value the scoring
/// function returns has content by construction.
pub trait QuizOutcome: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every outcome, in tie-break order.
    const ALL: &'static [Self];

    /// Stable key recorded in events and exposed to the view.
    fn key(self) -> &'static str;

    /// Content for this outcome.
    fn data(self) -> &'static ResultData;

    /// Looks up an outcome by its key.
    #[must_use]
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|o| o.key() == key)
    }
}

/// Static configuration of one quiz.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuizConfig {
    /// Experience the quiz is published under.
    pub slug: ExperienceSlug,
    /// Title on the quiz header.
    pub title: &'static str,
    /// Ordered question steps; never empty.
    pub steps: &'static [QuizStep],
    /// Length of the "analyzing" pause before the result.
    #[serde(serialize_with = "serialize_millis")]
    pub analyze_duration: Duration,
    /// Emoji animated during the pause.
    pub analyze_emoji: &'static str,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

impl QuizConfig {
    /// Number of question steps.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Index of the final question.
    #[must_use]
    pub fn last_step(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// A concrete quiz: configuration plus a pure scoring function.
pub trait Quiz: Debug + Default + Send + Sync + 'static {
    /// Results this quiz can produce.
    type Outcome: QuizOutcome;

    /// Static configuration.
    fn config(&self) -> &'static QuizConfig;

    /// Maps a complete answer set to a result. Must be total over every
    /// answer set whose steps all pass `can_proceed`.
    fn compute_result(&self, answers: &QuizAnswers) -> Self::Outcome;
}
