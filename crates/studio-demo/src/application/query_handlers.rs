//! Query handlers for demo quiz sessions.
//!
//! Sessions are reconstituted from their stream and flattened into the
//! serializable views the widgets render.

use serde::Serialize;
use studio_core::error::DomainError;
use studio_core::locale::Locale;
use studio_core::repository::EventRepository;
use uuid::Uuid;

use crate::application::command_handlers;
use crate::domain::aggregates::QuizPhase;
use crate::domain::answers::QuizAnswers;
use crate::domain::slug::ExperienceSlug;
use crate::domain::step::QuizStep;
use crate::registry::DemoRegistry;

/// The revealed result, localized.
#[derive(Debug, Clone, Serialize)]
pub struct ResultView {
    /// Outcome key.
    pub key: &'static str,
    /// Display name in the requested locale.
    pub name: &'static str,
    /// One-line summary.
    pub headline: &'static str,
    /// Body copy.
    pub description: &'static str,
    /// Hashtag keywords.
    pub keywords: &'static [&'static str],
    /// Card emoji.
    pub emoji: &'static str,
    /// Card accent color.
    pub accent: &'static str,
}

/// Read-only view of a session.
#[derive(Debug, Clone, Serialize)]
pub struct DemoSessionView {
    /// The session identifier.
    pub session_id: Uuid,
    /// The experience being run.
    pub slug: ExperienceSlug,
    /// Quiz title.
    pub title: &'static str,
    /// Current phase.
    pub phase: QuizPhase,
    /// The question on screen, only during question steps.
    pub step: Option<QuizStep>,
    /// Number of question steps.
    pub total_steps: usize,
    /// Progress bar percentage.
    pub progress_percent: u8,
    /// Whether "next" is enabled.
    pub can_proceed: bool,
    /// Answers so far.
    pub answers: QuizAnswers,
    /// Emoji animated during the analysis pause.
    pub analyze_emoji: &'static str,
    /// The result, only in the result phase.
    pub result: Option<ResultView>,
    /// Current version (event count).
    pub version: i64,
}

/// One entry of the experience catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceSummary {
    /// Route slug.
    pub slug: ExperienceSlug,
    /// Quiz title.
    pub title: &'static str,
    /// Number of question steps.
    pub total_steps: usize,
    /// Length of the analysis pause in milliseconds.
    pub analyze_duration_ms: u64,
}

/// Retrieves a session by id, with result content in `locale`.
///
/// # Errors
///
/// Returns `DomainError::AggregateNotFound` if no events exist for the id.
/// Returns `DomainError::Infrastructure` if the stream cannot be replayed.
pub async fn get_demo_session(
    session_id: Uuid,
    locale: Locale,
    repo: &dyn EventRepository,
    registry: &DemoRegistry,
) -> Result<DemoSessionView, DomainError> {
    let stored_events = repo.load_events(session_id).await?;
    if stored_events.is_empty() {
        return Err(DomainError::AggregateNotFound(session_id));
    }
    let runner = command_handlers::reconstitute(session_id, &stored_events, registry)?;
    let config = runner.config();
    let phase = runner.phase();

    let step = match phase {
        QuizPhase::Step { index } => config.steps.get(index).copied(),
        QuizPhase::Analyzing | QuizPhase::Result => None,
    };
    let result = runner.result().map(|revealed| ResultView {
        key: revealed.key,
        name: revealed.data.name_for(locale),
        headline: revealed.data.headline,
        description: revealed.data.description,
        keywords: revealed.data.keywords,
        emoji: revealed.data.emoji,
        accent: revealed.data.accent,
    });

    Ok(DemoSessionView {
        session_id,
        slug: config.slug,
        title: config.title,
        phase,
        step,
        total_steps: config.total_steps(),
        progress_percent: runner.progress_percent(),
        can_proceed: runner.can_proceed(),
        answers: runner.answers().clone(),
        analyze_emoji: config.analyze_emoji,
        result,
        version: runner.version(),
    })
}

/// Lists every registered experience in catalog order.
#[must_use]
pub fn list_experiences(registry: &DemoRegistry) -> Vec<ExperienceSummary> {
    registry
        .slugs()
        .into_iter()
        .filter_map(|slug| {
            let config = registry.config(slug).ok()?;
            let pause = registry.analyze_duration(slug).ok()?;
            Some(ExperienceSummary {
                slug: config.slug,
                title: config.title,
                total_steps: config.total_steps(),
                analyze_duration_ms: u64::try_from(pause.as_millis()).unwrap_or(u64::MAX),
            })
        })
        .collect()
}
