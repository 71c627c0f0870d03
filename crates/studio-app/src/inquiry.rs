//! Contact form and quote requests.
//!
//! Neither reaches a real endpoint: a valid submission is logged, waits the
//! configured latency, and comes back with a receipt.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use studio_core::clock::Clock;
use studio_core::locale::Locale;
use studio_quote::application::query_handlers::QuoteView;
use thiserror::Error;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ViewError;
use crate::quote;
use crate::state::AppState;

/// Longest accepted name.
pub const NAME_MAX_CHARS: usize = 50;

/// Shortest accepted message.
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Longest accepted message.
pub const MESSAGE_MAX_CHARS: usize = 2000;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9][0-9\- ]{6,18}[0-9]$").expect("phone pattern is a valid regex")
});

/// What the visitor is asking about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryType {
    /// A new project.
    #[default]
    Project,
    /// A quote built in the calculator.
    Quote,
    /// Partnership or collaboration.
    Partnership,
    /// Anything else.
    Other,
}

/// The contact form as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Contact name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Company, optional.
    #[serde(default)]
    pub company: Option<String>,
    /// Phone number, optional.
    #[serde(default)]
    pub phone: Option<String>,
    /// Subject of the inquiry.
    #[serde(default)]
    pub inquiry_type: InquiryType,
    /// Free-text message.
    pub message: String,
    /// Privacy policy consent.
    pub consent: bool,
}

/// Why one field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldReason {
    /// Empty but required.
    Required,
    /// Longer than allowed.
    TooLong,
    /// Shorter than allowed.
    TooShort,
    /// Not in the expected format.
    Invalid,
}

/// A rejected field, rendered inline next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field name.
    pub field: &'static str,
    /// What is wrong with it.
    pub reason: FieldReason,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.field, self.reason)
    }
}

/// Errors from the inquiry surface.
#[derive(Debug, Error)]
pub enum InquiryError {
    /// One or more fields are invalid.
    #[error("invalid form: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))]
    InvalidForm(Vec<FieldError>),

    /// The attached quote could not be read.
    #[error(transparent)]
    Quote(#[from] ViewError),
}

/// Acknowledgement of a submission.
#[derive(Debug, Clone, Serialize)]
pub struct InquiryReceipt {
    /// Receipt identifier.
    pub receipt_id: Uuid,
    /// When the submission was accepted.
    pub received_at: DateTime<Utc>,
    /// Subject of the inquiry.
    pub inquiry_type: InquiryType,
    /// The quote snapshot, for quote requests.
    pub quote: Option<QuoteView>,
}

impl ContactForm {
    /// Checks every field and reports all failures at once.
    ///
    /// # Errors
    ///
    /// Returns every `FieldError` found.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        let mut reject = |field, reason| errors.push(FieldError { field, reason });

        let name = self.name.trim();
        if name.is_empty() {
            reject("name", FieldReason::Required);
        } else if name.chars().count() > NAME_MAX_CHARS {
            reject("name", FieldReason::TooLong);
        }

        let email = self.email.trim();
        if email.is_empty() {
            reject("email", FieldReason::Required);
        } else if !EMAIL.is_match(email) {
            reject("email", FieldReason::Invalid);
        }

        if let Some(phone) = self.phone.as_deref().map(str::trim)
            && !phone.is_empty()
            && !PHONE.is_match(phone)
        {
            reject("phone", FieldReason::Invalid);
        }

        let message_chars = self.message.trim().chars().count();
        if message_chars == 0 {
            reject("message", FieldReason::Required);
        } else if message_chars < MESSAGE_MIN_CHARS {
            reject("message", FieldReason::TooShort);
        } else if message_chars > MESSAGE_MAX_CHARS {
            reject("message", FieldReason::TooLong);
        }

        if !self.consent {
            reject("consent", FieldReason::Required);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Accepts a contact form.
///
/// # Errors
///
/// Returns `InquiryError::InvalidForm` listing every invalid field.
#[instrument(skip(state, form), fields(inquiry_type = ?form.inquiry_type))]
pub async fn submit_contact(
    state: &AppState,
    form: &ContactForm,
) -> Result<InquiryReceipt, InquiryError> {
    form.validate().map_err(InquiryError::InvalidForm)?;

    let receipt_id = Uuid::now_v7();
    info!(
        %receipt_id,
        name = %form.name.trim(),
        email = %form.email.trim(),
        company = form.company.as_deref().unwrap_or(""),
        "contact inquiry received"
    );
    tokio::time::sleep(state.config.inquiry_latency).await;

    Ok(InquiryReceipt {
        receipt_id,
        received_at: state.clock.now(),
        inquiry_type: form.inquiry_type,
        quote: None,
    })
}

/// Sends the quote along with a contact form. The quote is snapshotted as it
/// stands at submission.
///
/// # Errors
///
/// Returns `InquiryError::InvalidForm` for an invalid form and
/// `InquiryError::Quote` if the quote cannot be read.
#[instrument(skip(state, form))]
pub async fn request_quote(
    state: &AppState,
    quote_id: Uuid,
    form: &ContactForm,
    locale: Option<Locale>,
) -> Result<InquiryReceipt, InquiryError> {
    form.validate().map_err(InquiryError::InvalidForm)?;
    let snapshot = quote::quote(state, quote_id, locale).await?;

    let receipt_id = Uuid::now_v7();
    info!(
        %receipt_id,
        services = snapshot.services.len(),
        add_ons = snapshot.add_ons.len(),
        total = %snapshot.total_display,
        "quote request received"
    );
    tokio::time::sleep(state.config.inquiry_latency).await;

    Ok(InquiryReceipt {
        receipt_id,
        received_at: state.clock.now(),
        inquiry_type: InquiryType::Quote,
        quote: Some(snapshot),
    })
}
