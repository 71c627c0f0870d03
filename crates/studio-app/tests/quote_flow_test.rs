//! Quote and inquiry flows through the application surface.

mod common;

use rust_decimal_macros::dec;
use studio_app::inquiry::{self, ContactForm, FieldReason, InquiryError, InquiryType};
use studio_app::quote;
use studio_core::locale::Locale;
use studio_quote::domain::catalog::AddOnId;
use studio_quote::domain::details::EventDetailsPatch;
use studio_test_support::fixed_clock;
use uuid::Uuid;

fn contact_form() -> ContactForm {
    ContactForm {
        name: "Jordan Lee".to_owned(),
        email: "jordan@example.com".to_owned(),
        company: None,
        phone: None,
        inquiry_type: InquiryType::Project,
        message: "We would like a portrait studio at our launch event.".to_owned(),
        consent: true,
    }
}

#[tokio::test]
async fn test_portrait_studio_quote_totals_3_680_000() {
    // Arrange
    let state = common::test_state();
    let opened = quote::open_quote(&state, Some(Locale::Ko)).await.unwrap();

    // Act
    quote::add_service(&state, opened.quote_id, "ai-portrait-studio", Some(Locale::Ko))
        .await
        .unwrap();
    quote::toggle_add_on(&state, opened.quote_id, AddOnId::OnSiteStaff, Some(Locale::Ko))
        .await
        .unwrap();
    let view = quote::update_event_details(
        &state,
        opened.quote_id,
        EventDetailsPatch {
            duration_days: Some(3),
            ..EventDetailsPatch::default()
        },
        Some(Locale::Ko),
    )
    .await
    .unwrap();

    // Assert
    assert_eq!(opened.estimate.total, dec!(0));
    assert_eq!(view.estimate.total, dec!(3680000));
    assert_eq!(view.total_display, "3,680,000원");
}

#[tokio::test]
async fn test_views_fall_back_to_the_configured_locale() {
    // Arrange
    let state = common::test_state_with(studio_app::config::StudioConfig {
        default_locale: Locale::En,
        ..common::test_config()
    });
    let opened = quote::open_quote(&state, None).await.unwrap();

    // Act
    let (_, defaulted) = quote::add_service(&state, opened.quote_id, "ai-photo-booth", None)
        .await
        .unwrap();
    let korean = quote::quote(&state, opened.quote_id, Some(Locale::Ko))
        .await
        .unwrap();

    // Assert
    assert!(defaulted.total_display.starts_with('₩'));
    assert!(korean.total_display.ends_with('원'));
    assert_eq!(defaulted.estimate.total, korean.estimate.total);
}

#[tokio::test]
async fn test_surface_clamps_duration_and_attendees() {
    // Arrange
    let state = common::test_state();
    let opened = quote::open_quote(&state, Some(Locale::En)).await.unwrap();

    // Act
    let view = quote::update_event_details(
        &state,
        opened.quote_id,
        EventDetailsPatch {
            duration_days: Some(90),
            attendees: Some(10),
            ..EventDetailsPatch::default()
        },
        Some(Locale::En),
    )
    .await
    .unwrap();

    // Assert
    assert_eq!(view.details.duration_days, 30);
    assert_eq!(view.details.attendees, 50);
}

#[tokio::test]
async fn test_unknown_service_is_an_invalid_request() {
    // Arrange
    let state = common::test_state();
    let opened = quote::open_quote(&state, Some(Locale::Ko)).await.unwrap();

    // Act
    let result = quote::add_service(&state, opened.quote_id, "hologram", Some(Locale::Ko)).await;

    // Assert
    assert_eq!(result.unwrap_err().code(), "invalid_request");
}

#[tokio::test]
async fn test_removing_the_only_service_empties_the_quote() {
    // Arrange
    let state = common::test_state();
    let opened = quote::open_quote(&state, Some(Locale::Ko)).await.unwrap();
    let (instance_id, added) =
        quote::add_service(&state, opened.quote_id, "ai-photo-booth", Some(Locale::Ko))
            .await
            .unwrap();

    // Act
    let removed = quote::remove_service(&state, opened.quote_id, instance_id, Some(Locale::Ko))
        .await
        .unwrap();
    let removed_again =
        quote::remove_service(&state, opened.quote_id, instance_id, Some(Locale::Ko))
            .await
            .unwrap();

    // Assert
    assert_eq!(added.estimate.total, dec!(1500000));
    assert!(removed.services.is_empty());
    assert_eq!(removed_again.version, removed.version);
}

#[tokio::test(start_paused = true)]
async fn test_quote_request_snapshots_the_quote() {
    // Arrange
    let state = common::test_state_with(studio_app::config::StudioConfig {
        inquiry_latency: std::time::Duration::from_millis(1200),
        ..common::test_config()
    });
    let opened = quote::open_quote(&state, Some(Locale::En)).await.unwrap();
    quote::add_service(&state, opened.quote_id, "ai-portrait-studio", Some(Locale::En))
        .await
        .unwrap();

    // Act
    let receipt = inquiry::request_quote(&state, opened.quote_id, &contact_form(), Some(Locale::En))
        .await
        .unwrap();

    // Assert
    assert_eq!(receipt.inquiry_type, InquiryType::Quote);
    assert_eq!(receipt.received_at, fixed_clock().0);
    let snapshot = receipt.quote.unwrap();
    assert_eq!(snapshot.quote_id, opened.quote_id);
    assert_eq!(snapshot.total_display, "₩2,000,000");
}

#[tokio::test]
async fn test_contact_submission_returns_a_receipt() {
    // Arrange
    let state = common::test_state();

    // Act
    let receipt = inquiry::submit_contact(&state, &contact_form()).await.unwrap();

    // Assert
    assert_eq!(receipt.inquiry_type, InquiryType::Project);
    assert!(receipt.quote.is_none());
}

#[tokio::test]
async fn test_invalid_contact_form_is_rejected_before_anything_else() {
    // Arrange
    let state = common::test_state();
    let form = ContactForm {
        consent: false,
        ..contact_form()
    };

    // Act
    let result = inquiry::request_quote(&state, Uuid::new_v4(), &form, Some(Locale::Ko)).await;

    // Assert
    let Err(InquiryError::InvalidForm(errors)) = result else {
        panic!("expected InvalidForm, got {result:?}");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "consent");
    assert_eq!(errors[0].reason, FieldReason::Required);
}

#[tokio::test]
async fn test_quote_request_for_unknown_quote_is_not_found() {
    // Arrange
    let state = common::test_state();

    // Act
    let result =
        inquiry::request_quote(&state, Uuid::new_v4(), &contact_form(), Some(Locale::Ko)).await;

    // Assert
    assert!(matches!(result, Err(InquiryError::Quote(err)) if err.code() == "not_found"));
}
