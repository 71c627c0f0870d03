//! Integration tests for `InMemoryEventRepository`.

use chrono::Utc;
use studio_core::error::DomainError;
use studio_core::repository::{EventRepository, StoredEvent};
use studio_event_store::InMemoryEventRepository;
use uuid::Uuid;

/// Helper to build a `StoredEvent` with sensible defaults.
fn make_stored_event(aggregate_id: Uuid, sequence_number: i64) -> StoredEvent {
    StoredEvent {
        event_id: Uuid::new_v4(),
        aggregate_id,
        event_type: "demo.answer_recorded".to_string(),
        payload: serde_json::json!({"step_id": "undertone"}),
        sequence_number,
        correlation_id: Uuid::new_v4(),
        causation_id: Uuid::new_v4(),
        occurred_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_load_events_returns_empty_vec_for_unknown_aggregate() {
    let repo = InMemoryEventRepository::new();

    let events = repo.load_events(Uuid::new_v4()).await.unwrap();

    assert!(events.is_empty());
}

#[tokio::test]
async fn test_append_and_load_preserves_fields_and_order() {
    let repo = InMemoryEventRepository::new();
    let aggregate_id = Uuid::new_v4();
    let events = vec![
        make_stored_event(aggregate_id, 1),
        make_stored_event(aggregate_id, 2),
        make_stored_event(aggregate_id, 3),
    ];
    let first_id = events[0].event_id;

    repo.append_events(aggregate_id, 0, &events).await.unwrap();

    let loaded = repo.load_events(aggregate_id).await.unwrap();
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded[0].event_id, first_id);
    assert_eq!(loaded[0].payload, serde_json::json!({"step_id": "undertone"}));
    let sequence: Vec<i64> = loaded.iter().map(|e| e.sequence_number).collect();
    assert_eq!(sequence, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_streams_are_isolated_per_aggregate() {
    let repo = InMemoryEventRepository::new();
    let agg_a = Uuid::new_v4();
    let agg_b = Uuid::new_v4();

    repo.append_events(agg_a, 0, &[make_stored_event(agg_a, 1)])
        .await
        .unwrap();
    repo.append_events(agg_b, 0, &[make_stored_event(agg_b, 1)])
        .await
        .unwrap();

    assert_eq!(repo.load_events(agg_a).await.unwrap()[0].aggregate_id, agg_a);
    assert_eq!(repo.load_events(agg_b).await.unwrap()[0].aggregate_id, agg_b);
    assert_eq!(repo.stream_count(), 2);
}

#[tokio::test]
async fn test_stale_expected_version_is_a_concurrency_conflict() {
    let repo = InMemoryEventRepository::new();
    let aggregate_id = Uuid::new_v4();
    repo.append_events(aggregate_id, 0, &[make_stored_event(aggregate_id, 1)])
        .await
        .unwrap();

    let result = repo
        .append_events(aggregate_id, 0, &[make_stored_event(aggregate_id, 1)])
        .await;

    match result.unwrap_err() {
        DomainError::ConcurrencyConflict {
            aggregate_id: id,
            expected,
            actual,
        } => {
            assert_eq!(id, aggregate_id);
            assert_eq!(expected, 0);
            assert_eq!(actual, 1);
        }
        other => panic!("expected ConcurrencyConflict, got {other:?}"),
    }
    assert_eq!(repo.load_events(aggregate_id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_out_of_sequence_batch_is_rejected_without_partial_write() {
    let repo = InMemoryEventRepository::new();
    let aggregate_id = Uuid::new_v4();

    let result = repo
        .append_events(
            aggregate_id,
            0,
            &[
                make_stored_event(aggregate_id, 1),
                make_stored_event(aggregate_id, 3),
            ],
        )
        .await;

    assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    assert!(repo.load_events(aggregate_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_discard_stream_removes_events_and_tolerates_unknown_ids() {
    let repo = InMemoryEventRepository::new();
    let aggregate_id = Uuid::new_v4();
    repo.append_events(aggregate_id, 0, &[make_stored_event(aggregate_id, 1)])
        .await
        .unwrap();

    repo.discard_stream(aggregate_id).await.unwrap();
    repo.discard_stream(Uuid::new_v4()).await.unwrap();

    assert!(repo.load_events(aggregate_id).await.unwrap().is_empty());
    assert_eq!(repo.stream_count(), 0);
}
