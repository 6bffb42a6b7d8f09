//! Transition-table and permission enforcement through the tracker,
//! running against the in-memory store.

mod fixtures;

use std::sync::Arc;

use yearbook_tracker::lifecycle::{LifecycleError, LifecycleTracker};
use yearbook_tracker::storage::{InMemoryStore, StoreError};
use yearbook_tracker::types::{ContentDraft, PageStatus, ParticipantId};

fn tracker() -> LifecycleTracker {
    LifecycleTracker::new(Arc::new(InMemoryStore::seeded(fixtures::seeded_groups())))
}

fn pid(id: &str) -> ParticipantId {
    ParticipantId(id.to_string())
}

#[tokio::test]
async fn approving_an_unstarted_page_is_invalid() {
    let tracker = tracker();
    let err = tracker
        .request_transition(
            &pid("participant-5"),
            PageStatus::ReadyForApproval,
            &fixtures::coordinator(),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        LifecycleError::InvalidTransition {
            from: PageStatus::NotStarted,
            to: PageStatus::ReadyForApproval,
        }
    ));
}

#[tokio::test]
async fn starting_a_page_requires_a_content_save() {
    let tracker = tracker();

    // Even the edge the table allows out of NotStarted cannot be taken
    // as a bare status move.
    let err = tracker
        .request_transition(
            &pid("participant-5"),
            PageStatus::InProgress,
            &fixtures::coordinator(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LifecycleError::InvalidTransition { .. }));

    // Saving content is the way in.
    let saved = tracker
        .save_content(
            &pid("participant-5"),
            ContentDraft {
                bio: Some("Ready to make some memories".to_string()),
                ..Default::default()
            },
            &fixtures::participant_actor("participant-5"),
        )
        .await
        .unwrap();
    assert_eq!(saved.page_status, PageStatus::InProgress);
    assert!(saved.page_content.is_some());
}

#[tokio::test]
async fn resuming_after_changes_requested_succeeds() {
    let tracker = tracker();
    let updated = tracker
        .request_transition(
            &pid("participant-4"),
            PageStatus::InProgress,
            &fixtures::participant_actor("participant-4"),
        )
        .await
        .unwrap();
    assert_eq!(updated.page_status, PageStatus::InProgress);
}

#[tokio::test]
async fn review_decisions_are_coordinator_only() {
    let tracker = tracker();

    let err = tracker
        .approve_page(
            &pid("participant-2"),
            &fixtures::participant_actor("participant-2"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LifecycleError::Forbidden { .. }));

    let err = tracker
        .request_changes(
            &pid("participant-2"),
            &fixtures::participant_actor("participant-2"),
            "please shorten the bio",
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LifecycleError::Forbidden { .. }));

    // A coordinator for a different set of groups is just as locked out.
    let err = tracker
        .approve_page(&pid("participant-2"), &fixtures::outside_coordinator())
        .await
        .unwrap_err();
    assert!(matches!(err, LifecycleError::Forbidden { .. }));
}

#[tokio::test]
async fn participants_cannot_submit_someone_elses_page() {
    let tracker = tracker();
    let err = tracker
        .submit_for_review(
            &pid("participant-3"),
            &fixtures::participant_actor("participant-1"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LifecycleError::Forbidden { .. }));
}

#[tokio::test]
async fn failed_requests_leave_state_unchanged() {
    let tracker = tracker();

    let before = tracker.get_participant(&pid("participant-3")).await.unwrap();
    let err = tracker
        .request_transition(
            &pid("participant-3"),
            PageStatus::ReadyForApproval,
            &fixtures::coordinator(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LifecycleError::InvalidTransition { .. }));

    let after = tracker.get_participant(&pid("participant-3")).await.unwrap();
    assert_eq!(before.page_status, after.page_status);
    assert_eq!(before.updated_at, after.updated_at);
}

#[tokio::test]
async fn approved_pages_are_closed() {
    let tracker = tracker();
    let approved = pid("participant-1");

    let err = tracker
        .submit_for_review(&approved, &fixtures::coordinator())
        .await
        .unwrap_err();
    assert!(matches!(err, LifecycleError::InvalidTransition { .. }));

    let err = tracker
        .save_content(
            &approved,
            ContentDraft {
                quote: Some("One more edit".to_string()),
                ..Default::default()
            },
            &fixtures::coordinator(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LifecycleError::Validation { .. }));
}

#[tokio::test]
async fn feedback_is_stored_then_cleared_on_next_edit() {
    let tracker = tracker();
    let reviewed = pid("participant-2");

    let rejected = tracker
        .request_changes(
            &reviewed,
            &fixtures::coordinator(),
            "The quote needs attribution.",
        )
        .await
        .unwrap();
    assert_eq!(rejected.page_status, PageStatus::ChangesRequested);
    assert_eq!(
        rejected.review_feedback.as_deref(),
        Some("The quote needs attribution.")
    );

    let resumed = tracker
        .save_content(
            &reviewed,
            ContentDraft {
                quote: Some("Carpe diem. - Horace".to_string()),
                ..Default::default()
            },
            &fixtures::participant_actor("participant-2"),
        )
        .await
        .unwrap();
    assert_eq!(resumed.page_status, PageStatus::InProgress);
    assert!(resumed.review_feedback.is_none());
}

#[tokio::test]
async fn empty_feedback_is_rejected() {
    let tracker = tracker();
    let err = tracker
        .request_changes(&pid("participant-2"), &fixtures::coordinator(), "   ")
        .await
        .unwrap_err();
    assert!(matches!(err, LifecycleError::Validation { .. }));

    // Status must not have moved.
    let participant = tracker.get_participant(&pid("participant-2")).await.unwrap();
    assert_eq!(participant.page_status, PageStatus::SubmittedForReview);
}

#[tokio::test]
async fn unknown_participants_are_reported() {
    let tracker = tracker();
    let err = tracker
        .approve_page(&pid("participant-404"), &fixtures::coordinator())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(
        err,
        LifecycleError::Storage(StoreError::ParticipantNotFound(_))
    ));
}
