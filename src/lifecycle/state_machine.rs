// Page status transition table for the review workflow
// Every status change in the system is validated against this table -
// including coordinator-initiated moves

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::StoreError;
use crate::types::{PageStatus, ParticipantId};

/// Actions that drive a page from one status to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    /// Participant (or coordinator) saved page content. Starts a fresh
    /// page and resumes one that had changes requested.
    SaveContent,
    /// Page handed over for coordinator review.
    SubmitForReview,
    /// Coordinator accepted the page.
    Approve,
    /// Coordinator rejected the page with feedback.
    RequestChanges,
}

impl LifecycleEvent {
    /// The event that drives `from -> to`, if that edge exists.
    pub fn for_edge(from: PageStatus, to: PageStatus) -> Option<LifecycleEvent> {
        use PageStatus::*;
        match (from, to) {
            (NotStarted, InProgress) => Some(LifecycleEvent::SaveContent),
            (ChangesRequested, InProgress) => Some(LifecycleEvent::SaveContent),
            (InProgress, SubmittedForReview) => Some(LifecycleEvent::SubmitForReview),
            (SubmittedForReview, ReadyForApproval) => Some(LifecycleEvent::Approve),
            (SubmittedForReview, ChangesRequested) => Some(LifecycleEvent::RequestChanges),
            _ => None,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            LifecycleEvent::SaveContent => "edit this page",
            LifecycleEvent::SubmitForReview => "submit this page for review",
            LifecycleEvent::Approve => "approve this page",
            LifecycleEvent::RequestChanges => "request changes to this page",
        }
    }
}

impl PageStatus {
    /// Statuses reachable from this one per the workflow table.
    pub fn allowed_transitions(&self) -> &'static [PageStatus] {
        match self {
            PageStatus::NotStarted => &[PageStatus::InProgress],
            PageStatus::InProgress => &[PageStatus::SubmittedForReview],
            PageStatus::SubmittedForReview => {
                &[PageStatus::ReadyForApproval, PageStatus::ChangesRequested]
            }
            PageStatus::ChangesRequested => &[PageStatus::InProgress],
            PageStatus::ReadyForApproval => &[],
        }
    }

    pub fn can_transition_to(&self, target: PageStatus) -> bool {
        self.allowed_transitions().contains(&target)
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

/// Audit trail entry for one applied transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRecord {
    pub participant_id: ParticipantId,
    pub from: PageStatus,
    pub to: PageStatus,
    pub event: LifecycleEvent,
    pub timestamp: DateTime<Utc>,
}

/// Errors a lifecycle request can fail with. All are terminal for the
/// request; nothing at this layer retries.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition { from: PageStatus, to: PageStatus },

    #[error("actor is not allowed to {action}")]
    Forbidden { action: String },

    #[error("validation failed: {reason}")]
    Validation { reason: String },

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl LifecycleError {
    /// True when the failure is an unknown group or participant id.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LifecycleError::Storage(
                StoreError::GroupNotFound(_) | StoreError::ParticipantNotFound(_)
            )
        )
    }
}
