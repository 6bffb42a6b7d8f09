// Actor model and permission table for the review workflow
// Authorization decisions only - credential and session handling live with
// the external auth service

use serde::{Deserialize, Serialize};

use crate::types::{GroupId, ParticipantId};

/// A coordinator account scoped to the groups it manages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatorAuth {
    pub id: String,
    pub name: String,
    pub email: String,
    pub group_ids: Vec<GroupId>,
}

/// A participant identified through their page access link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantAuth {
    pub id: String,
    pub name: String,
    pub email: String,
    pub participant_id: ParticipantId,
    pub group_id: GroupId,
}

/// The acting user behind a tracker request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum AuthUser {
    Coordinator(CoordinatorAuth),
    Participant(ParticipantAuth),
}

impl AuthUser {
    pub fn is_coordinator(&self) -> bool {
        matches!(self, AuthUser::Coordinator(_))
    }

    pub fn can_view_group(&self, group_id: &GroupId) -> bool {
        match self {
            AuthUser::Coordinator(coordinator) => coordinator.group_ids.contains(group_id),
            AuthUser::Participant(participant) => &participant.group_id == group_id,
        }
    }

    pub fn can_edit_group(&self, group_id: &GroupId) -> bool {
        match self {
            AuthUser::Coordinator(coordinator) => coordinator.group_ids.contains(group_id),
            AuthUser::Participant(_) => false,
        }
    }

    /// Review decisions (approve, request changes) are coordinator-only.
    pub fn can_review_pages(&self, group_id: &GroupId) -> bool {
        match self {
            AuthUser::Coordinator(coordinator) => coordinator.group_ids.contains(group_id),
            AuthUser::Participant(_) => false,
        }
    }

    /// Coordinators may edit any page; participants only their own.
    pub fn can_edit_participant_page(&self, participant_id: &ParticipantId) -> bool {
        match self {
            AuthUser::Coordinator(_) => true,
            AuthUser::Participant(participant) => &participant.participant_id == participant_id,
        }
    }
}
