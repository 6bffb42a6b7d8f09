// Persistence collaborator seam - the tracker talks to storage through this
// trait so real backends and test doubles can be injected

pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{ContentDraft, Group, GroupId, PageStatus, Participant, ParticipantId};

pub use memory::InMemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("group {0} not found")]
    GroupNotFound(GroupId),
    #[error("participant {0} not found")]
    ParticipantNotFound(ParticipantId),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Insert form for a new group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroup {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_title: Option<String>,
}

/// Insert form for a new participant. Pages always start `NotStarted`
/// with no content; the store mints the id and access link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewParticipant {
    pub name: String,
    pub email: String,
}

/// Update form for a group's cover design. `None` fields are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_title: Option<String>,
}

/// Storage operations the lifecycle tracker depends on.
///
/// Implementations persist groups and participants and bump `updated_at`
/// on every mutation. They do not enforce workflow rules - status
/// transitions are validated by the tracker before they reach the store.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ParticipantStore: Send + Sync {
    async fn list_groups(&self) -> Result<Vec<Group>, StoreError>;

    async fn get_group(&self, group_id: &GroupId) -> Result<Group, StoreError>;

    async fn create_group(&self, form: NewGroup) -> Result<Group, StoreError>;

    async fn update_group_cover(
        &self,
        group_id: &GroupId,
        form: CoverUpdate,
    ) -> Result<Group, StoreError>;

    async fn add_participant(
        &self,
        group_id: &GroupId,
        form: NewParticipant,
    ) -> Result<Participant, StoreError>;

    async fn load_participants(&self, group_id: &GroupId)
        -> Result<Vec<Participant>, StoreError>;

    async fn get_participant(&self, id: &ParticipantId) -> Result<Participant, StoreError>;

    /// Upsert page content from a draft, merging over any stored content.
    async fn save_content(
        &self,
        id: &ParticipantId,
        draft: ContentDraft,
    ) -> Result<Participant, StoreError>;

    async fn persist_status(
        &self,
        id: &ParticipantId,
        status: PageStatus,
    ) -> Result<(), StoreError>;

    async fn store_feedback(
        &self,
        id: &ParticipantId,
        feedback: Option<String>,
    ) -> Result<(), StoreError>;
}
