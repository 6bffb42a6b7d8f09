// In-memory ParticipantStore - the shipped reference backend and the
// substrate integration tests run against

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::storage::{CoverUpdate, NewGroup, NewParticipant, ParticipantStore, StoreError};
use crate::types::{
    ContentDraft, ContentId, EditorContent, Group, GroupId, PageContent, PageStatus, Participant,
    ParticipantId,
};

pub const DEFAULT_ACCESS_LINK_BASE: &str = "https://yearbook.example.com/participant";

/// Map-free in-memory store: groups own their participants, so every
/// record has exactly one home and mutations happen in one place. A
/// single `RwLock` serializes writers, which is the whole concurrency
/// story this backend promises.
pub struct InMemoryStore {
    access_link_base: String,
    groups: RwLock<Vec<Group>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// Start from an existing set of groups (fixtures, imported data).
    pub fn seeded(groups: Vec<Group>) -> Self {
        Self {
            access_link_base: DEFAULT_ACCESS_LINK_BASE.to_string(),
            groups: RwLock::new(groups),
        }
    }

    pub fn with_access_link_base(mut self, base: impl Into<String>) -> Self {
        self.access_link_base = base.into();
        self
    }

    async fn mutate_participant<F>(
        &self,
        id: &ParticipantId,
        apply: F,
    ) -> Result<Participant, StoreError>
    where
        F: FnOnce(&mut Participant),
    {
        let mut groups = self.groups.write().await;
        for group in groups.iter_mut() {
            if let Some(participant) = group.participants.iter_mut().find(|p| &p.id == id) {
                apply(participant);
                participant.updated_at = Utc::now();
                return Ok(participant.clone());
            }
        }
        Err(StoreError::ParticipantNotFound(id.clone()))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ParticipantStore for InMemoryStore {
    async fn list_groups(&self) -> Result<Vec<Group>, StoreError> {
        Ok(self.groups.read().await.clone())
    }

    async fn get_group(&self, group_id: &GroupId) -> Result<Group, StoreError> {
        self.groups
            .read()
            .await
            .iter()
            .find(|g| &g.id == group_id)
            .cloned()
            .ok_or_else(|| StoreError::GroupNotFound(group_id.clone()))
    }

    async fn create_group(&self, form: NewGroup) -> Result<Group, StoreError> {
        let now = Utc::now();
        let group = Group {
            id: GroupId::generate(),
            name: form.name,
            cover_image: form.cover_image,
            cover_title: form.cover_title,
            participants: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.groups.write().await.push(group.clone());
        Ok(group)
    }

    async fn update_group_cover(
        &self,
        group_id: &GroupId,
        form: CoverUpdate,
    ) -> Result<Group, StoreError> {
        let mut groups = self.groups.write().await;
        let group = groups
            .iter_mut()
            .find(|g| &g.id == group_id)
            .ok_or_else(|| StoreError::GroupNotFound(group_id.clone()))?;

        if let Some(image) = form.cover_image {
            group.cover_image = Some(image);
        }
        if let Some(title) = form.cover_title {
            group.cover_title = Some(title);
        }
        group.updated_at = Utc::now();
        Ok(group.clone())
    }

    async fn add_participant(
        &self,
        group_id: &GroupId,
        form: NewParticipant,
    ) -> Result<Participant, StoreError> {
        let mut groups = self.groups.write().await;
        let group = groups
            .iter_mut()
            .find(|g| &g.id == group_id)
            .ok_or_else(|| StoreError::GroupNotFound(group_id.clone()))?;

        let now = Utc::now();
        let token = Uuid::new_v4().simple().to_string();
        let participant = Participant {
            id: ParticipantId::generate(),
            name: form.name,
            email: form.email,
            access_link: format!("{}/{}", self.access_link_base, token),
            page_status: PageStatus::NotStarted,
            page_content: None,
            review_feedback: None,
            group_id: group_id.clone(),
            created_at: now,
            updated_at: now,
        };
        group.participants.push(participant.clone());
        group.updated_at = now;
        Ok(participant)
    }

    async fn load_participants(
        &self,
        group_id: &GroupId,
    ) -> Result<Vec<Participant>, StoreError> {
        self.get_group(group_id).await.map(|g| g.participants)
    }

    async fn get_participant(&self, id: &ParticipantId) -> Result<Participant, StoreError> {
        self.groups
            .read()
            .await
            .iter()
            .flat_map(|g| g.participants.iter())
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::ParticipantNotFound(id.clone()))
    }

    async fn save_content(
        &self,
        id: &ParticipantId,
        draft: ContentDraft,
    ) -> Result<Participant, StoreError> {
        self.mutate_participant(id, move |participant| {
            let now = Utc::now();
            match participant.page_content.as_mut() {
                Some(existing) => {
                    if let Some(content) = draft.content {
                        existing.content = content;
                    }
                    if let Some(images) = draft.images {
                        existing.images = images;
                    }
                    if let Some(bio) = draft.bio {
                        existing.bio = bio;
                    }
                    if let Some(quote) = draft.quote {
                        existing.quote = quote;
                    }
                    existing.updated_at = now;
                }
                None => {
                    participant.page_content = Some(PageContent {
                        id: ContentId::generate(),
                        participant_id: participant.id.clone(),
                        content: draft.content.unwrap_or_else(EditorContent::empty),
                        images: draft.images.unwrap_or_default(),
                        bio: draft.bio.unwrap_or_default(),
                        quote: draft.quote.unwrap_or_default(),
                        created_at: now,
                        updated_at: now,
                    });
                }
            }
        })
        .await
    }

    async fn persist_status(
        &self,
        id: &ParticipantId,
        status: PageStatus,
    ) -> Result<(), StoreError> {
        self.mutate_participant(id, |participant| {
            participant.page_status = status;
        })
        .await
        .map(|_| ())
    }

    async fn store_feedback(
        &self,
        id: &ParticipantId,
        feedback: Option<String>,
    ) -> Result<(), StoreError> {
        self.mutate_participant(id, |participant| {
            participant.review_feedback = feedback;
        })
        .await
        .map(|_| ())
    }
}
