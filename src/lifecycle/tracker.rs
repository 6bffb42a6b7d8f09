// Lifecycle tracker - owns transition enforcement for participant pages
// Storage is injected at construction; there are no hidden globals behind
// this object

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn, Instrument};

use crate::auth::AuthUser;
use crate::config::WorkflowConfig;
use crate::lifecycle::state_machine::{LifecycleError, LifecycleEvent, TransitionRecord};
use crate::stats::{compute_overview, compute_stats, GroupStats, OverviewReport};
use crate::storage::ParticipantStore;
use crate::telemetry::{create_tracker_span, generate_correlation_id};
use crate::types::{ContentDraft, GroupId, PageStatus, Participant, ParticipantId};

/// Coordinates page status changes against the storage collaborator.
///
/// A request either completes (status updated and persisted) or fails
/// with the stored state unchanged. Every applied transition lands in an
/// in-process audit trail and a structured log event.
pub struct LifecycleTracker {
    store: Arc<dyn ParticipantStore>,
    workflow: WorkflowConfig,
    history: Mutex<Vec<TransitionRecord>>,
}

impl LifecycleTracker {
    pub fn new(store: Arc<dyn ParticipantStore>) -> Self {
        Self {
            store,
            workflow: WorkflowConfig::default(),
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn with_workflow_config(mut self, workflow: WorkflowConfig) -> Self {
        self.workflow = workflow;
        self
    }

    /// Move a participant's page to `target`, enforcing the transition
    /// table and the actor's permissions.
    ///
    /// `NotStarted -> InProgress` is deliberately unreachable here: the
    /// first start of a page is coupled to its first content save, so it
    /// only happens through [`LifecycleTracker::save_content`].
    pub async fn request_transition(
        &self,
        participant_id: &ParticipantId,
        target: PageStatus,
        actor: &AuthUser,
    ) -> Result<Participant, LifecycleError> {
        let correlation_id = generate_correlation_id();
        let span = create_tracker_span("request_transition", Some(participant_id), &correlation_id);

        async move {
            let participant = self.store.get_participant(participant_id).await?;
            let from = participant.page_status;

            let event = LifecycleEvent::for_edge(from, target).ok_or_else(|| {
                warn!(
                    participant_id = %participant_id,
                    from = %from,
                    to = %target,
                    "Rejected page transition not in the workflow table"
                );
                LifecycleError::InvalidTransition { from, to: target }
            })?;

            if from == PageStatus::NotStarted {
                // A page starts by saving content, never by a bare status move.
                return Err(LifecycleError::InvalidTransition { from, to: target });
            }

            self.authorize(event, &participant, actor)?;
            self.apply_transition(&participant, target, event).await
        }
        .instrument(span)
        .await
    }

    /// Upsert page content for a participant.
    ///
    /// Side effect per the workflow design: the first save advances
    /// `NotStarted -> InProgress`, and a save while `ChangesRequested`
    /// takes the recovery edge back to `InProgress` and clears the stored
    /// review feedback. An approved page is closed for editing.
    pub async fn save_content(
        &self,
        participant_id: &ParticipantId,
        draft: ContentDraft,
        actor: &AuthUser,
    ) -> Result<Participant, LifecycleError> {
        let correlation_id = generate_correlation_id();
        let span = create_tracker_span("save_content", Some(participant_id), &correlation_id);

        async move {
            let participant = self.store.get_participant(participant_id).await?;
            self.authorize(LifecycleEvent::SaveContent, &participant, actor)?;
            self.validate_draft(&draft)?;

            if participant.page_status.is_terminal() {
                return Err(LifecycleError::Validation {
                    reason: format!(
                        "page {participant_id} is already approved and closed for editing"
                    ),
                });
            }

            let saved = self.store.save_content(participant_id, draft).await?;
            match saved.page_status {
                PageStatus::NotStarted | PageStatus::ChangesRequested => {
                    self.apply_transition(&saved, PageStatus::InProgress, LifecycleEvent::SaveContent)
                        .await
                }
                _ => Ok(saved),
            }
        }
        .instrument(span)
        .await
    }

    /// Participant hands their page over for coordinator review.
    pub async fn submit_for_review(
        &self,
        participant_id: &ParticipantId,
        actor: &AuthUser,
    ) -> Result<Participant, LifecycleError> {
        self.request_transition(participant_id, PageStatus::SubmittedForReview, actor)
            .await
    }

    /// Coordinator accepts a submitted page.
    pub async fn approve_page(
        &self,
        participant_id: &ParticipantId,
        actor: &AuthUser,
    ) -> Result<Participant, LifecycleError> {
        self.request_transition(participant_id, PageStatus::ReadyForApproval, actor)
            .await
    }

    /// Coordinator rejects a submitted page. Feedback is required and is
    /// stored on the participant until their next edit.
    pub async fn request_changes(
        &self,
        participant_id: &ParticipantId,
        actor: &AuthUser,
        feedback: &str,
    ) -> Result<Participant, LifecycleError> {
        let feedback = feedback.trim();
        if feedback.is_empty() {
            return Err(LifecycleError::Validation {
                reason: "feedback is required when requesting changes".to_string(),
            });
        }

        self.request_transition(participant_id, PageStatus::ChangesRequested, actor)
            .await?;
        self.store
            .store_feedback(participant_id, Some(feedback.to_string()))
            .await?;
        Ok(self.store.get_participant(participant_id).await?)
    }

    pub async fn get_participant(
        &self,
        participant_id: &ParticipantId,
    ) -> Result<Participant, LifecycleError> {
        Ok(self.store.get_participant(participant_id).await?)
    }

    pub async fn load_participants(
        &self,
        group_id: &GroupId,
    ) -> Result<Vec<Participant>, LifecycleError> {
        Ok(self.store.load_participants(group_id).await?)
    }

    /// Current progress snapshot for one group.
    pub async fn group_progress(&self, group_id: &GroupId) -> Result<GroupStats, LifecycleError> {
        let participants = self.store.load_participants(group_id).await?;
        Ok(compute_stats(&participants))
    }

    /// Progress rollup across every stored group.
    pub async fn overview(&self) -> Result<OverviewReport, LifecycleError> {
        let groups = self.store.list_groups().await?;
        Ok(compute_overview(&groups))
    }

    /// Transitions applied through this tracker, oldest first.
    pub async fn transition_history(&self) -> Vec<TransitionRecord> {
        self.history.lock().await.clone()
    }

    fn authorize(
        &self,
        event: LifecycleEvent,
        participant: &Participant,
        actor: &AuthUser,
    ) -> Result<(), LifecycleError> {
        let allowed = match event {
            LifecycleEvent::SaveContent | LifecycleEvent::SubmitForReview => {
                actor.can_edit_participant_page(&participant.id)
            }
            LifecycleEvent::Approve | LifecycleEvent::RequestChanges => {
                actor.can_review_pages(&participant.group_id)
            }
        };

        if allowed {
            Ok(())
        } else {
            warn!(
                participant_id = %participant.id,
                event = ?event,
                "Actor lacks permission for page transition"
            );
            Err(LifecycleError::Forbidden {
                action: event.describe().to_string(),
            })
        }
    }

    fn validate_draft(&self, draft: &ContentDraft) -> Result<(), LifecycleError> {
        if let Some(images) = &draft.images {
            if images.len() > self.workflow.max_images_per_page {
                return Err(LifecycleError::Validation {
                    reason: format!(
                        "a page may carry at most {} images, got {}",
                        self.workflow.max_images_per_page,
                        images.len()
                    ),
                });
            }
        }
        Ok(())
    }

    async fn apply_transition(
        &self,
        participant: &Participant,
        target: PageStatus,
        event: LifecycleEvent,
    ) -> Result<Participant, LifecycleError> {
        let from = participant.page_status;
        self.store.persist_status(&participant.id, target).await?;

        if event == LifecycleEvent::SaveContent && participant.review_feedback.is_some() {
            self.store.store_feedback(&participant.id, None).await?;
        }

        let record = TransitionRecord {
            participant_id: participant.id.clone(),
            from,
            to: target,
            event,
            timestamp: chrono::Utc::now(),
        };
        info!(
            participant_id = %record.participant_id,
            from = %record.from,
            to = %record.to,
            event = ?record.event,
            "Page status transition"
        );
        self.history.lock().await.push(record);

        Ok(self.store.get_participant(&participant.id).await?)
    }
}
