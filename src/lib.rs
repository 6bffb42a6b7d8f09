// Yearbook Tracker Library - page lifecycle and group progress core
// This exposes the components consumed by the UI and persistence collaborators

pub mod auth;
pub mod config;
pub mod lifecycle;
pub mod stats;
pub mod storage;
pub mod telemetry;
pub mod types;

// Re-export key types for easy access
pub use auth::{AuthUser, CoordinatorAuth, ParticipantAuth};
pub use config::{ObservabilityConfig, TrackerConfig, WorkflowConfig};
pub use lifecycle::{LifecycleError, LifecycleEvent, LifecycleTracker, TransitionRecord};
pub use stats::{compute_overview, compute_stats, GroupReport, GroupStats, OverviewReport};
pub use storage::{
    CoverUpdate, InMemoryStore, NewGroup, NewParticipant, ParticipantStore, StoreError,
};
pub use telemetry::{create_tracker_span, generate_correlation_id, init_telemetry};
pub use types::{
    BlockData, ContentDraft, ContentId, EditorBlock, EditorContent, Group, GroupId, ImageFile,
    ListStyle, PageContent, PageStatus, Participant, ParticipantId,
};

#[cfg(feature = "testing")]
pub use storage::MockParticipantStore;
