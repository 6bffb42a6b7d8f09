// Core domain records for the yearbook page workflow
// Serialized field names keep the camelCase wire shape the web client uses

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Editor.js document format version written into fresh page content.
pub const EDITOR_FORMAT_VERSION: &str = "2.28.2";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(pub String);

impl GroupId {
    pub fn generate() -> Self {
        Self(format!("group-{}", Uuid::new_v4()))
    }
}

impl ParticipantId {
    pub fn generate() -> Self {
        Self(format!("participant-{}", Uuid::new_v4()))
    }
}

impl ContentId {
    pub fn generate() -> Self {
        Self(format!("content-{}", Uuid::new_v4()))
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Review workflow status of a participant's page.
///
/// The five statuses form a closed workflow: pages start at `NotStarted`,
/// advance through editing and review, and end at `ReadyForApproval`.
/// `ChangesRequested` routes back to `InProgress` when the participant
/// edits again. Serialized as the display strings the client renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Submitted for Review")]
    SubmittedForReview,
    #[serde(rename = "Changes Requested")]
    ChangesRequested,
    #[serde(rename = "Ready for Approval")]
    ReadyForApproval,
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PageStatus::NotStarted => "Not Started",
            PageStatus::InProgress => "In Progress",
            PageStatus::SubmittedForReview => "Submitted for Review",
            PageStatus::ChangesRequested => "Changes Requested",
            PageStatus::ReadyForApproval => "Ready for Approval",
        };
        f.write_str(label)
    }
}

/// A named collection of participants producing one yearbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_title: Option<String>,
    /// Insertion order is creation order; it carries no other meaning.
    pub participants: Vec<Participant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page-owner in a group.
///
/// Invariant: `page_content` is present whenever `page_status` is anything
/// other than `NotStarted` - the first content save is what moves a page
/// out of `NotStarted`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub email: String,
    pub access_link: String,
    pub page_status: PageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_content: Option<PageContent>,
    /// Coordinator feedback from the most recent `ChangesRequested`
    /// decision; cleared when the participant resumes editing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_feedback: Option<String>,
    pub group_id: GroupId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Participant {
    pub fn has_started(&self) -> bool {
        self.page_status != PageStatus::NotStarted
    }
}

/// Structured content of a single yearbook page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub id: ContentId,
    pub participant_id: ParticipantId,
    pub content: EditorContent,
    pub images: Vec<String>,
    pub bio: String,
    pub quote: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editor document: an ordered block sequence plus format metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorContent {
    pub time: i64,
    pub blocks: Vec<EditorBlock>,
    pub version: String,
}

impl EditorContent {
    pub fn empty() -> Self {
        Self {
            time: Utc::now().timestamp_millis(),
            blocks: Vec::new(),
            version: EDITOR_FORMAT_VERSION.to_string(),
        }
    }
}

/// One editor block. The payload is a closed union over the known block
/// kinds; a document with an unrecognized kind fails deserialization
/// instead of smuggling untyped data through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorBlock {
    pub id: String,
    #[serde(flatten)]
    pub data: BlockData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum BlockData {
    Header {
        text: String,
        level: u8,
    },
    Paragraph {
        text: String,
    },
    Image {
        file: ImageFile,
        #[serde(default)]
        caption: String,
    },
    List {
        style: ListStyle,
        items: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFile {
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Ordered,
    Unordered,
}

/// Partial page-content update submitted by an editing session. Absent
/// fields leave the stored values untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<EditorContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
}
