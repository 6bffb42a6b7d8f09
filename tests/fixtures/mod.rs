//! Shared fixtures: a seeded yearbook group in every workflow stage,
//! mirroring the demo data the web client ships with.

use chrono::{TimeZone, Utc};
use yearbook_tracker::auth::{AuthUser, CoordinatorAuth, ParticipantAuth};
use yearbook_tracker::types::{
    BlockData, ContentId, EditorBlock, EditorContent, Group, GroupId, ImageFile, ListStyle,
    PageContent, PageStatus, Participant, ParticipantId, EDITOR_FORMAT_VERSION,
};

pub fn westfield_group_id() -> GroupId {
    GroupId("group-1".to_string())
}

pub fn roosevelt_group_id() -> GroupId {
    GroupId("group-2".to_string())
}

pub fn sample_page_content(participant_id: &ParticipantId) -> PageContent {
    let created = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    PageContent {
        id: ContentId(format!("content-for-{participant_id}")),
        participant_id: participant_id.clone(),
        content: EditorContent {
            time: created.timestamp_millis(),
            blocks: vec![
                EditorBlock {
                    id: "block-1".to_string(),
                    data: BlockData::Header {
                        text: "My Senior Year Journey".to_string(),
                        level: 2,
                    },
                },
                EditorBlock {
                    id: "block-2".to_string(),
                    data: BlockData::Paragraph {
                        text: "From late-night study sessions to unforgettable memories \
                               with friends, this year had it all."
                            .to_string(),
                    },
                },
                EditorBlock {
                    id: "block-3".to_string(),
                    data: BlockData::Image {
                        file: ImageFile {
                            url: "https://images.example.com/graduation.jpg".to_string(),
                        },
                        caption: "Graduation day with my best friends".to_string(),
                    },
                },
                EditorBlock {
                    id: "block-4".to_string(),
                    data: BlockData::List {
                        style: ListStyle::Unordered,
                        items: vec![
                            "Captain of the debate team".to_string(),
                            "Volunteer at the animal shelter".to_string(),
                        ],
                    },
                },
            ],
            version: EDITOR_FORMAT_VERSION.to_string(),
        },
        images: vec!["https://images.example.com/graduation.jpg".to_string()],
        bio: "Future computer science major. Passionate about technology and debate."
            .to_string(),
        quote: "The future belongs to those who believe in the beauty of their dreams."
            .to_string(),
        created_at: created,
        updated_at: created,
    }
}

fn participant(id: &str, name: &str, email: &str, status: PageStatus) -> Participant {
    let id = ParticipantId(id.to_string());
    let created = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
    let content = if status == PageStatus::NotStarted {
        None
    } else {
        Some(sample_page_content(&id))
    };
    Participant {
        id: id.clone(),
        name: name.to_string(),
        email: email.to_string(),
        access_link: format!("https://yearbook.example.com/participant/{id}"),
        page_status: status,
        page_content: content,
        review_feedback: None,
        group_id: westfield_group_id(),
        created_at: created,
        updated_at: created,
    }
}

/// Five participants covering every status. Unlike the demo data this is
/// modeled on, pages past `NotStarted` always carry content.
pub fn westfield_participants() -> Vec<Participant> {
    vec![
        participant(
            "participant-1",
            "Alice Johnson",
            "alice.johnson@school.edu",
            PageStatus::ReadyForApproval,
        ),
        participant(
            "participant-2",
            "Bob Smith",
            "bob.smith@school.edu",
            PageStatus::SubmittedForReview,
        ),
        participant(
            "participant-3",
            "Carol Davis",
            "carol.davis@school.edu",
            PageStatus::InProgress,
        ),
        participant(
            "participant-4",
            "David Wilson",
            "david.wilson@school.edu",
            PageStatus::ChangesRequested,
        ),
        participant(
            "participant-5",
            "Emma Brown",
            "emma.brown@school.edu",
            PageStatus::NotStarted,
        ),
    ]
}

pub fn seeded_groups() -> Vec<Group> {
    let created = Utc.with_ymd_and_hms(2024, 1, 10, 8, 0, 0).unwrap();
    vec![
        Group {
            id: westfield_group_id(),
            name: "Westfield High School - Class of 2024".to_string(),
            cover_image: Some("https://images.example.com/westfield-cover.jpg".to_string()),
            cover_title: Some("Forever Eagles - Class of 2024".to_string()),
            participants: westfield_participants(),
            created_at: created,
            updated_at: created,
        },
        Group {
            id: roosevelt_group_id(),
            name: "Roosevelt Elementary - 6th Grade Graduation".to_string(),
            cover_image: None,
            cover_title: Some("Growing Together - 6th Grade Class".to_string()),
            participants: Vec::new(),
            created_at: created,
            updated_at: created,
        },
    ]
}

pub fn coordinator() -> AuthUser {
    AuthUser::Coordinator(CoordinatorAuth {
        id: "coord-1".to_string(),
        name: "Jennifer Adams".to_string(),
        email: "j.adams@westfield.edu".to_string(),
        group_ids: vec![westfield_group_id(), roosevelt_group_id()],
    })
}

/// Coordinator with no access to the seeded groups.
pub fn outside_coordinator() -> AuthUser {
    AuthUser::Coordinator(CoordinatorAuth {
        id: "coord-9".to_string(),
        name: "Pat Murray".to_string(),
        email: "p.murray@lakeside.edu".to_string(),
        group_ids: vec![GroupId("group-99".to_string())],
    })
}

pub fn participant_actor(participant_id: &str) -> AuthUser {
    AuthUser::Participant(ParticipantAuth {
        id: format!("user-{participant_id}"),
        name: "Page Owner".to_string(),
        email: "owner@school.edu".to_string(),
        participant_id: ParticipantId(participant_id.to_string()),
        group_id: westfield_group_id(),
    })
}
