// Group progress aggregation - pure computations over participant snapshots

use serde::{Deserialize, Serialize};

use crate::types::{Group, GroupId, PageStatus, Participant};

/// Per-status counts and derived completion figures for one group.
///
/// `completed` counts `ReadyForApproval` pages and `pending` counts
/// `SubmittedForReview` pages, matching what the coordinator dashboard
/// displays. Order-independent: any permutation of the same participants
/// produces the same stats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub changes_requested: usize,
    pub not_started: usize,
    pub completion_percentage: u8,
    pub ready_for_export: bool,
}

/// Stats for one group inside a multi-group overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupReport {
    pub group_id: GroupId,
    pub group_name: String,
    pub stats: GroupStats,
}

/// Coordinator-wide rollup across every managed group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewReport {
    pub group_count: usize,
    pub totals: GroupStats,
    pub groups: Vec<GroupReport>,
}

pub fn compute_stats(participants: &[Participant]) -> GroupStats {
    compute_from_statuses(participants.iter().map(|p| p.page_status))
}

fn compute_from_statuses(statuses: impl Iterator<Item = PageStatus>) -> GroupStats {
    let mut stats = GroupStats::default();
    for status in statuses {
        stats.total += 1;
        match status {
            PageStatus::ReadyForApproval => stats.completed += 1,
            PageStatus::SubmittedForReview => stats.pending += 1,
            PageStatus::InProgress => stats.in_progress += 1,
            PageStatus::ChangesRequested => stats.changes_requested += 1,
            PageStatus::NotStarted => stats.not_started += 1,
        }
    }

    // 0 for an empty group, never a division by zero.
    stats.completion_percentage = if stats.total == 0 {
        0
    } else {
        ((stats.completed as f64 / stats.total as f64) * 100.0).round() as u8
    };
    stats.ready_for_export = stats.total > 0 && stats.completed == stats.total;
    stats
}

pub fn compute_overview(groups: &[Group]) -> OverviewReport {
    let totals = compute_from_statuses(
        groups
            .iter()
            .flat_map(|g| g.participants.iter())
            .map(|p| p.page_status),
    );

    let reports = groups
        .iter()
        .map(|group| GroupReport {
            group_id: group.id.clone(),
            group_name: group.name.clone(),
            stats: compute_stats(&group.participants),
        })
        .collect();

    OverviewReport {
        group_count: groups.len(),
        totals,
        groups: reports,
    }
}
