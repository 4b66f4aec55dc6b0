//! Aggregation Engine
//!
//! Derives summary statistics from collection snapshots: dashboard
//! counters, priority buckets, department distributions, user and
//! communication stats. Read-only; every function takes a snapshot
//! and returns a serializable block.

use std::collections::BTreeMap;

use serde::Serialize;
use shared::models::{
    Communication, DepartmentEfficiency, EfficiencyTrend, Issue, IssueStatus, Message,
    MessageStatus, User, UserRole, UserStatus,
};

// Priority bucket boundaries. The three buckets partition 0-10:
// high = p >= 8, medium = 5 <= p < 8, low = p < 5.
pub const HIGH_PRIORITY_FLOOR: u8 = 8;
pub const MEDIUM_PRIORITY_FLOOR: u8 = 5;

/// Live counters for the dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealTimeStats {
    pub total_issues: usize,
    pub resolved_issues: usize,
    pub in_progress_issues: usize,
    pub new_issues: usize,
    /// Integer percentage, 0 for an empty collection
    pub resolution_rate: u32,
}

/// Priority bucket counts
#[derive(Debug, Clone, Serialize)]
pub struct PriorityStats {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Seed efficiency enriched with the live non-resolved count
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPerformance {
    pub department: String,
    pub efficiency: u32,
    pub trend: EfficiencyTrend,
    pub active_issues: usize,
}

/// User collection statistics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub suspended: usize,
    pub by_role: RoleCounts,
    pub avg_reputation: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleCounts {
    pub admin: usize,
    pub staff: usize,
    pub citizen: usize,
}

/// Message/communication statistics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationStats {
    pub total_messages: usize,
    pub sent_messages: usize,
    pub draft_messages: usize,
    pub scheduled_messages: usize,
    /// Sum of communication view counters
    pub total_engagement: u64,
    /// Mean readBy size per sent message, 0 when nothing is sent
    pub average_read_rate: f64,
}

/// Department-scoped analytics block
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentAnalytics {
    pub total_issues: usize,
    pub resolved_issues: usize,
    pub avg_priority: f64,
    pub top_locations: Vec<LocationCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationCount {
    pub location: String,
    pub count: usize,
}

/// Integer resolution-rate percentage; 0 when the collection is empty
pub fn resolution_rate(resolved: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        ((resolved as f64 / total as f64) * 100.0).round() as u32
    }
}

/// Dashboard counters over the full issue collection
pub fn real_time_stats(issues: &[Issue]) -> RealTimeStats {
    let total = issues.len();
    let resolved = count_status(issues, IssueStatus::Resolved);
    RealTimeStats {
        total_issues: total,
        resolved_issues: resolved,
        in_progress_issues: count_status(issues, IssueStatus::InProgress),
        new_issues: count_status(issues, IssueStatus::New),
        resolution_rate: resolution_rate(resolved, total),
    }
}

fn count_status(issues: &[Issue], status: IssueStatus) -> usize {
    issues.iter().filter(|i| i.status == status).count()
}

/// Issue counts keyed by department exactly as stored (no normalization)
pub fn department_stats(issues: &[Issue]) -> BTreeMap<String, usize> {
    let mut stats = BTreeMap::new();
    for issue in issues {
        *stats.entry(issue.department.clone()).or_insert(0) += 1;
    }
    stats
}

/// Issue counts per priority bucket (a strict partition of 0-10)
pub fn priority_stats(issues: &[Issue]) -> PriorityStats {
    let mut stats = PriorityStats {
        high: 0,
        medium: 0,
        low: 0,
    };
    for issue in issues {
        if issue.priority >= HIGH_PRIORITY_FLOOR {
            stats.high += 1;
        } else if issue.priority >= MEDIUM_PRIORITY_FLOOR {
            stats.medium += 1;
        } else {
            stats.low += 1;
        }
    }
    stats
}

/// Attach the live non-resolved issue count to each seed efficiency row
///
/// Department names are compared case-insensitively (the seed table
/// and the issue records disagree on casing in places).
pub fn department_performance(
    seed: &[DepartmentEfficiency],
    issues: &[Issue],
) -> Vec<DepartmentPerformance> {
    seed.iter()
        .map(|dept| {
            let active_issues = issues
                .iter()
                .filter(|i| {
                    i.department.eq_ignore_ascii_case(&dept.department)
                        && i.status != IssueStatus::Resolved
                })
                .count();
            DepartmentPerformance {
                department: dept.department.clone(),
                efficiency: dept.efficiency,
                trend: dept.trend,
                active_issues,
            }
        })
        .collect()
}

/// Statistics over the full user collection
pub fn user_stats(users: &[User]) -> UserStats {
    let total = users.len();
    let avg_reputation = if total == 0 {
        0.0
    } else {
        users.iter().map(|u| u.reputation).sum::<f64>() / total as f64
    };
    UserStats {
        total,
        active: users
            .iter()
            .filter(|u| u.status == UserStatus::Active)
            .count(),
        suspended: users
            .iter()
            .filter(|u| u.status == UserStatus::Suspended)
            .count(),
        by_role: RoleCounts {
            admin: users.iter().filter(|u| u.role == UserRole::Admin).count(),
            staff: users.iter().filter(|u| u.role == UserRole::Staff).count(),
            citizen: users.iter().filter(|u| u.role == UserRole::Citizen).count(),
        },
        avg_reputation,
    }
}

/// Statistics over the full message + communication collections
pub fn communication_stats(
    messages: &[Message],
    communications: &[Communication],
) -> CommunicationStats {
    let sent = messages
        .iter()
        .filter(|m| m.status == MessageStatus::Sent)
        .count();
    let total_reads: usize = messages.iter().map(|m| m.read_by.len()).sum();
    CommunicationStats {
        total_messages: messages.len(),
        sent_messages: sent,
        draft_messages: messages
            .iter()
            .filter(|m| m.status == MessageStatus::Draft)
            .count(),
        scheduled_messages: messages
            .iter()
            .filter(|m| m.status == MessageStatus::Scheduled)
            .count(),
        total_engagement: communications.iter().map(|c| c.engagement.views as u64).sum(),
        average_read_rate: if sent == 0 {
            0.0
        } else {
            total_reads as f64 / sent as f64
        },
    }
}

/// Top 5 locations by issue count, descending
///
/// First-seen order breaks count ties (stable sort over the
/// accumulation order).
pub fn top_locations(issues: &[Issue]) -> Vec<LocationCount> {
    let mut counts: Vec<LocationCount> = Vec::new();
    for issue in issues {
        match counts.iter_mut().find(|c| c.location == issue.location) {
            Some(entry) => entry.count += 1,
            None => counts.push(LocationCount {
                location: issue.location.clone(),
                count: 1,
            }),
        }
    }
    counts.sort_by_key(|c| std::cmp::Reverse(c.count));
    counts.truncate(5);
    counts
}

/// Analytics block for an already department-filtered issue list
pub fn department_analytics(dept_issues: &[Issue]) -> DepartmentAnalytics {
    let total = dept_issues.len();
    let avg_priority = if total == 0 {
        0.0
    } else {
        dept_issues.iter().map(|i| i.priority as f64).sum::<f64>() / total as f64
    };
    DepartmentAnalytics {
        total_issues: total,
        resolved_issues: count_status(dept_issues, IssueStatus::Resolved),
        avg_priority,
        top_locations: top_locations(dept_issues),
    }
}
