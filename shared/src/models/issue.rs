//! Issue Model

use serde::{Deserialize, Serialize};

/// Lifecycle status of a reported issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueStatus {
    New,
    Acknowledged,
    Assigned,
    InProgress,
    Resolved,
    Rejected,
}

impl IssueStatus {
    /// Wire name, used for exact-match status filters
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::New => "new",
            IssueStatus::Acknowledged => "acknowledged",
            IssueStatus::Assigned => "assigned",
            IssueStatus::InProgress => "in-progress",
            IssueStatus::Resolved => "resolved",
            IssueStatus::Rejected => "rejected",
        }
    }
}

/// Citizen-reported municipal issue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: u64,
    pub title: String,
    pub status: IssueStatus,
    pub department: String,
    /// Urgency 0-10
    pub priority: u8,
    pub upvotes: u32,
    pub location: String,
    pub reported_date: String,
    pub assigned_to: Option<String>,
    pub description: String,
}

/// Create issue payload
///
/// Required fields are `Option` so validation can report every
/// missing name in one pass instead of failing on the first.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
    pub priority: Option<u8>,
}

/// Update issue payload (shallow merge, absent fields untouched)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
    pub status: Option<IssueStatus>,
    pub priority: Option<u8>,
    pub assigned_to: Option<String>,
}

/// Static trending entry (pre-ranked seed list, returned alongside
/// the live ranking and never merged with it)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingIssue {
    pub id: u64,
    pub title: String,
    pub upvotes: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: u8,
}
