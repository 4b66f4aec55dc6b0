//! User Model

use serde::{Deserialize, Serialize};

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Staff,
    Citizen,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Staff => "staff",
            UserRole::Citizen => "citizen",
        }
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Suspended => "suspended",
        }
    }
}

/// Registered user (admin, department staff or citizen)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Only meaningful for staff/admin accounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub status: UserStatus,
    pub reputation: f64,
    pub total_reports: u32,
    pub join_date: String,
    pub last_login: String,
    /// Capability tags, fixed at creation from the role mapping
    pub permissions: Vec<String>,
}

/// Create user payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub department: Option<String>,
    pub status: Option<UserStatus>,
}

/// Update user payload (shallow merge)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub department: Option<String>,
    pub status: Option<UserStatus>,
    pub reputation: Option<f64>,
    pub total_reports: Option<u32>,
}

/// Default capability tags for a role
///
/// Permissions are derived once at registration and are NOT
/// re-derived when the role later changes.
pub fn default_permissions(role: UserRole) -> Vec<String> {
    let tags: &[&str] = match role {
        UserRole::Admin => &[
            "manage_issues",
            "assign_staff",
            "view_analytics",
            "manage_users",
        ],
        UserRole::Staff => &["manage_issues", "update_status"],
        UserRole::Citizen => &["create_issues", "vote_issues"],
    };
    tags.iter().map(|t| t.to_string()).collect()
}
