//! Communication Model (published campaigns/notices with engagement)

use serde::{Deserialize, Serialize};

/// Targeting scope of a communication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationType {
    Public,
    Department,
    Targeted,
}

impl CommunicationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommunicationType::Public => "public",
            CommunicationType::Department => "department",
            CommunicationType::Targeted => "targeted",
        }
    }
}

/// Publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationStatus {
    Active,
    Inactive,
}

/// Engagement counters (monotonically non-decreasing in a real
/// system; static snapshot values here)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Engagement {
    pub views: u32,
    pub clicks: u32,
    pub responses: u32,
}

/// Published communication
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Communication {
    pub id: u64,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: CommunicationType,
    pub audience: Vec<String>,
    pub created_by: String,
    pub created_at: String,
    pub status: CommunicationStatus,
    pub engagement: Engagement,
}
