//! Message Model (outbound communications to citizens/staff)

use serde::{Deserialize, Serialize};

/// Message category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Announcement,
    Alert,
    Update,
    Notification,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Announcement => "announcement",
            MessageType::Alert => "alert",
            MessageType::Update => "update",
            MessageType::Notification => "notification",
        }
    }
}

/// Delivery status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Draft,
    Sent,
    Scheduled,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::Draft => "draft",
            MessageStatus::Sent => "sent",
            MessageStatus::Scheduled => "scheduled",
        }
    }
}

/// Outbound message
///
/// Invariant: `sent_at` is stamped exactly when `status` transitions
/// to `Sent` (create-as-sent, update-to-sent, or the send operation)
/// and is never set otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub title: String,
    pub content: String,
    pub sender: String,
    /// Audience tags ("all-citizens", "staff", department names, ...)
    pub recipients: Vec<String>,
    pub status: MessageStatus,
    pub priority: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
    /// User ids that have read the message
    pub read_by: Vec<u64>,
    /// Delivery channel tags ("in-app", "email", "sms")
    pub channels: Vec<String>,
}

/// Create message payload
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCreate {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<MessageType>,
    pub sender: Option<String>,
    pub recipients: Option<Vec<String>>,
    pub status: Option<MessageStatus>,
    pub priority: Option<String>,
    pub scheduled_at: Option<String>,
    pub channels: Option<Vec<String>>,
}

/// Update message payload (shallow merge)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<MessageType>,
    pub sender: Option<String>,
    pub recipients: Option<Vec<String>>,
    pub status: Option<MessageStatus>,
    pub priority: Option<String>,
    pub scheduled_at: Option<String>,
    pub channels: Option<Vec<String>>,
}
