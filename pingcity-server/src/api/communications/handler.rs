//! Communication API Handlers
//!
//! The listing serves two collections side by side: targeted messages
//! and broadcast communications. Type/status filters apply to the
//! message list only; the limit applies to both.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::api::extract::{ValidJson, ValidQuery};
use crate::core::ServerState;
use crate::engine::aggregate::{CommunicationStats, communication_stats};
use crate::engine::filter::{MessageFilter, limit_communications, take_limit};
use crate::utils::validation::{MAX_NAME_LEN, MAX_TEXT_LEN, is_present, validate_opt_len};
use crate::utils::{AppError, AppResult};
use shared::ApiResponse;
use shared::models::{
    Communication, Message, MessageCreate, MessageStatus, MessageType, MessageUpdate,
};

const RESOURCE: &str = "Message";

fn validate_message_fields(
    title: Option<&str>,
    content: Option<&str>,
    sender: Option<&str>,
) -> AppResult<()> {
    validate_opt_len(title, "title", MAX_NAME_LEN)?;
    validate_opt_len(content, "content", MAX_TEXT_LEN)?;
    validate_opt_len(sender, "sender", MAX_NAME_LEN)?;
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct CommunicationListQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct AppliedFilters {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CommunicationData {
    pub messages: Vec<Message>,
    pub communications: Vec<Communication>,
}

#[derive(Debug, Serialize)]
pub struct CommunicationListResponse {
    pub success: bool,
    pub data: CommunicationData,
    pub stats: CommunicationStats,
    pub filters: AppliedFilters,
}

/// GET /api/communications - both lists plus collection stats
pub async fn list(
    State(state): State<ServerState>,
    ValidQuery(query): ValidQuery<CommunicationListQuery>,
) -> AppResult<Json<CommunicationListResponse>> {
    let messages = state.store.messages.snapshot();
    let communications = state.store.communications.snapshot();
    let stats = communication_stats(&messages, &communications);

    let filter = MessageFilter {
        kind: query.kind.as_deref(),
        status: query.status.as_deref(),
    };
    let filtered = take_limit(filter.apply(&messages), query.limit);
    let limited = limit_communications(&communications, query.limit);

    Ok(Json(CommunicationListResponse {
        success: true,
        data: CommunicationData {
            messages: filtered,
            communications: limited,
        },
        stats,
        filters: AppliedFilters {
            kind: query.kind,
            status: query.status,
            limit: query.limit,
        },
    }))
}

/// POST /api/communications - create a message
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<MessageCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<Message>>)> {
    // mixed field types, so the missing list is collected by hand
    let mut missing = Vec::new();
    if !is_present(payload.title.as_deref()) {
        missing.push("title");
    }
    if !is_present(payload.content.as_deref()) {
        missing.push("content");
    }
    if payload.kind.is_none() {
        missing.push("type");
    }
    if !is_present(payload.sender.as_deref()) {
        missing.push("sender");
    }
    if payload.recipients.is_none() {
        missing.push("recipients");
    }
    if !missing.is_empty() {
        return Err(AppError::MissingFields(
            missing.into_iter().map(String::from).collect(),
        ));
    }
    validate_message_fields(
        payload.title.as_deref(),
        payload.content.as_deref(),
        payload.sender.as_deref(),
    )?;

    let status = payload.status.unwrap_or(MessageStatus::Draft);
    let sent_at = (status == MessageStatus::Sent).then(|| chrono::Utc::now().to_rfc3339());

    let message = state.store.messages.insert_with(|id| Message {
        id,
        kind: payload.kind.unwrap_or(MessageType::Update),
        title: payload.title.unwrap_or_default(),
        content: payload.content.unwrap_or_default(),
        sender: payload.sender.unwrap_or_default(),
        recipients: payload.recipients.unwrap_or_default(),
        status,
        priority: payload.priority.unwrap_or_else(|| "medium".to_string()),
        created_at: chrono::Utc::now().to_rfc3339(),
        sent_at,
        scheduled_at: payload.scheduled_at,
        read_by: Vec::new(),
        channels: payload
            .channels
            .unwrap_or_else(|| vec!["in-app".to_string()]),
    });

    tracing::info!(message_id = message.id, "Message created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            message,
            "Message created successfully",
        )),
    ))
}

/// GET /api/communications/:id - fetch one message
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<Message>>> {
    let message = state
        .store
        .messages
        .get(id)
        .ok_or_else(|| AppError::not_found(RESOURCE))?;
    Ok(Json(ApiResponse::ok(message)))
}

/// PUT /api/communications/:id - shallow-merge update
///
/// Updating a message into the sent status stamps `sentAt`.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    ValidJson(payload): ValidJson<MessageUpdate>,
) -> AppResult<Json<ApiResponse<Message>>> {
    validate_message_fields(
        payload.title.as_deref(),
        payload.content.as_deref(),
        payload.sender.as_deref(),
    )?;

    let updated = state
        .store
        .messages
        .update(id, move |message| {
            if let Some(title) = payload.title {
                message.title = title;
            }
            if let Some(content) = payload.content {
                message.content = content;
            }
            if let Some(kind) = payload.kind {
                message.kind = kind;
            }
            if let Some(sender) = payload.sender {
                message.sender = sender;
            }
            if let Some(recipients) = payload.recipients {
                message.recipients = recipients;
            }
            if let Some(priority) = payload.priority {
                message.priority = priority;
            }
            if let Some(scheduled_at) = payload.scheduled_at {
                message.scheduled_at = Some(scheduled_at);
            }
            if let Some(channels) = payload.channels {
                message.channels = channels;
            }
            if let Some(status) = payload.status {
                if status == MessageStatus::Sent && message.status != MessageStatus::Sent {
                    message.sent_at = Some(chrono::Utc::now().to_rfc3339());
                }
                message.status = status;
            }
        })
        .ok_or_else(|| AppError::not_found(RESOURCE))?;

    Ok(Json(ApiResponse::ok_with_message(
        updated,
        "Message updated successfully",
    )))
}

/// POST /api/communications/:id/send - send a draft or scheduled message
///
/// Sending an already-sent message is rejected and leaves the record
/// untouched.
pub async fn send(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<Message>>> {
    let sent = state
        .store
        .messages
        .try_update(id, |message| {
            if message.status == MessageStatus::Sent {
                return Err(AppError::BusinessRule("Message already sent".to_string()));
            }
            message.status = MessageStatus::Sent;
            message.sent_at = Some(chrono::Utc::now().to_rfc3339());
            Ok(())
        })
        .ok_or_else(|| AppError::not_found(RESOURCE))??;

    tracing::info!(message_id = id, "Message sent");
    Ok(Json(ApiResponse::ok_with_message(
        sent,
        "Message sent successfully",
    )))
}
