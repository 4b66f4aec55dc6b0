//! Issue API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::api::extract::{ValidJson, ValidQuery};
use crate::core::ServerState;
use crate::engine::filter::{IssueFilter, take_limit};
use crate::utils::validation::{MAX_NAME_LEN, MAX_TEXT_LEN, require_fields, validate_opt_len};
use crate::utils::{AppError, AppResult};
use shared::ApiResponse;
use shared::models::{Issue, IssueCreate, IssueStatus, IssueUpdate};

const RESOURCE: &str = "Issue";

fn validate_issue_fields(
    title: Option<&str>,
    description: Option<&str>,
    location: Option<&str>,
    department: Option<&str>,
) -> AppResult<()> {
    validate_opt_len(title, "title", MAX_NAME_LEN)?;
    validate_opt_len(description, "description", MAX_TEXT_LEN)?;
    validate_opt_len(location, "location", MAX_NAME_LEN)?;
    validate_opt_len(department, "department", MAX_NAME_LEN)?;
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct IssueListQuery {
    pub status: Option<String>,
    pub department: Option<String>,
    pub priority: Option<u8>,
    pub limit: Option<usize>,
}

/// Echo of the filters the listing applied
#[derive(Debug, Serialize)]
pub struct AppliedFilters {
    pub status: Option<String>,
    pub department: Option<String>,
    pub priority: Option<u8>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct IssueListResponse {
    pub success: bool,
    pub data: Vec<Issue>,
    pub total: usize,
    pub filters: AppliedFilters,
}

/// GET /api/issues - list with optional filters
pub async fn list(
    State(state): State<ServerState>,
    ValidQuery(query): ValidQuery<IssueListQuery>,
) -> AppResult<Json<IssueListResponse>> {
    let issues = state.store.issues.snapshot();
    let filter = IssueFilter {
        status: query.status.as_deref(),
        department: query.department.as_deref(),
        min_priority: query.priority,
    };
    let filtered = take_limit(filter.apply(&issues), query.limit);

    Ok(Json(IssueListResponse {
        success: true,
        total: filtered.len(),
        data: filtered,
        filters: AppliedFilters {
            status: query.status,
            department: query.department,
            priority: query.priority,
            limit: query.limit,
        },
    }))
}

/// POST /api/issues - create a new issue
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<IssueCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<Issue>>)> {
    require_fields(&[
        ("title", payload.title.as_deref()),
        ("description", payload.description.as_deref()),
        ("location", payload.location.as_deref()),
        ("department", payload.department.as_deref()),
    ])?;
    validate_issue_fields(
        payload.title.as_deref(),
        payload.description.as_deref(),
        payload.location.as_deref(),
        payload.department.as_deref(),
    )?;

    let issue = state.store.issues.insert_with(|id| Issue {
        id,
        title: payload.title.unwrap_or_default(),
        status: IssueStatus::New,
        department: payload.department.unwrap_or_default(),
        priority: payload.priority.unwrap_or(5),
        upvotes: 0,
        location: payload.location.unwrap_or_default(),
        reported_date: chrono::Utc::now().to_rfc3339(),
        assigned_to: None,
        description: payload.description.unwrap_or_default(),
    });

    tracing::info!(issue_id = issue.id, "Issue created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            issue,
            "Issue created successfully",
        )),
    ))
}

/// GET /api/issues/:id - fetch one issue
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<Issue>>> {
    let issue = state
        .store
        .issues
        .get(id)
        .ok_or_else(|| AppError::not_found(RESOURCE))?;
    Ok(Json(ApiResponse::ok(issue)))
}

/// PUT /api/issues/:id - shallow-merge update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    ValidJson(payload): ValidJson<IssueUpdate>,
) -> AppResult<Json<ApiResponse<Issue>>> {
    validate_issue_fields(
        payload.title.as_deref(),
        payload.description.as_deref(),
        payload.location.as_deref(),
        payload.department.as_deref(),
    )?;

    let updated = state
        .store
        .issues
        .update(id, move |issue| {
            if let Some(title) = payload.title {
                issue.title = title;
            }
            if let Some(description) = payload.description {
                issue.description = description;
            }
            if let Some(location) = payload.location {
                issue.location = location;
            }
            if let Some(department) = payload.department {
                issue.department = department;
            }
            if let Some(status) = payload.status {
                issue.status = status;
            }
            if let Some(priority) = payload.priority {
                issue.priority = priority;
            }
            if let Some(assigned_to) = payload.assigned_to {
                issue.assigned_to = Some(assigned_to);
            }
        })
        .ok_or_else(|| AppError::not_found(RESOURCE))?;

    Ok(Json(ApiResponse::ok_with_message(
        updated,
        "Issue updated successfully",
    )))
}

/// DELETE /api/issues/:id - remove an issue
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<Issue>>> {
    let removed = state
        .store
        .issues
        .remove(id)
        .ok_or_else(|| AppError::not_found(RESOURCE))?;

    tracing::info!(issue_id = id, "Issue deleted");
    Ok(Json(ApiResponse::ok_with_message(
        removed,
        "Issue deleted successfully",
    )))
}

/// Vote receipt returned by the vote endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteReceipt {
    pub issue_id: u64,
    pub new_upvote_count: u32,
}

/// POST /api/issues/:id/vote - add an upvote
pub async fn vote(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<VoteReceipt>>> {
    let updated = state
        .store
        .issues
        .update(id, |issue| issue.upvotes += 1)
        .ok_or_else(|| AppError::not_found(RESOURCE))?;

    Ok(Json(ApiResponse::ok_with_message(
        VoteReceipt {
            issue_id: updated.id,
            new_upvote_count: updated.upvotes,
        },
        "Vote recorded successfully",
    )))
}

/// DELETE /api/issues/:id/vote - remove an upvote (floor at zero)
pub async fn unvote(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<VoteReceipt>>> {
    let updated = state
        .store
        .issues
        .update(id, |issue| issue.upvotes = issue.upvotes.saturating_sub(1))
        .ok_or_else(|| AppError::not_found(RESOURCE))?;

    Ok(Json(ApiResponse::ok_with_message(
        VoteReceipt {
            issue_id: updated.id,
            new_upvote_count: updated.upvotes,
        },
        "Vote removed successfully",
    )))
}
