//! Activity API Handlers
//!
//! The feed stays newest first: creation pushes to the front, so the
//! listing can serve the stored order directly.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::api::extract::{ValidJson, ValidQuery};
use crate::core::ServerState;
use crate::engine::filter::{ActivityFilter, take_limit};
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, MAX_TEXT_LEN, require_fields, validate_opt_len};
use shared::ApiResponse;
use shared::models::{Activity, ActivityCreate};

const DEFAULT_FEED_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct ActivityListQuery {
    pub department: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct AppliedFilters {
    pub department: Option<String>,
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct ActivityListResponse {
    pub success: bool,
    pub data: Vec<Activity>,
    /// Matching records before the limit is applied
    pub total: usize,
    pub filters: AppliedFilters,
}

/// GET /api/activities - recent activity feed
pub async fn list(
    State(state): State<ServerState>,
    ValidQuery(query): ValidQuery<ActivityListQuery>,
) -> AppResult<Json<ActivityListResponse>> {
    let activities = state.store.activities.snapshot();
    let filter = ActivityFilter {
        department: query.department.as_deref(),
    };
    let filtered = filter.apply(&activities);
    let total = filtered.len();
    let limit = query.limit.unwrap_or(DEFAULT_FEED_LIMIT);
    let limited = take_limit(filtered, Some(limit));

    Ok(Json(ActivityListResponse {
        success: true,
        data: limited,
        total,
        filters: AppliedFilters {
            department: query.department,
            limit,
        },
    }))
}

/// POST /api/activities - record an action at the front of the feed
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<ActivityCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<Activity>>)> {
    require_fields(&[
        ("user", payload.user.as_deref()),
        ("action", payload.action.as_deref()),
        ("dept", payload.dept.as_deref()),
    ])?;
    validate_opt_len(payload.user.as_deref(), "user", MAX_NAME_LEN)?;
    validate_opt_len(payload.action.as_deref(), "action", MAX_TEXT_LEN)?;
    validate_opt_len(payload.dept.as_deref(), "dept", MAX_NAME_LEN)?;

    let activity = state.store.activities.insert_front_with(|id| Activity {
        id,
        user: payload.user.unwrap_or_default(),
        action: payload.action.unwrap_or_default(),
        time: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        dept: payload.dept.unwrap_or_default(),
    });

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            activity,
            "Activity logged successfully",
        )),
    ))
}
