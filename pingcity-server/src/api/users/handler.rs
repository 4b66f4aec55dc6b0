//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::api::extract::{ValidJson, ValidQuery};
use crate::core::ServerState;
use crate::engine::aggregate::{UserStats, user_stats};
use crate::engine::filter::{UserFilter, take_limit};
use crate::utils::validation::{MAX_EMAIL_LEN, MAX_NAME_LEN, require_fields, validate_opt_len};
use crate::utils::{AppError, AppResult};
use shared::ApiResponse;
use shared::models::{User, UserCreate, UserRole, UserStatus, UserUpdate, default_permissions};

const RESOURCE: &str = "User";

fn validate_user_fields(
    name: Option<&str>,
    email: Option<&str>,
    department: Option<&str>,
) -> AppResult<()> {
    validate_opt_len(name, "name", MAX_NAME_LEN)?;
    validate_opt_len(email, "email", MAX_EMAIL_LEN)?;
    validate_opt_len(department, "department", MAX_NAME_LEN)?;
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    pub role: Option<String>,
    pub department: Option<String>,
    pub status: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct AppliedFilters {
    pub role: Option<String>,
    pub department: Option<String>,
    pub status: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub success: bool,
    pub data: Vec<User>,
    pub total: usize,
    /// Always computed over the full collection, not the filtered view
    pub stats: UserStats,
    pub filters: AppliedFilters,
}

/// GET /api/users - list with optional filters plus collection stats
pub async fn list(
    State(state): State<ServerState>,
    ValidQuery(query): ValidQuery<UserListQuery>,
) -> AppResult<Json<UserListResponse>> {
    let users = state.store.users.snapshot();
    let stats = user_stats(&users);

    let filter = UserFilter {
        role: query.role.as_deref(),
        department: query.department.as_deref(),
        status: query.status.as_deref(),
    };
    let filtered = take_limit(filter.apply(&users), query.limit);

    Ok(Json(UserListResponse {
        success: true,
        total: filtered.len(),
        data: filtered,
        stats,
        filters: AppliedFilters {
            role: query.role,
            department: query.department,
            status: query.status,
            limit: query.limit,
        },
    }))
}

/// POST /api/users - register a new user
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<UserCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    require_fields(&[
        ("name", payload.name.as_deref()),
        ("email", payload.email.as_deref()),
        ("role", payload.role.map(|r| r.as_str())),
    ])?;
    validate_user_fields(
        payload.name.as_deref(),
        payload.email.as_deref(),
        payload.department.as_deref(),
    )?;

    // require_fields guarantees role is present here
    let role = payload.role.unwrap_or(UserRole::Citizen);

    let user = state.store.users.insert_with(|id| User {
        id,
        name: payload.name.unwrap_or_default(),
        email: payload.email.unwrap_or_default(),
        role,
        department: payload.department,
        status: payload.status.unwrap_or(UserStatus::Active),
        reputation: 0.0,
        total_reports: 0,
        join_date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
        last_login: "Never".to_string(),
        permissions: default_permissions(role),
    });

    tracing::info!(user_id = user.id, role = role.as_str(), "User created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            user,
            "User created successfully",
        )),
    ))
}

/// GET /api/users/:id - fetch one user
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = state
        .store
        .users
        .get(id)
        .ok_or_else(|| AppError::not_found(RESOURCE))?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/users/:id - shallow-merge update
///
/// Reactivating a non-active account stamps `lastLogin`. Permissions
/// stay as granted at creation even when the role changes.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
    ValidJson(payload): ValidJson<UserUpdate>,
) -> AppResult<Json<ApiResponse<User>>> {
    validate_user_fields(
        payload.name.as_deref(),
        payload.email.as_deref(),
        payload.department.as_deref(),
    )?;

    let updated = state
        .store
        .users
        .update(id, move |user| {
            if let Some(name) = payload.name {
                user.name = name;
            }
            if let Some(email) = payload.email {
                user.email = email;
            }
            if let Some(role) = payload.role {
                user.role = role;
            }
            if let Some(department) = payload.department {
                user.department = Some(department);
            }
            if let Some(reputation) = payload.reputation {
                user.reputation = reputation;
            }
            if let Some(total_reports) = payload.total_reports {
                user.total_reports = total_reports;
            }
            if let Some(status) = payload.status {
                if status == UserStatus::Active && user.status != UserStatus::Active {
                    user.last_login = chrono::Utc::now().format("%Y-%m-%d %H:%M").to_string();
                }
                user.status = status;
            }
        })
        .ok_or_else(|| AppError::not_found(RESOURCE))?;

    Ok(Json(ApiResponse::ok_with_message(
        updated,
        "User updated successfully",
    )))
}

/// DELETE /api/users/:id - remove a user; admin accounts are protected
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<u64>,
) -> AppResult<Json<ApiResponse<User>>> {
    let removed = state
        .store
        .users
        .remove_if(id, |user| {
            if user.role == UserRole::Admin {
                Err(AppError::Forbidden("Cannot delete admin users".to_string()))
            } else {
                Ok(())
            }
        })
        .ok_or_else(|| AppError::not_found(RESOURCE))??;

    tracing::info!(user_id = id, "User deleted");
    Ok(Json(ApiResponse::ok_with_message(
        removed,
        "User deleted successfully",
    )))
}
