//! Unified Error Handling
//!
//! Application-wide error type and its HTTP mapping. Every error
//! serializes to the standard `{success: false, error: ...}` envelope;
//! missing-field validation additionally carries the field-name list.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Error envelope body
///
/// Same core as [`shared::ApiResponse`] with the optional
/// `missingFields` list attached for create-validation failures.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    #[serde(rename = "missingFields", skip_serializing_if = "Option::is_none")]
    pub missing_fields: Option<Vec<String>>,
}

/// Application-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Validation Errors (400) ==========
    #[error("Missing required fields")]
    MissingFields(Vec<String>),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid request: {0}")]
    Invalid(String),

    // ========== Policy Errors ==========
    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    // ========== Business Logic Errors ==========
    #[error("Resource not found: {0}")]
    NotFound(String),

    // ========== System Errors ==========
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, missing_fields) = match self {
            AppError::MissingFields(fields) => (
                StatusCode::BAD_REQUEST,
                "Missing required fields".to_string(),
                Some(fields),
            ),

            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Invalid(msg) => (StatusCode::BAD_REQUEST, msg, None),

            // Disallowed operations (403)
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg, None),

            // Policy violations surface as 400 (double-send etc.)
            AppError::BusinessRule(msg) => (StatusCode::BAD_REQUEST, msg, None),

            // Not found (404)
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),

            // Internal errors (500) - log detail, never leak it
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorBody {
            success: false,
            error: message,
            missing_fields,
        });

        (status, body).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    /// Not-found error for a resource type + numeric id
    pub fn not_found(resource: &str) -> Self {
        Self::NotFound(format!("{} not found", resource))
    }
}
