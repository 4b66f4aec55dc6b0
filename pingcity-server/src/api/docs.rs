//! API self-description served at `GET /api`

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api", get(index))
}

/// GET /api - endpoint catalog for dashboard developers
pub async fn index() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "name": "PingCity Admin API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Municipal issue tracking admin dashboard API",
            "endpoints": {
                "issues": {
                    "GET /api/issues": "List issues. Query: status, department, priority, limit",
                    "POST /api/issues": "Create an issue",
                    "GET /api/issues/{id}": "Fetch one issue",
                    "PUT /api/issues/{id}": "Update an issue",
                    "DELETE /api/issues/{id}": "Delete an issue",
                    "POST /api/issues/{id}/vote": "Upvote an issue",
                    "DELETE /api/issues/{id}/vote": "Remove an upvote"
                },
                "users": {
                    "GET /api/users": "List users with stats. Query: role, department, status, limit",
                    "POST /api/users": "Create a user",
                    "GET /api/users/{id}": "Fetch one user",
                    "PUT /api/users/{id}": "Update a user",
                    "DELETE /api/users/{id}": "Delete a user (admins are protected)"
                },
                "communications": {
                    "GET /api/communications": "List messages and communications. Query: type, status, limit",
                    "POST /api/communications": "Create a message",
                    "GET /api/communications/{id}": "Fetch one message",
                    "PUT /api/communications/{id}": "Update a message",
                    "POST /api/communications/{id}/send": "Send a draft or scheduled message"
                },
                "activities": {
                    "GET /api/activities": "Activity feed, newest first. Query: department, limit",
                    "POST /api/activities": "Record an activity"
                },
                "analytics": {
                    "GET /api/dashboard": "Dashboard KPIs and live stats",
                    "GET /api/analytics": "Advanced analytics with insights. Query: timeframe, department",
                    "GET /api/trending": "Trending issues. Query: limit, timeframe",
                    "GET /api/search": "Relevance-ranked issue search. Query: q, limit"
                },
                "system": {
                    "GET /health": "Health check",
                    "GET /api": "This document"
                }
            }
        }
    }))
}
