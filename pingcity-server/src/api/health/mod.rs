//! Health check routes
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /health | GET | liveness and seeded collection sizes |

use std::time::SystemTime;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// Health check routes, no auth
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// healthy | degraded
    status: &'static str,
    version: &'static str,
    environment: String,
    uptime_seconds: u64,
    collections: CollectionSizes,
}

#[derive(Serialize)]
pub struct CollectionSizes {
    issues: usize,
    users: usize,
    messages: usize,
    communications: usize,
    activities: usize,
}

// Server start time, initialized on first probe
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

fn uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        uptime_seconds: uptime_seconds(),
        collections: CollectionSizes {
            issues: state.store.issues.len(),
            users: state.store.users.len(),
            messages: state.store.messages.len(),
            communications: state.store.communications.len(),
            activities: state.store.activities.len(),
        },
    })
}
