//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`docs`] - API self-description at `/api`
//! - [`issues`] - issue CRUD, voting
//! - [`users`] - user management
//! - [`communications`] - messages and communications
//! - [`activities`] - activity feed
//! - [`dashboard`] - dashboard analytics
//! - [`trending`] - trending ranking
//! - [`search`] - relevance search
//! - [`analytics`] - advanced analytics and insights

pub mod extract;

pub mod docs;
pub mod health;

pub mod activities;
pub mod analytics;
pub mod communications;
pub mod dashboard;
pub mod issues;
pub mod search;
pub mod trending;
pub mod users;

use axum::Router;

use crate::core::ServerState;

/// All API routes, state not yet attached
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(docs::router())
        .merge(issues::router())
        .merge(users::router())
        .merge(communications::router())
        .merge(activities::router())
        .merge(dashboard::router())
        .merge(trending::router())
        .merge(search::router())
        .merge(analytics::router())
}

/// Assemble the full application with state attached
pub fn app(state: ServerState) -> Router {
    router().with_state(state)
}
