//! Shared types for the PingCity dashboard
//!
//! Domain models and response structures used by the server
//! and by API clients (the admin UI consumes these over JSON).

pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use response::ApiResponse;
