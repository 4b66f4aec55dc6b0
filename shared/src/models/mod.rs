//! Data models
//!
//! Shared between pingcity-server and the admin UI (via API).
//! All IDs are `u64`, assigned by the server's monotonic allocators.
//! Wire names are camelCase to match the existing dashboard clients.

pub mod activity;
pub mod analytics;
pub mod communication;
pub mod issue;
pub mod message;
pub mod user;

// Re-exports
pub use activity::*;
pub use analytics::*;
pub use communication::*;
pub use issue::*;
pub use message::*;
pub use user::*;
