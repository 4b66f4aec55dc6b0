//! Activity Model (staff action log, newest first)

use serde::{Deserialize, Serialize};

/// Logged staff/admin action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub user: String,
    pub action: String,
    pub time: String,
    pub dept: String,
}

/// Create activity payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityCreate {
    pub user: Option<String>,
    pub action: Option<String>,
    pub dept: Option<String>,
}
