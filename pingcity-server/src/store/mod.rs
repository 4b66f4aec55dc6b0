//! Collection Store
//!
//! The only mutable state in the system: one in-memory [`Collection`]
//! per entity type plus the fixed KPI/trending/analytics seed
//! constants. Handlers mutate the collections directly; the engines in
//! [`crate::engine`] only ever see snapshots.

pub mod collection;
pub mod seed;

pub use collection::{Collection, Record};

use shared::models::{
    Activity, AnalyticsSeed, Communication, Issue, KpiData, Message, TrendingIssue, User,
};

impl Record for Issue {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for User {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Message {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Communication {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Activity {
    fn id(&self) -> u64 {
        self.id
    }
}

/// All collections plus the fixed seed constants
pub struct Store {
    pub issues: Collection<Issue>,
    pub users: Collection<User>,
    pub messages: Collection<Message>,
    pub communications: Collection<Communication>,
    pub activities: Collection<Activity>,
    pub kpi: KpiData,
    pub trending: Vec<TrendingIssue>,
    pub analytics: AnalyticsSeed,
}

impl Store {
    /// Build the store with the standard seed data
    pub fn seeded() -> Self {
        Self {
            issues: Collection::seeded(seed::issues()),
            users: Collection::seeded(seed::users()),
            messages: Collection::seeded(seed::messages()),
            communications: Collection::seeded(seed::communications()),
            activities: Collection::seeded(seed::recent_activity()),
            kpi: seed::kpi_data(),
            trending: seed::trending_issues(),
            analytics: seed::analytics_data(),
        }
    }
}
