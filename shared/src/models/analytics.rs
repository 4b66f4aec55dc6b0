//! Analytics seed constants and derived analytics shapes
//!
//! The seed values are fixed at process start; the `/api/analytics`
//! and `/api/dashboard` endpoints recompute their derived views from
//! the live collections on every request.

use serde::{Deserialize, Serialize};

/// Headline KPI figures shown at the top of the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiData {
    pub new_reports: u32,
    pub avg_response_time: String,
    pub avg_resolution_time: String,
    pub resolution_rate: u32,
}

/// Direction of a department's efficiency trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EfficiencyTrend {
    Up,
    Down,
    Stable,
}

/// Seed efficiency figures per department
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentEfficiency {
    pub department: String,
    /// Percentage 0-100
    pub efficiency: u32,
    pub trend: EfficiencyTrend,
}

/// Citizen satisfaction survey aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitizenSatisfaction {
    /// 1.0-5.0 scale
    pub rating: f64,
    /// Delta vs previous period, sign carries direction
    pub trend: f64,
    pub responses: u32,
}

/// Monthly reported/resolved counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyIssueCount {
    pub month: String,
    pub reported: u32,
    pub resolved: u32,
}

/// Issue volume per category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueCategory {
    pub category: String,
    pub count: u32,
    pub percentage: u32,
}

/// Issue volume per geographic area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeographicArea {
    pub area: String,
    pub issues: u32,
    pub resolved: u32,
}

/// Historical trend seeds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeed {
    pub monthly_issues: Vec<MonthlyIssueCount>,
    pub issue_categories: Vec<IssueCategory>,
    pub geographic_distribution: Vec<GeographicArea>,
}

/// Performance seeds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSeed {
    pub department_efficiency: Vec<DepartmentEfficiency>,
    pub citizen_satisfaction: CitizenSatisfaction,
}

/// Additional staff recommendation for a department
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceNeed {
    pub department: String,
    pub additional_staff: u32,
    pub priority: String,
}

/// Forecast seeds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSeed {
    pub next_month_issues: u32,
    pub high_risk_areas: Vec<String>,
    pub resource_needs: Vec<ResourceNeed>,
}

/// Full analytics seed block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSeed {
    pub trends: TrendSeed,
    pub performance: PerformanceSeed,
    pub predictions: PredictionSeed,
}
