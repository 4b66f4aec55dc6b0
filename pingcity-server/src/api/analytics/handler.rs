//! Analytics API Handlers
//!
//! Serves the analytics seed enriched with a live block computed per
//! request, plus rule-generated insights and request metadata.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::api::extract::ValidQuery;
use crate::core::ServerState;
use crate::engine::aggregate::{
    DepartmentAnalytics, DepartmentPerformance, department_analytics, department_performance,
};
use crate::engine::filter::contains_ci;
use crate::engine::insight::{Insight, generate_insights};
use crate::utils::AppResult;
use shared::models::{AnalyticsSeed, IssueStatus, UserStatus};

const DEFAULT_TIMEFRAME: &str = "30d";

// Seven-day trend placeholders until real telemetry lands
const NEW_ISSUES_TREND: [u32; 7] = [12, 8, 15, 10, 13, 9, 11];
const RESOLVED_ISSUES_TREND: [u32; 7] = [10, 12, 11, 14, 8, 13, 15];
const USER_ACTIVITY_TREND: [u32; 7] = [45, 52, 48, 61, 38, 44, 57];

#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    pub timeframe: Option<String>,
    pub department: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentTrends {
    pub new_issues: Vec<u32>,
    pub resolved_issues: Vec<u32>,
    pub user_activity: Vec<u32>,
}

/// Per-request live block alongside the seed
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealTimeAnalytics {
    pub active_issues: usize,
    pub avg_resolution_time: String,
    pub active_users: usize,
    /// Integer percentage from the load probe
    pub system_load: u32,
    pub department_performance: Vec<DepartmentPerformance>,
    pub recent_trends: RecentTrends,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    #[serde(flatten)]
    pub seed: AnalyticsSeed,
    pub real_time: RealTimeAnalytics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_specific: Option<DepartmentAnalytics>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsMetadata {
    pub timeframe: String,
    pub department: Option<String>,
    pub generated_at: String,
    /// Issue records backing this report
    pub data_points: usize,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub success: bool,
    pub data: AnalyticsData,
    pub insights: Vec<Insight>,
    pub metadata: AnalyticsMetadata,
}

/// GET /api/analytics - seed + live analytics with insights
pub async fn analytics(
    State(state): State<ServerState>,
    ValidQuery(query): ValidQuery<AnalyticsQuery>,
) -> AppResult<Json<AnalyticsResponse>> {
    let issues = state.store.issues.snapshot();
    let users = state.store.users.snapshot();
    let seed = state.store.analytics.clone();

    let real_time = RealTimeAnalytics {
        active_issues: issues
            .iter()
            .filter(|i| i.status != IssueStatus::Resolved)
            .count(),
        avg_resolution_time: "15.2h".to_string(),
        active_users: users
            .iter()
            .filter(|u| u.status == UserStatus::Active)
            .count(),
        system_load: state.load_probe.system_load(),
        department_performance: department_performance(
            &seed.performance.department_efficiency,
            &issues,
        ),
        recent_trends: RecentTrends {
            new_issues: NEW_ISSUES_TREND.to_vec(),
            resolved_issues: RESOLVED_ISSUES_TREND.to_vec(),
            user_activity: USER_ACTIVITY_TREND.to_vec(),
        },
    };

    let department_specific = query.department.as_deref().map(|dept| {
        let dept_issues: Vec<_> = issues
            .iter()
            .filter(|i| contains_ci(&i.department, dept))
            .cloned()
            .collect();
        department_analytics(&dept_issues)
    });

    let insights = generate_insights(&seed);

    Ok(Json(AnalyticsResponse {
        success: true,
        data: AnalyticsData {
            seed,
            real_time,
            department_specific,
        },
        insights,
        metadata: AnalyticsMetadata {
            timeframe: query
                .timeframe
                .unwrap_or_else(|| DEFAULT_TIMEFRAME.to_string()),
            department: query.department,
            generated_at: chrono::Utc::now().to_rfc3339(),
            data_points: issues.len(),
        },
    }))
}
