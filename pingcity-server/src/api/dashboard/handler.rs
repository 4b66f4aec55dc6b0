//! Dashboard API Handlers

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::engine::aggregate::{
    PriorityStats, RealTimeStats, department_stats, priority_stats, real_time_stats,
};
use crate::utils::AppResult;
use shared::models::KpiData;

/// Headline KPI seed flattened together with the live counters
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAnalytics {
    #[serde(flatten)]
    pub kpi: KpiData,
    pub real_time_stats: RealTimeStats,
    pub department_stats: BTreeMap<String, usize>,
    pub priority_stats: PriorityStats,
    /// Issue count standing in for a rolling activity window
    pub recent_activity: usize,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub success: bool,
    pub data: DashboardAnalytics,
    pub timestamp: String,
}

/// GET /api/dashboard - headline figures for the overview page
pub async fn analytics(State(state): State<ServerState>) -> AppResult<Json<DashboardResponse>> {
    let issues = state.store.issues.snapshot();

    Ok(Json(DashboardResponse {
        success: true,
        data: DashboardAnalytics {
            kpi: state.store.kpi.clone(),
            real_time_stats: real_time_stats(&issues),
            department_stats: department_stats(&issues),
            priority_stats: priority_stats(&issues),
            recent_activity: issues.len(),
        },
        timestamp: chrono::Utc::now().to_rfc3339(),
    }))
}
