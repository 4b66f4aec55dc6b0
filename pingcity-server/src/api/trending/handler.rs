//! Trending API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::api::extract::ValidQuery;
use crate::core::ServerState;
use crate::engine::trending;
use crate::utils::AppResult;
use shared::ApiResponse;
use shared::models::{Issue, TrendingIssue};

const DEFAULT_LIMIT: usize = 10;
const DEFAULT_TIMEFRAME: &str = "48h";

#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    pub limit: Option<usize>,
    pub timeframe: Option<String>,
}

/// Live ranking plus the pre-ranked seed list, never merged
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingData {
    pub issues: Vec<Issue>,
    pub static_trending: Vec<TrendingIssue>,
    pub timeframe: String,
    pub generated_at: String,
}

/// GET /api/trending - issues ranked by upvotes + priority
pub async fn trending(
    State(state): State<ServerState>,
    ValidQuery(query): ValidQuery<TrendingQuery>,
) -> AppResult<Json<ApiResponse<TrendingData>>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let issues = state.store.issues.snapshot();
    let ranked = trending::rank(&issues, limit);

    let mut static_trending = state.store.trending.clone();
    static_trending.truncate(limit);

    Ok(Json(ApiResponse::ok(TrendingData {
        issues: ranked,
        static_trending,
        timeframe: query
            .timeframe
            .unwrap_or_else(|| DEFAULT_TIMEFRAME.to_string()),
        generated_at: chrono::Utc::now().to_rfc3339(),
    })))
}
