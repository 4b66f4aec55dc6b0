//! Search API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::api::extract::ValidQuery;
use crate::core::ServerState;
use crate::engine::filter::take_limit;
use crate::engine::relevance;
use crate::utils::validation::is_present;
use crate::utils::{AppError, AppResult};
use shared::models::Issue;

const DEFAULT_LIMIT: usize = 20;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub data: Vec<Issue>,
    /// Matches before the limit is applied
    pub total: usize,
    pub query: String,
    pub limit: usize,
}

/// GET /api/search - relevance-ranked issue search
pub async fn search(
    State(state): State<ServerState>,
    ValidQuery(query): ValidQuery<SearchQuery>,
) -> AppResult<Json<SearchResponse>> {
    let Some(q) = query.q.filter(|q| is_present(Some(q.as_str()))) else {
        return Err(AppError::Validation("Search query is required".to_string()));
    };

    let issues = state.store.issues.snapshot();
    let results = relevance::search(&issues, &q);
    let total = results.len();
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    Ok(Json(SearchResponse {
        success: true,
        data: take_limit(results, Some(limit)),
        total,
        query: q,
        limit,
    }))
}
