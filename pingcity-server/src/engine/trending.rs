//! Trending Ranker
//!
//! Orders the full issue collection by the composite popularity score
//! `upvotes + priority`, descending. No filtering; the static seed
//! list is served alongside this ranking by the trending endpoint and
//! the two are never merged.

use std::cmp::Reverse;

use shared::models::Issue;

/// Composite trending score
pub fn trending_score(issue: &Issue) -> u64 {
    issue.upvotes as u64 + issue.priority as u64
}

/// Top `limit` issues by descending trending score
///
/// Stable: equal scores keep collection order.
pub fn rank(issues: &[Issue], limit: usize) -> Vec<Issue> {
    let mut ranked = issues.to_vec();
    ranked.sort_by_key(|i| Reverse(trending_score(i)));
    ranked.truncate(limit);
    ranked
}
