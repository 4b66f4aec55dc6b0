//! Relevance Scorer
//!
//! Fixed linear heuristic ranking search results. The weights are
//! load-bearing for existing dashboard clients and must not change.

use std::cmp::Ordering;

use shared::models::Issue;

use crate::engine::filter::contains_ci;

const TITLE_WEIGHT: f64 = 10.0;
const DESCRIPTION_WEIGHT: f64 = 5.0;
const LOCATION_WEIGHT: f64 = 3.0;
const DEPARTMENT_WEIGHT: f64 = 2.0;
const UPVOTE_WEIGHT: f64 = 0.5;

/// Whether the issue matches the query in any searched field
///
/// Issues matching in no field are excluded from results entirely,
/// regardless of priority/upvote boosts.
pub fn matches_query(issue: &Issue, query: &str) -> bool {
    contains_ci(&issue.title, query)
        || contains_ci(&issue.description, query)
        || contains_ci(&issue.location, query)
        || contains_ci(&issue.department, query)
}

/// Relevance score of one issue against a query
///
/// Field-match weights (title 10, description 5, location 3,
/// department 2) plus the issue's priority plus half its upvotes.
pub fn relevance_score(issue: &Issue, query: &str) -> f64 {
    let mut score = 0.0;

    if contains_ci(&issue.title, query) {
        score += TITLE_WEIGHT;
    }
    if contains_ci(&issue.description, query) {
        score += DESCRIPTION_WEIGHT;
    }
    if contains_ci(&issue.location, query) {
        score += LOCATION_WEIGHT;
    }
    if contains_ci(&issue.department, query) {
        score += DEPARTMENT_WEIGHT;
    }

    score += issue.priority as f64;
    score += issue.upvotes as f64 * UPVOTE_WEIGHT;

    score
}

/// Rank the matching issues by descending relevance
///
/// The sort is stable: equal-score issues keep their collection order,
/// so repeated calls over the same snapshot return identical results.
pub fn search(issues: &[Issue], query: &str) -> Vec<Issue> {
    let mut scored: Vec<(f64, Issue)> = issues
        .iter()
        .filter(|i| matches_query(i, query))
        .map(|i| (relevance_score(i, query), i.clone()))
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.into_iter().map(|(_, issue)| issue).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;
    use shared::models::IssueStatus;

    fn issue(id: u64, title: &str, dept: &str, priority: u8, upvotes: u32) -> Issue {
        Issue {
            id,
            title: title.to_string(),
            status: IssueStatus::New,
            department: dept.to_string(),
            priority,
            upvotes,
            location: "somewhere".to_string(),
            reported_date: "1 day ago".to_string(),
            assigned_to: None,
            description: "details".to_string(),
        }
    }

    #[test]
    fn weights_add_up() {
        let i = issue(1, "Water main burst", "Water Supply", 7, 4);
        // title (10) + department (2) + priority (7) + upvotes (2.0)
        assert_eq!(relevance_score(&i, "water"), 21.0);
    }

    #[test]
    fn non_matching_issue_is_excluded_despite_high_boosts() {
        let issues = vec![issue(1, "Streetlight out", "Lighting", 10, 100)];
        assert!(search(&issues, "water").is_empty());
    }

    #[test]
    fn title_match_outranks_department_match() {
        // seed issue 4514 matches "water" in title + department;
        // an issue matching only in department must rank below it even
        // with higher priority and upvotes
        let mut issues = seed::issues();
        issues.push(issue(9000, "Leaking hydrant valve", "Water Supply", 10, 30));

        let results = search(&issues, "water");
        assert_eq!(results[0].id, 4514);
    }

    #[test]
    fn equal_scores_keep_collection_order() {
        let issues = vec![
            issue(1, "Noise complaint", "General", 5, 2),
            issue(2, "Noise complaint", "General", 5, 2),
            issue(3, "Noise complaint", "General", 5, 2),
        ];
        let ids: Vec<u64> = search(&issues, "noise").iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn ranking_is_deterministic() {
        let issues = seed::issues();
        let first: Vec<u64> = search(&issues, "a").iter().map(|i| i.id).collect();
        for _ in 0..10 {
            let again: Vec<u64> = search(&issues, "a").iter().map(|i| i.id).collect();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn query_is_case_insensitive() {
        let issues = seed::issues();
        assert_eq!(search(&issues, "WATER").len(), search(&issues, "water").len());
    }
}
