//! Query/Filter Engine
//!
//! Pure filtering over collection snapshots. All given criteria are
//! AND-combined; input order is preserved (rankers run afterwards on
//! the survivors). Enum-valued criteria match the wire string
//! case-sensitively, department/text criteria are case-insensitive
//! substring tests, the priority criterion is an inclusive floor.

use shared::models::{Activity, Communication, Issue, Message, User};

/// Case-insensitive substring containment
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Keep only the first `limit` records when a limit is given
pub fn take_limit<T>(records: Vec<T>, limit: Option<usize>) -> Vec<T> {
    match limit {
        Some(n) => records.into_iter().take(n).collect(),
        None => records,
    }
}

/// Criteria for issue listings
#[derive(Debug, Default, Clone)]
pub struct IssueFilter<'a> {
    pub status: Option<&'a str>,
    pub department: Option<&'a str>,
    pub min_priority: Option<u8>,
}

impl IssueFilter<'_> {
    pub fn matches(&self, issue: &Issue) -> bool {
        if let Some(status) = self.status
            && issue.status.as_str() != status
        {
            return false;
        }
        if let Some(dept) = self.department
            && !contains_ci(&issue.department, dept)
        {
            return false;
        }
        if let Some(min) = self.min_priority
            && issue.priority < min
        {
            return false;
        }
        true
    }

    pub fn apply(&self, issues: &[Issue]) -> Vec<Issue> {
        issues.iter().filter(|i| self.matches(i)).cloned().collect()
    }
}

/// Criteria for user listings
#[derive(Debug, Default, Clone)]
pub struct UserFilter<'a> {
    pub role: Option<&'a str>,
    pub department: Option<&'a str>,
    pub status: Option<&'a str>,
}

impl UserFilter<'_> {
    pub fn matches(&self, user: &User) -> bool {
        if let Some(role) = self.role
            && user.role.as_str() != role
        {
            return false;
        }
        if let Some(dept) = self.department {
            // users without a department never match a department filter
            match &user.department {
                Some(d) if contains_ci(d, dept) => {}
                _ => return false,
            }
        }
        if let Some(status) = self.status
            && user.status.as_str() != status
        {
            return false;
        }
        true
    }

    pub fn apply(&self, users: &[User]) -> Vec<User> {
        users.iter().filter(|u| self.matches(u)).cloned().collect()
    }
}

/// Criteria for message listings
#[derive(Debug, Default, Clone)]
pub struct MessageFilter<'a> {
    pub kind: Option<&'a str>,
    pub status: Option<&'a str>,
}

impl MessageFilter<'_> {
    pub fn matches(&self, message: &Message) -> bool {
        if let Some(kind) = self.kind
            && message.kind.as_str() != kind
        {
            return false;
        }
        if let Some(status) = self.status
            && message.status.as_str() != status
        {
            return false;
        }
        true
    }

    pub fn apply(&self, messages: &[Message]) -> Vec<Message> {
        messages.iter().filter(|m| self.matches(m)).cloned().collect()
    }
}

/// Criteria for the activity feed
#[derive(Debug, Default, Clone)]
pub struct ActivityFilter<'a> {
    pub department: Option<&'a str>,
}

impl ActivityFilter<'_> {
    pub fn matches(&self, activity: &Activity) -> bool {
        match self.department {
            Some(dept) => contains_ci(&activity.dept, dept),
            None => true,
        }
    }

    pub fn apply(&self, activities: &[Activity]) -> Vec<Activity> {
        activities
            .iter()
            .filter(|a| self.matches(a))
            .cloned()
            .collect()
    }
}

/// Communications have no dedicated criteria; only the shared limit
/// applies to them.
pub fn limit_communications(
    communications: &[Communication],
    limit: Option<usize>,
) -> Vec<Communication> {
    take_limit(communications.to_vec(), limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;
    use shared::models::IssueStatus;

    #[test]
    fn criteria_are_and_combined() {
        let issues = seed::issues();
        let filter = IssueFilter {
            status: Some("in-progress"),
            department: Some("roads"),
            min_priority: Some(8),
        };
        let result = filter.apply(&issues);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 4512);

        // same status, wrong department floor: nothing survives
        let filter = IssueFilter {
            status: Some("in-progress"),
            department: Some("sanitation"),
            min_priority: None,
        };
        assert!(filter.apply(&issues).is_empty());
    }

    #[test]
    fn status_filter_is_case_sensitive_exact() {
        let issues = seed::issues();
        let filter = IssueFilter {
            status: Some("In-Progress"),
            ..Default::default()
        };
        assert!(filter.apply(&issues).is_empty());
    }

    #[test]
    fn department_filter_is_ci_substring() {
        let issues = seed::issues();
        let filter = IssueFilter {
            department: Some("WATER"),
            ..Default::default()
        };
        let result = filter.apply(&issues);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].department, "Water Supply");
    }

    #[test]
    fn priority_floor_is_inclusive() {
        let issues = seed::issues();
        let filter = IssueFilter {
            min_priority: Some(8),
            ..Default::default()
        };
        let priorities: Vec<u8> = filter.apply(&issues).iter().map(|i| i.priority).collect();
        assert_eq!(priorities, vec![8, 9]);
    }

    #[test]
    fn filtering_preserves_input_order() {
        let issues = seed::issues();
        let filter = IssueFilter::default();
        let ids: Vec<u64> = filter.apply(&issues).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![4512, 4513, 4514]);
    }

    #[test]
    fn limit_takes_first_n() {
        let issues = seed::issues();
        assert_eq!(take_limit(issues.clone(), Some(2)).len(), 2);
        assert_eq!(take_limit(issues.clone(), Some(0)).len(), 0);
        assert_eq!(take_limit(issues, None).len(), 3);
    }

    #[test]
    fn user_without_department_never_matches_department_filter() {
        let users = seed::users();
        let filter = UserFilter {
            department: Some("water"),
            ..Default::default()
        };
        let result = filter.apply(&users);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Raj Kumar");
    }

    #[test]
    fn resolved_status_matches_wire_name() {
        let mut issues = seed::issues();
        issues[0].status = IssueStatus::Resolved;
        let filter = IssueFilter {
            status: Some("resolved"),
            ..Default::default()
        };
        assert_eq!(filter.apply(&issues).len(), 1);
    }
}
