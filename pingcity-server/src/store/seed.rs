//! Seed data
//!
//! Initial collection contents and the fixed KPI/trending/analytics
//! constants. Loaded once at process start; everything else the API
//! serves is derived from these plus subsequent mutations.

use shared::models::{
    Activity, AnalyticsSeed, CitizenSatisfaction, Communication, CommunicationStatus,
    CommunicationType, DepartmentEfficiency, EfficiencyTrend, Engagement, GeographicArea, Issue,
    IssueCategory, IssueStatus, KpiData, Message, MessageStatus, MessageType, MonthlyIssueCount,
    PerformanceSeed, PredictionSeed, ResourceNeed, TrendSeed, TrendingIssue, User, UserRole,
    UserStatus, default_permissions,
};

pub fn kpi_data() -> KpiData {
    KpiData {
        new_reports: 42,
        avg_response_time: "2.3h".to_string(),
        avg_resolution_time: "18.5h".to_string(),
        resolution_rate: 87,
    }
}

pub fn trending_issues() -> Vec<TrendingIssue> {
    vec![
        TrendingIssue {
            id: 1,
            title: "Potholes on Park Street".to_string(),
            upvotes: 34,
            kind: "roads".to_string(),
            priority: 8,
        },
        TrendingIssue {
            id: 2,
            title: "Water logging in Sector V".to_string(),
            upvotes: 28,
            kind: "water".to_string(),
            priority: 9,
        },
        TrendingIssue {
            id: 3,
            title: "Broken streetlight cluster".to_string(),
            upvotes: 19,
            kind: "lighting".to_string(),
            priority: 6,
        },
    ]
}

pub fn recent_activity() -> Vec<Activity> {
    vec![
        Activity {
            id: 1,
            user: "Priya Singh".to_string(),
            action: "marked Issue #4512 as In Progress".to_string(),
            time: "5 min ago".to_string(),
            dept: "Public Works".to_string(),
        },
        Activity {
            id: 2,
            user: "Raj Kumar".to_string(),
            action: "resolved water logging complaint".to_string(),
            time: "12 min ago".to_string(),
            dept: "Water Supply".to_string(),
        },
        Activity {
            id: 3,
            user: "Admin".to_string(),
            action: "assigned pothole report to road dept".to_string(),
            time: "18 min ago".to_string(),
            dept: "Roads".to_string(),
        },
    ]
}

pub fn issues() -> Vec<Issue> {
    vec![
        Issue {
            id: 4512,
            title: "Large pothole on Main Road".to_string(),
            status: IssueStatus::InProgress,
            department: "Roads".to_string(),
            priority: 8,
            upvotes: 15,
            location: "Park Street, Sector 2".to_string(),
            reported_date: "2 days ago".to_string(),
            assigned_to: Some("Priya Singh".to_string()),
            description: "Deep pothole causing traffic issues and vehicle damage".to_string(),
        },
        Issue {
            id: 4513,
            title: "Overflowing garbage bin".to_string(),
            status: IssueStatus::New,
            department: "Sanitation".to_string(),
            priority: 6,
            upvotes: 8,
            location: "Market Square".to_string(),
            reported_date: "4 hours ago".to_string(),
            assigned_to: None,
            description: "Garbage bin overflowing, attracting pests".to_string(),
        },
        Issue {
            id: 4514,
            title: "Water supply disruption".to_string(),
            status: IssueStatus::Assigned,
            department: "Water Supply".to_string(),
            priority: 9,
            upvotes: 23,
            location: "Residential Area Block A".to_string(),
            reported_date: "1 day ago".to_string(),
            assigned_to: Some("Raj Kumar".to_string()),
            description: "No water supply for 12+ hours in entire block".to_string(),
        },
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Anita Desai".to_string(),
            email: "anita.desai@pingcity.gov".to_string(),
            role: UserRole::Admin,
            department: Some("Administration".to_string()),
            status: UserStatus::Active,
            reputation: 4.9,
            total_reports: 12,
            join_date: "2023-01-15".to_string(),
            last_login: "2024-06-10 09:12".to_string(),
            permissions: default_permissions(UserRole::Admin),
        },
        User {
            id: 2,
            name: "Priya Singh".to_string(),
            email: "priya.singh@pingcity.gov".to_string(),
            role: UserRole::Staff,
            department: Some("Public Works".to_string()),
            status: UserStatus::Active,
            reputation: 4.6,
            total_reports: 48,
            join_date: "2023-03-02".to_string(),
            last_login: "2024-06-11 14:40".to_string(),
            permissions: default_permissions(UserRole::Staff),
        },
        User {
            id: 3,
            name: "Raj Kumar".to_string(),
            email: "raj.kumar@pingcity.gov".to_string(),
            role: UserRole::Staff,
            department: Some("Water Supply".to_string()),
            status: UserStatus::Active,
            reputation: 4.4,
            total_reports: 37,
            join_date: "2023-02-20".to_string(),
            last_login: "2024-06-11 08:05".to_string(),
            permissions: default_permissions(UserRole::Staff),
        },
        User {
            id: 4,
            name: "Meera Patel".to_string(),
            email: "meera.patel@example.com".to_string(),
            role: UserRole::Citizen,
            department: None,
            status: UserStatus::Active,
            reputation: 3.8,
            total_reports: 9,
            join_date: "2023-08-11".to_string(),
            last_login: "2024-06-09 19:27".to_string(),
            permissions: default_permissions(UserRole::Citizen),
        },
        User {
            id: 5,
            name: "Arjun Sharma".to_string(),
            email: "arjun.sharma@example.com".to_string(),
            role: UserRole::Citizen,
            department: None,
            status: UserStatus::Suspended,
            reputation: 2.1,
            total_reports: 3,
            join_date: "2024-01-05".to_string(),
            last_login: "2024-04-22 11:02".to_string(),
            permissions: default_permissions(UserRole::Citizen),
        },
    ]
}

pub fn messages() -> Vec<Message> {
    vec![
        Message {
            id: 101,
            kind: MessageType::Announcement,
            title: "Planned water maintenance".to_string(),
            content: "Water supply will be interrupted in Sector 2 on Saturday 6:00-10:00."
                .to_string(),
            sender: "Water Supply".to_string(),
            recipients: vec!["all-citizens".to_string()],
            status: MessageStatus::Sent,
            priority: "high".to_string(),
            created_at: "2024-06-08T10:00:00Z".to_string(),
            sent_at: Some("2024-06-08T10:05:00Z".to_string()),
            scheduled_at: None,
            read_by: vec![2, 3, 4],
            channels: vec!["in-app".to_string(), "sms".to_string()],
        },
        Message {
            id: 102,
            kind: MessageType::Alert,
            title: "Monsoon preparedness advisory".to_string(),
            content: "Report water logging early. Emergency line: 1800-PING.".to_string(),
            sender: "Admin".to_string(),
            recipients: vec!["all-citizens".to_string(), "staff".to_string()],
            status: MessageStatus::Draft,
            priority: "medium".to_string(),
            created_at: "2024-06-10T15:30:00Z".to_string(),
            sent_at: None,
            scheduled_at: None,
            read_by: vec![],
            channels: vec!["in-app".to_string()],
        },
        Message {
            id: 103,
            kind: MessageType::Update,
            title: "Pothole repairs schedule".to_string(),
            content: "Main Road repairs begin Monday; expect diversions.".to_string(),
            sender: "Roads".to_string(),
            recipients: vec!["Sector 2".to_string()],
            status: MessageStatus::Scheduled,
            priority: "low".to_string(),
            created_at: "2024-06-11T09:00:00Z".to_string(),
            sent_at: None,
            scheduled_at: Some("2024-06-14T08:00:00Z".to_string()),
            read_by: vec![],
            channels: vec!["in-app".to_string(), "email".to_string()],
        },
    ]
}

pub fn communications() -> Vec<Communication> {
    vec![
        Communication {
            id: 201,
            title: "Clean City Drive".to_string(),
            message: "Join the weekend clean-up drive across all sectors.".to_string(),
            kind: CommunicationType::Public,
            audience: vec!["all-citizens".to_string()],
            created_by: "Admin".to_string(),
            created_at: "2024-06-01T08:00:00Z".to_string(),
            status: CommunicationStatus::Active,
            engagement: Engagement {
                views: 1840,
                clicks: 320,
                responses: 95,
            },
        },
        Communication {
            id: 202,
            title: "Water Supply staff briefing".to_string(),
            message: "Revised maintenance roster effective next week.".to_string(),
            kind: CommunicationType::Department,
            audience: vec!["Water Supply".to_string()],
            created_by: "Raj Kumar".to_string(),
            created_at: "2024-06-05T12:00:00Z".to_string(),
            status: CommunicationStatus::Inactive,
            engagement: Engagement {
                views: 64,
                clicks: 12,
                responses: 8,
            },
        },
    ]
}

pub fn analytics_data() -> AnalyticsSeed {
    AnalyticsSeed {
        trends: TrendSeed {
            monthly_issues: vec![
                MonthlyIssueCount {
                    month: "Jan".to_string(),
                    reported: 145,
                    resolved: 132,
                },
                MonthlyIssueCount {
                    month: "Feb".to_string(),
                    reported: 128,
                    resolved: 121,
                },
                MonthlyIssueCount {
                    month: "Mar".to_string(),
                    reported: 162,
                    resolved: 148,
                },
                MonthlyIssueCount {
                    month: "Apr".to_string(),
                    reported: 151,
                    resolved: 139,
                },
                MonthlyIssueCount {
                    month: "May".to_string(),
                    reported: 170,
                    resolved: 150,
                },
                MonthlyIssueCount {
                    month: "Jun".to_string(),
                    reported: 158,
                    resolved: 137,
                },
            ],
            issue_categories: vec![
                IssueCategory {
                    category: "Roads".to_string(),
                    count: 64,
                    percentage: 32,
                },
                IssueCategory {
                    category: "Water Supply".to_string(),
                    count: 48,
                    percentage: 24,
                },
                IssueCategory {
                    category: "Sanitation".to_string(),
                    count: 42,
                    percentage: 21,
                },
                IssueCategory {
                    category: "Lighting".to_string(),
                    count: 28,
                    percentage: 14,
                },
                IssueCategory {
                    category: "Other".to_string(),
                    count: 18,
                    percentage: 9,
                },
            ],
            geographic_distribution: vec![
                GeographicArea {
                    area: "Sector 2".to_string(),
                    issues: 54,
                    resolved: 41,
                },
                GeographicArea {
                    area: "Sector 3".to_string(),
                    issues: 67,
                    resolved: 44,
                },
                GeographicArea {
                    area: "Market Square".to_string(),
                    issues: 38,
                    resolved: 30,
                },
                GeographicArea {
                    area: "Block A".to_string(),
                    issues: 29,
                    resolved: 22,
                },
            ],
        },
        performance: PerformanceSeed {
            department_efficiency: vec![
                DepartmentEfficiency {
                    department: "Roads".to_string(),
                    efficiency: 78,
                    trend: EfficiencyTrend::Up,
                },
                DepartmentEfficiency {
                    department: "Water Supply".to_string(),
                    efficiency: 85,
                    trend: EfficiencyTrend::Up,
                },
                DepartmentEfficiency {
                    department: "Sanitation".to_string(),
                    efficiency: 72,
                    trend: EfficiencyTrend::Down,
                },
                DepartmentEfficiency {
                    department: "Lighting".to_string(),
                    efficiency: 80,
                    trend: EfficiencyTrend::Stable,
                },
            ],
            citizen_satisfaction: CitizenSatisfaction {
                rating: 4.2,
                trend: 0.3,
                responses: 1247,
            },
        },
        predictions: PredictionSeed {
            next_month_issues: 195,
            high_risk_areas: vec!["Sector 3".to_string(), "Market Square".to_string()],
            resource_needs: vec![
                ResourceNeed {
                    department: "Sanitation".to_string(),
                    additional_staff: 4,
                    priority: "high".to_string(),
                },
                ResourceNeed {
                    department: "Roads".to_string(),
                    additional_staff: 2,
                    priority: "medium".to_string(),
                },
            ],
        },
    }
}
