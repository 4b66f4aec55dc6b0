//! Insight Generator
//!
//! Fixed threshold rules over the analytics seed, evaluated in order.
//! Rules are independent: every matching rule fires, and the emission
//! order always follows the rule list.

use serde::Serialize;
use shared::models::{AnalyticsSeed, EfficiencyTrend};

/// Predicted monthly volume above this triggers the capacity alert
pub const HIGH_VOLUME_THRESHOLD: u32 = 180;

/// Satisfaction ratings below this trigger the satisfaction warning
pub const SATISFACTION_FLOOR: f64 = 4.0;

/// Rule-triggered advisory record
#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub message: String,
    pub priority: &'static str,
}

/// Evaluate all rules against the analytics seed
pub fn generate_insights(analytics: &AnalyticsSeed) -> Vec<Insight> {
    let mut insights = Vec::new();

    // 1. Departments with declining efficiency
    let declining: Vec<&str> = analytics
        .performance
        .department_efficiency
        .iter()
        .filter(|d| d.trend == EfficiencyTrend::Down)
        .map(|d| d.department.as_str())
        .collect();

    if !declining.is_empty() {
        insights.push(Insight {
            kind: "warning",
            title: "Declining Department Performance",
            message: format!("{} showing declining efficiency", declining.join(", ")),
            priority: "high",
        });
    }

    // 2. High predicted issue volume
    if analytics.predictions.next_month_issues > HIGH_VOLUME_THRESHOLD {
        insights.push(Insight {
            kind: "alert",
            title: "High Issue Volume Predicted",
            message: format!(
                "Expecting {} issues next month - consider resource allocation",
                analytics.predictions.next_month_issues
            ),
            priority: "medium",
        });
    }

    // 3. Citizen satisfaction below target
    if analytics.performance.citizen_satisfaction.rating < SATISFACTION_FLOOR {
        insights.push(Insight {
            kind: "warning",
            title: "Low Citizen Satisfaction",
            message: "Citizen satisfaction below target threshold".to_string(),
            priority: "high",
        });
    }

    insights
}
