use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::comparison::MetricChange;
use crate::skincare::domain::Metric;

/// Metric deltas at or below this magnitude are noise.
const SIGNIFICANT_DELTA: i32 = 5;

/// Qualitative commentary from the analysis collaborator about two scans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalInsights {
    pub improvements: Vec<String>,
    pub concerns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivational_message: Option<String>,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_adjust_routine: Option<bool>,
    pub adjustment_suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallTrend {
    Positive,
    NeedsAttention,
    Stable,
}

impl OverallTrend {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::NeedsAttention => "Needs Attention",
            Self::Stable => "Stable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub improvements: Vec<String>,
    pub concerns: Vec<String>,
    pub overall_trend: OverallTrend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivational_message: Option<String>,
}

/// Folds metric changes into improvements and concerns.
///
/// Locally computed lists win; external lists only fill a side the metrics left empty.
/// The overall trend is always decided by the local counts.
pub fn summarize(
    changes: &BTreeMap<Metric, MetricChange>,
    insights: Option<&ExternalInsights>,
) -> ProgressSummary {
    let mut improvements = Vec::new();
    let mut concerns = Vec::new();

    for (metric, change) in changes {
        if change.delta.abs() <= SIGNIFICANT_DELTA {
            continue;
        }
        let percent = change.percent_change.abs();
        let label = metric.label();
        let improved = if metric.lower_is_better() {
            change.delta < 0
        } else {
            change.delta > 0
        };

        match (improved, metric.lower_is_better()) {
            (true, _) => improvements.push(format!("{label}: Improved by {percent}%")),
            (false, true) => concerns.push(format!("{label}: Increased by {percent}%")),
            (false, false) => concerns.push(format!("{label}: Decreased by {percent}%")),
        }
    }

    let overall_trend = match improvements.len().cmp(&concerns.len()) {
        std::cmp::Ordering::Greater => OverallTrend::Positive,
        std::cmp::Ordering::Less => OverallTrend::NeedsAttention,
        std::cmp::Ordering::Equal => OverallTrend::Stable,
    };

    if let Some(insights) = insights {
        if improvements.is_empty() {
            improvements = insights.improvements.clone();
        }
        if concerns.is_empty() {
            concerns = insights.concerns.clone();
        }
    }

    ProgressSummary {
        improvements,
        concerns,
        overall_trend,
        motivational_message: insights.and_then(|insights| insights.motivational_message.clone()),
    }
}
