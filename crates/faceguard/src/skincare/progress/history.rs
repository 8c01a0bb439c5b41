use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::comparison::{compare, ComparisonResult};
use super::summary::ExternalInsights;
use crate::skincare::domain::{MetricSet, ProgressRecord, ScanId};

/// Longest history window served; larger requests are clamped to it.
pub const MAX_HISTORY_WEEKS: u32 = 520;

pub const WEEKLY_REPORT_UNAVAILABLE: &str =
    "Not enough data for weekly report. Complete at least 2 scans.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    pub date: DateTime<Utc>,
    pub glow_score: u8,
    pub metrics: MetricSet,
    pub scan_id: ScanId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressHistory {
    pub total_scans: usize,
    pub time_range: TimeRange,
    pub data: Vec<HistoryPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub scans_this_week: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_adjust_routine: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adjustment_suggestions: Vec<String>,
}

impl WeeklyReport {
    fn unavailable(scans_this_week: usize) -> Self {
        Self {
            available: false,
            message: Some(WEEKLY_REPORT_UNAVAILABLE.to_string()),
            scans_this_week,
            comparison: None,
            recommendations: Vec::new(),
            should_adjust_routine: None,
            adjustment_suggestions: Vec::new(),
        }
    }
}

/// Start of the trailing `weeks` window ending at `now`, with `weeks` capped at
/// [`MAX_HISTORY_WEEKS`].
pub fn window_start(weeks: u32, now: DateTime<Utc>) -> DateTime<Utc> {
    let span = Duration::weeks(i64::from(weeks.min(MAX_HISTORY_WEEKS)));
    now.checked_sub_signed(span)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Records inside the trailing `weeks` window, oldest first.
pub fn window(
    records: &[ProgressRecord],
    weeks: u32,
    now: DateTime<Utc>,
) -> Vec<&ProgressRecord> {
    let since = window_start(weeks, now);
    let mut selected: Vec<&ProgressRecord> = records
        .iter()
        .filter(|record| record.timestamp >= since && record.timestamp <= now)
        .collect();
    selected.sort_by_key(|record| record.timestamp);
    selected
}

pub fn history(records: &[ProgressRecord], weeks: u32, now: DateTime<Utc>) -> ProgressHistory {
    let selected = window(records, weeks, now);

    ProgressHistory {
        total_scans: selected.len(),
        time_range: TimeRange {
            start: selected.first().map(|record| record.timestamp),
            end: selected.last().map(|record| record.timestamp),
        },
        data: selected
            .iter()
            .map(|record| HistoryPoint {
                date: record.timestamp,
                glow_score: record.glow_score,
                metrics: record.metrics.clone(),
                scan_id: record.scan_id.clone(),
            })
            .collect(),
    }
}

/// Compares the two most recent records of the trailing week. Fewer than two records
/// yields an unavailable report rather than an error.
pub fn weekly_report(
    records: &[ProgressRecord],
    now: DateTime<Utc>,
    insights: Option<&ExternalInsights>,
) -> WeeklyReport {
    let selected = window(records, 1, now);
    let [.., previous, latest] = selected.as_slice() else {
        return WeeklyReport::unavailable(selected.len());
    };

    WeeklyReport {
        available: true,
        message: None,
        scans_this_week: selected.len(),
        comparison: Some(compare(previous, latest, insights)),
        recommendations: insights
            .map(|insights| insights.recommendations.clone())
            .unwrap_or_default(),
        should_adjust_routine: insights.and_then(|insights| insights.should_adjust_routine),
        adjustment_suggestions: insights
            .map(|insights| insights.adjustment_suggestions.clone())
            .unwrap_or_default(),
    }
}
