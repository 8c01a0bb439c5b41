use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::summary::{summarize, ExternalInsights, ProgressSummary};
use crate::skincare::domain::{Metric, ProgressRecord};

const MILLIS_PER_DAY: u64 = 86_400_000;

/// Raw direction of a metric's movement. Whether the movement is good depends on the
/// metric and is decided by the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricTrend {
    Improving,
    Declining,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricChange {
    pub previous: u8,
    pub current: u8,
    pub delta: i32,
    /// Rounded to one decimal; zero when `previous` is zero.
    pub percent_change: f64,
    pub trend: MetricTrend,
}

impl MetricChange {
    pub fn between(previous: u8, current: u8) -> Self {
        let delta = i32::from(current) - i32::from(previous);
        let percent_change = if previous == 0 {
            0.0
        } else {
            (f64::from(delta) / f64::from(previous) * 1000.0).round() / 10.0
        };
        let trend = match delta.signum() {
            1 => MetricTrend::Improving,
            -1 => MetricTrend::Declining,
            _ => MetricTrend::Stable,
        };

        Self {
            previous,
            current,
            delta,
            percent_change,
            trend,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub days_between: u64,
    pub glow_score_change: i32,
    pub metric_changes: BTreeMap<Metric, MetricChange>,
    pub summary: ProgressSummary,
}

/// Whole days separating two instants, rounded up. Order-insensitive.
pub fn days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> u64 {
    (b - a)
        .num_milliseconds()
        .unsigned_abs()
        .div_ceil(MILLIS_PER_DAY)
}

pub fn compare(
    previous: &ProgressRecord,
    current: &ProgressRecord,
    insights: Option<&ExternalInsights>,
) -> ComparisonResult {
    let metric_changes: BTreeMap<Metric, MetricChange> = Metric::ordered()
        .into_iter()
        .map(|metric| {
            (
                metric,
                MetricChange::between(previous.metrics.get(metric), current.metrics.get(metric)),
            )
        })
        .collect();

    ComparisonResult {
        days_between: days_between(previous.timestamp, current.timestamp),
        glow_score_change: i32::from(current.glow_score) - i32::from(previous.glow_score),
        summary: summarize(&metric_changes, insights),
        metric_changes,
    }
}
