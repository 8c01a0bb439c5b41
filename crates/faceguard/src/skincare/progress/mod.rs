//! Longitudinal analytics over a user's scan history. Every function here is pure;
//! history is handed in by the caller for each request.

mod comparison;
mod history;
mod metrics;
mod statistics;
mod streak;
mod summary;

pub use comparison::{compare, days_between, ComparisonResult, MetricChange, MetricTrend};
pub use history::{
    history, weekly_report, window, window_start, HistoryPoint, ProgressHistory, TimeRange,
    WeeklyReport, MAX_HISTORY_WEEKS, WEEKLY_REPORT_UNAVAILABLE,
};
pub use metrics::extract;
pub use statistics::{
    statistics, GlowScoreStats, GlowTrend, IssueCount, ScanStatistics, SkinTypeStats,
};
pub use streak::{streak, STREAK_WINDOW_DAYS};
pub use summary::{summarize, ExternalInsights, OverallTrend, ProgressSummary};
