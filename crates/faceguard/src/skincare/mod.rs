//! Skincare analysis core: routine generation, ingredient safety audit and progress
//! analytics over a user's scan history.

pub mod advice;
pub mod domain;
pub mod intake;
pub mod progress;
pub mod repository;
pub mod routine;
pub mod safety;
pub mod service;

#[cfg(test)]
mod tests;

pub use advice::{lifestyle_advice, Disclaimers, LifestyleAdvice, PrimaryConcern, DISCLAIMERS};
pub use domain::{
    Cadence, DetailedAnalysis, Issue, IssueCategory, IssueSummary, Metric, MetricSet, Priority,
    Product, ProductCategory, ProgressRecord, Routine, RoutineStep, ScanId, Severity,
    SkinAnalysis, SkinType, UserId,
};
pub use intake::{IntakeError, RawSkinAnalysis};
pub use repository::{NewScan, RepositoryError, ScanRecord, ScanRepository};
pub use routine::{RoutineDefect, RoutineGenerator};
pub use safety::{ConflictChecker, ProductCheck, SafetyReport};
pub use service::{
    FailureKind, ProgressReport, ScanAnalysisService, ScanOutcome, ScanServiceError,
    ScanSubmission,
};

const DEFAULT_HISTORY_WEEKS: u32 = 12;
const DEFAULT_STREAK_SCAN_LIMIT: usize = 100;

/// Tunables for history-backed analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsConfig {
    /// Default progress window, in weeks.
    pub history_weeks: u32,
    /// Recent scans fetched when computing streaks and statistics.
    pub streak_scan_limit: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            history_weeks: DEFAULT_HISTORY_WEEKS,
            streak_scan_limit: DEFAULT_STREAK_SCAN_LIMIT,
        }
    }
}
