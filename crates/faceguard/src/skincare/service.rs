use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::advice::{lifestyle_advice, LifestyleAdvice};
use super::domain::{MetricSet, ProgressRecord, Routine, ScanId, SkinAnalysis, UserId};
use super::intake::{IntakeError, RawSkinAnalysis};
use super::progress::{
    self, ComparisonResult, ExternalInsights, ProgressHistory, ScanStatistics, WeeklyReport,
};
use super::repository::{NewScan, RepositoryError, ScanRecord, ScanRepository};
use super::routine::{RoutineDefect, RoutineGenerator};
use super::safety::{ConflictChecker, ProductCheck, SafetyReport};
use super::AnalyticsConfig;

/// One scan as delivered by the request layer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSubmission {
    pub user_id: UserId,
    pub analysis: RawSkinAnalysis,
    #[serde(default)]
    pub insights: Option<ExternalInsights>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOutcome {
    pub scan_id: ScanId,
    pub analysis: SkinAnalysis,
    pub routine: Routine,
    pub safety: SafetyReport,
    pub product_checks: Vec<ProductCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<ComparisonResult>,
    pub metrics: MetricSet,
    pub streak: u32,
    pub total_scans: usize,
    pub advice: LifestyleAdvice,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub history: ProgressHistory,
    pub weekly_report: WeeklyReport,
}

/// Coarse failure classes the request layer maps to user-facing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Analysis or storage collaborator failed or returned unusable data.
    UpstreamUnavailable,
    NotFound,
    /// The core produced a malformed record.
    InternalDefect,
}

#[derive(Debug, thiserror::Error)]
pub enum ScanServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("generated routine is malformed: {0}")]
    Routine(#[from] RoutineDefect),
    #[error("scan {0} not found")]
    ScanNotFound(ScanId),
}

impl ScanServiceError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Intake(_) => FailureKind::UpstreamUnavailable,
            Self::Repository(RepositoryError::NotFound) | Self::ScanNotFound(_) => {
                FailureKind::NotFound
            }
            Self::Repository(_) => FailureKind::UpstreamUnavailable,
            Self::Routine(_) => FailureKind::InternalDefect,
        }
    }
}

/// Request-scoped pipeline from a raw assessment to routine, safety audit and progress.
///
/// Holds no mutable state; all history comes from the repository on each call.
pub struct ScanAnalysisService<R> {
    repository: Arc<R>,
    generator: RoutineGenerator,
    checker: ConflictChecker,
    config: AnalyticsConfig,
}

impl<R> ScanAnalysisService<R>
where
    R: ScanRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: AnalyticsConfig) -> Self {
        Self {
            repository,
            generator: RoutineGenerator::new(),
            checker: ConflictChecker::new(),
            config,
        }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn process_scan(
        &self,
        submission: ScanSubmission,
        now: DateTime<Utc>,
    ) -> Result<ScanOutcome, ScanServiceError> {
        let ScanSubmission {
            user_id,
            analysis,
            insights,
        } = submission;

        let analysis = analysis.normalize()?;
        let routine = self.generator.generate(&analysis);
        routine.validate()?;
        let safety = self.checker.check(&routine);
        let product_checks = self.checker.screen_products(&routine, analysis.skin_type);
        debug!(
            user = %user_id,
            conflicts = safety.conflicts.len(),
            warnings = safety.warnings.len(),
            flagged_products = product_checks.len(),
            "routine audited"
        );
        let metrics = progress::extract(&analysis);

        let stored = self.repository.insert_scan(NewScan {
            user_id: user_id.clone(),
            created_at: now,
            analysis: analysis.clone(),
        })?;
        let entry = ProgressRecord::from_analysis(stored.id.clone(), now, &analysis);
        if let Err(err) = self.repository.save_progress(&user_id, entry) {
            // Drop the scan so history and scan listings stay in step.
            if let Err(rollback) = self.repository.delete_scan(&stored.id) {
                warn!(
                    user = %user_id,
                    scan_id = %stored.id,
                    error = %rollback,
                    "scan left without progress entry"
                );
            }
            return Err(err.into());
        }

        let recent = self
            .repository
            .user_scans(&user_id, self.config.streak_scan_limit)?;
        let streak = streak_of(&recent);
        let progress = recent
            .iter()
            .find(|scan| scan.id != stored.id)
            .map(|previous| compare_records(previous, &stored, insights.as_ref()));

        info!(
            user = %user_id,
            scan_id = %stored.id,
            streak,
            safe = safety.safe,
            "scan processed"
        );

        Ok(ScanOutcome {
            scan_id: stored.id,
            advice: lifestyle_advice(&analysis),
            analysis,
            routine,
            safety,
            product_checks,
            progress,
            metrics,
            streak,
            total_scans: recent.len(),
        })
    }

    /// History over `weeks` (configured default when `None`) plus the weekly report.
    pub fn progress_report(
        &self,
        user: &UserId,
        weeks: Option<u32>,
        now: DateTime<Utc>,
    ) -> Result<ProgressReport, ScanServiceError> {
        let weeks = weeks
            .unwrap_or(self.config.history_weeks)
            .clamp(1, progress::MAX_HISTORY_WEEKS);
        let since = progress::window_start(weeks, now);
        let records = self.repository.user_progress(user, since)?;

        Ok(ProgressReport {
            history: progress::history(&records, weeks, now),
            weekly_report: progress::weekly_report(&records, now, None),
        })
    }

    /// Compares two of the user's scans. Scans owned by someone else are reported as
    /// missing.
    pub fn compare_scans(
        &self,
        user: &UserId,
        previous: &ScanId,
        current: &ScanId,
        insights: Option<&ExternalInsights>,
    ) -> Result<ComparisonResult, ScanServiceError> {
        let previous = self.owned_scan(user, previous)?;
        let current = self.owned_scan(user, current)?;
        Ok(compare_records(&previous, &current, insights))
    }

    pub fn statistics(&self, user: &UserId) -> Result<Option<ScanStatistics>, ScanServiceError> {
        let scans = self
            .repository
            .user_scans(user, self.config.streak_scan_limit)?;
        Ok(progress::statistics(&scans, streak_of(&scans)))
    }

    /// Consecutive-week streak over the most recent scans.
    pub fn streak(&self, user: &UserId) -> Result<u32, ScanServiceError> {
        let scans = self
            .repository
            .user_scans(user, self.config.streak_scan_limit)?;
        Ok(streak_of(&scans))
    }

    fn owned_scan(&self, user: &UserId, id: &ScanId) -> Result<ScanRecord, ScanServiceError> {
        self.repository
            .fetch_scan(id)?
            .filter(|scan| &scan.user_id == user)
            .ok_or_else(|| ScanServiceError::ScanNotFound(id.clone()))
    }
}

fn streak_of(scans: &[ScanRecord]) -> u32 {
    let timestamps: Vec<DateTime<Utc>> = scans.iter().map(|scan| scan.created_at).collect();
    progress::streak(&timestamps)
}

fn compare_records(
    previous: &ScanRecord,
    current: &ScanRecord,
    insights: Option<&ExternalInsights>,
) -> ComparisonResult {
    let previous =
        ProgressRecord::from_analysis(previous.id.clone(), previous.created_at, &previous.analysis);
    let current =
        ProgressRecord::from_analysis(current.id.clone(), current.created_at, &current.analysis);
    progress::compare(&previous, &current, insights)
}
