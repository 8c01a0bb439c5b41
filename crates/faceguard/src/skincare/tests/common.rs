use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::skincare::domain::{
    Cadence, DetailedAnalysis, Issue, IssueCategory, Metric, MetricSet, Product, ProductCategory,
    ProgressRecord, Routine, RoutineStep, ScanId, Severity, SkinAnalysis, SkinType, UserId,
};
use crate::skincare::intake::RawSkinAnalysis;
use crate::skincare::repository::{NewScan, RepositoryError, ScanRecord, ScanRepository};
use crate::skincare::service::{ScanAnalysisService, ScanSubmission};
use crate::skincare::AnalyticsConfig;

pub(crate) fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

pub(crate) fn issue(category: IssueCategory, severity: Severity, details: &str) -> Issue {
    Issue {
        category,
        severity,
        details: details.to_string(),
        affected_areas: Vec::new(),
        confidence: 85,
    }
}

pub(crate) fn analysis(skin_type: SkinType, issues: Vec<Issue>) -> SkinAnalysis {
    SkinAnalysis {
        skin_type,
        issues,
        strengths: Vec::new(),
        concerns: Vec::new(),
        glow_score: 70,
        detailed_analysis: DetailedAnalysis::default(),
        confidence: 90,
    }
}

impl SkinAnalysis {
    pub(crate) fn with_glow(mut self, glow_score: u8) -> Self {
        self.glow_score = glow_score;
        self
    }
}

/// Step with a placeholder order; [`routine_with`] renumbers.
pub(crate) fn step(
    cadence: Cadence,
    category: ProductCategory,
    name: &str,
    ingredients: &[&str],
) -> RoutineStep {
    RoutineStep {
        order: 0,
        category,
        product: Product {
            name: name.to_string(),
            active_ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            strength: None,
            suitable_for: Vec::new(),
            benefits: None,
            precautions: Vec::new(),
        },
        cadence,
        instructions: "Apply as directed.".to_string(),
        frequency: None,
        priority: None,
    }
}

pub(crate) fn sunscreen_step() -> RoutineStep {
    step(
        Cadence::Morning,
        ProductCategory::Sunscreen,
        "Daily Sunscreen SPF 50",
        &["Zinc Oxide", "Avobenzone"],
    )
}

pub(crate) fn routine_with(
    morning: Vec<RoutineStep>,
    night: Vec<RoutineStep>,
    weekly: Vec<RoutineStep>,
) -> Routine {
    fn numbered(mut steps: Vec<RoutineStep>) -> Vec<RoutineStep> {
        for (index, step) in steps.iter_mut().enumerate() {
            step.order = (index + 1) as u8;
        }
        steps
    }

    Routine {
        morning: numbered(morning),
        night: numbered(night),
        weekly: numbered(weekly),
    }
}

pub(crate) fn record(
    scan_id: &str,
    timestamp: &str,
    glow_score: u8,
    metrics: &[(Metric, u8)],
) -> ProgressRecord {
    ProgressRecord {
        scan_id: ScanId(scan_id.to_string()),
        timestamp: at(timestamp),
        glow_score,
        metrics: metrics.iter().copied().collect::<MetricSet>(),
        skin_type: SkinType::Normal,
        issues_summary: Vec::new(),
    }
}

pub(crate) fn scan(id: &str, created_at: &str, analysis: SkinAnalysis) -> ScanRecord {
    ScanRecord {
        id: ScanId(id.to_string()),
        user_id: user(),
        created_at: at(created_at),
        analysis,
    }
}

pub(crate) fn user() -> UserId {
    UserId("user-1".to_string())
}

pub(super) fn raw_analysis(skin_type: &str, glow_score: u8, issues: Value) -> RawSkinAnalysis {
    RawSkinAnalysis::from_value(json!({
        "skinType": skin_type,
        "issues": issues,
        "strengths": ["Even tone"],
        "concerns": [],
        "glowScore": glow_score,
        "detailedAnalysis": { "texture": "Mostly smooth" },
        "confidence": 88
    }))
    .expect("raw analysis is an object")
}

pub(super) fn submission(user: &UserId, analysis: RawSkinAnalysis) -> ScanSubmission {
    ScanSubmission {
        user_id: user.clone(),
        analysis,
        insights: None,
    }
}

pub(super) fn service() -> (
    ScanAnalysisService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ScanAnalysisService::new(repository.clone(), AnalyticsConfig::default());
    (service, repository)
}

/// Storage fake keyed by scan id, with a switch to simulate an outage.
#[derive(Default)]
pub(super) struct MemoryRepository {
    scans: Mutex<HashMap<ScanId, ScanRecord>>,
    progress: Mutex<HashMap<UserId, Vec<ProgressRecord>>>,
    sequence: AtomicU64,
    offline: AtomicBool,
    reject_progress: AtomicBool,
}

impl MemoryRepository {
    pub(super) fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    /// Progress writes fail while scan reads and writes keep working.
    pub(super) fn reject_progress_writes(&self) {
        self.reject_progress.store(true, Ordering::SeqCst);
    }

    pub(super) fn scan_count(&self) -> usize {
        self.scans.lock().expect("scan mutex poisoned").len()
    }

    fn check_online(&self) -> Result<(), RepositoryError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(RepositoryError::Unavailable("storage offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl ScanRepository for MemoryRepository {
    fn insert_scan(&self, scan: NewScan) -> Result<ScanRecord, RepositoryError> {
        self.check_online()?;
        let id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let record = scan.into_record(ScanId(format!("scan-{id:04}")));
        self.scans
            .lock()
            .expect("scan mutex poisoned")
            .insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn user_scans(&self, user: &UserId, limit: usize) -> Result<Vec<ScanRecord>, RepositoryError> {
        self.check_online()?;
        let guard = self.scans.lock().expect("scan mutex poisoned");
        let mut scans: Vec<ScanRecord> = guard
            .values()
            .filter(|scan| &scan.user_id == user)
            .cloned()
            .collect();
        scans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        scans.truncate(limit);
        Ok(scans)
    }

    fn fetch_scan(&self, id: &ScanId) -> Result<Option<ScanRecord>, RepositoryError> {
        self.check_online()?;
        Ok(self.scans.lock().expect("scan mutex poisoned").get(id).cloned())
    }

    fn delete_scan(&self, id: &ScanId) -> Result<(), RepositoryError> {
        self.check_online()?;
        self.scans
            .lock()
            .expect("scan mutex poisoned")
            .remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    fn save_progress(&self, user: &UserId, record: ProgressRecord) -> Result<(), RepositoryError> {
        self.check_online()?;
        if self.reject_progress.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable("progress store offline".to_string()));
        }
        self.progress
            .lock()
            .expect("progress mutex poisoned")
            .entry(user.clone())
            .or_default()
            .push(record);
        Ok(())
    }

    fn user_progress(
        &self,
        user: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<ProgressRecord>, RepositoryError> {
        self.check_online()?;
        let guard = self.progress.lock().expect("progress mutex poisoned");
        let mut records: Vec<ProgressRecord> = guard
            .get(user)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| record.timestamp >= since)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        records.sort_by_key(|record| record.timestamp);
        Ok(records)
    }
}
