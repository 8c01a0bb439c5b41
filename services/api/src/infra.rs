use chrono::{DateTime, Utc};
use faceguard::skincare::{
    NewScan, ProgressRecord, RepositoryError, ScanId, ScanRecord, ScanRepository, UserId,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local storage. Contents are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryScanRepository {
    scans: Arc<Mutex<HashMap<ScanId, ScanRecord>>>,
    progress: Arc<Mutex<HashMap<UserId, Vec<ProgressRecord>>>>,
    sequence: Arc<AtomicU64>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("in-memory store poisoned".to_string()))
}

impl ScanRepository for InMemoryScanRepository {
    fn insert_scan(&self, scan: NewScan) -> Result<ScanRecord, RepositoryError> {
        let mut guard = lock(&self.scans)?;
        let id = ScanId(format!(
            "scan-{:06}",
            self.sequence.fetch_add(1, Ordering::SeqCst) + 1
        ));
        if guard.contains_key(&id) {
            return Err(RepositoryError::Conflict);
        }
        let record = scan.into_record(id);
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn user_scans(&self, user: &UserId, limit: usize) -> Result<Vec<ScanRecord>, RepositoryError> {
        let guard = lock(&self.scans)?;
        let mut scans: Vec<ScanRecord> = guard
            .values()
            .filter(|scan| &scan.user_id == user)
            .cloned()
            .collect();
        scans.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        scans.truncate(limit);
        Ok(scans)
    }

    fn fetch_scan(&self, id: &ScanId) -> Result<Option<ScanRecord>, RepositoryError> {
        let guard = lock(&self.scans)?;
        Ok(guard.get(id).cloned())
    }

    fn delete_scan(&self, id: &ScanId) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.scans)?;
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }

    fn save_progress(&self, user: &UserId, record: ProgressRecord) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.progress)?;
        guard.entry(user.clone()).or_default().push(record);
        Ok(())
    }

    fn user_progress(
        &self,
        user: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<ProgressRecord>, RepositoryError> {
        let guard = lock(&self.progress)?;
        let mut records: Vec<ProgressRecord> = guard
            .get(user)
            .into_iter()
            .flatten()
            .filter(|record| record.timestamp >= since)
            .cloned()
            .collect();
        records.sort_by_key(|record| record.timestamp);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use faceguard::skincare::{DetailedAnalysis, SkinAnalysis, SkinType};

    fn analysis() -> SkinAnalysis {
        SkinAnalysis {
            skin_type: SkinType::Normal,
            issues: Vec::new(),
            strengths: Vec::new(),
            concerns: Vec::new(),
            glow_score: 70,
            detailed_analysis: DetailedAnalysis::default(),
            confidence: 90,
        }
    }

    fn new_scan(user: &str, created_at: DateTime<Utc>) -> NewScan {
        NewScan {
            user_id: UserId(user.to_string()),
            created_at,
            analysis: analysis(),
        }
    }

    #[test]
    fn scans_are_listed_newest_first_per_user() {
        let repository = InMemoryScanRepository::default();
        let start = Utc
            .with_ymd_and_hms(2025, 5, 1, 12, 0, 0)
            .single()
            .expect("valid time");

        let first = repository
            .insert_scan(new_scan("ana", start))
            .expect("insert");
        let second = repository
            .insert_scan(new_scan("ana", start + Duration::days(2)))
            .expect("insert");
        repository
            .insert_scan(new_scan("other", start + Duration::days(1)))
            .expect("insert");

        assert_ne!(first.id, second.id);
        let scans = repository
            .user_scans(&UserId("ana".to_string()), 10)
            .expect("list");
        let ids: Vec<&ScanId> = scans.iter().map(|scan| &scan.id).collect();
        assert_eq!(ids, vec![&second.id, &first.id]);

        let limited = repository
            .user_scans(&UserId("ana".to_string()), 1)
            .expect("list");
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].id, second.id);
    }

    #[test]
    fn deleted_scans_disappear_from_listings() {
        let repository = InMemoryScanRepository::default();
        let start = Utc
            .with_ymd_and_hms(2025, 5, 1, 12, 0, 0)
            .single()
            .expect("valid time");
        let stored = repository
            .insert_scan(new_scan("ana", start))
            .expect("insert");

        repository.delete_scan(&stored.id).expect("delete");

        assert_eq!(repository.fetch_scan(&stored.id).expect("fetch"), None);
        assert!(matches!(
            repository.delete_scan(&stored.id),
            Err(RepositoryError::NotFound)
        ));
    }

    #[test]
    fn progress_is_filtered_by_window_and_sorted_oldest_first() {
        let repository = InMemoryScanRepository::default();
        let user = UserId("ana".to_string());
        let start = Utc
            .with_ymd_and_hms(2025, 5, 1, 12, 0, 0)
            .single()
            .expect("valid time");

        for (id, offset) in [("late", 10), ("early", 0), ("middle", 5)] {
            let record = ProgressRecord::from_analysis(
                ScanId(id.to_string()),
                start + Duration::days(offset),
                &analysis(),
            );
            repository.save_progress(&user, record).expect("save");
        }

        let records = repository
            .user_progress(&user, start + Duration::days(1))
            .expect("list");
        let ids: Vec<&str> = records.iter().map(|record| record.scan_id.0.as_str()).collect();
        assert_eq!(ids, vec!["middle", "late"]);
    }
}
