use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ProgressRecord, ScanId, SkinAnalysis, UserId};

/// Persisted scan as returned by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    pub id: ScanId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub analysis: SkinAnalysis,
}

/// Scan awaiting an identifier from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScan {
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub analysis: SkinAnalysis,
}

impl NewScan {
    pub fn into_record(self, id: ScanId) -> ScanRecord {
        ScanRecord {
            id,
            user_id: self.user_id,
            created_at: self.created_at,
            analysis: self.analysis,
        }
    }
}

/// Storage collaborator. Implementations own their consistency guarantees; the core
/// only relies on read-your-writes for the user who just stored a scan.
pub trait ScanRepository: Send + Sync {
    /// Stores a scan and assigns its identifier.
    fn insert_scan(&self, scan: NewScan) -> Result<ScanRecord, RepositoryError>;
    /// Most recent first, at most `limit` entries.
    fn user_scans(&self, user: &UserId, limit: usize) -> Result<Vec<ScanRecord>, RepositoryError>;
    fn fetch_scan(&self, id: &ScanId) -> Result<Option<ScanRecord>, RepositoryError>;
    /// Removes a scan. Used to undo `insert_scan` when the matching progress write fails.
    fn delete_scan(&self, id: &ScanId) -> Result<(), RepositoryError>;
    fn save_progress(&self, user: &UserId, record: ProgressRecord) -> Result<(), RepositoryError>;
    /// Records at or after `since`, oldest first.
    fn user_progress(
        &self,
        user: &UserId,
        since: DateTime<Utc>,
    ) -> Result<Vec<ProgressRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
