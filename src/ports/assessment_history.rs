//! Assessment History Port - Append-only storage of completed reports.
//!
//! Records are keyed by session and returned oldest first. The scoring
//! engine never touches this port; the application layer appends after a
//! successful assessment.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::assessment::FullReport;
use crate::domain::foundation::{DomainError, ErrorCode, ReportId, SessionId, Timestamp};
use crate::domain::questionnaire::CatalogVariant;

/// One stored assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub report_id: ReportId,
    pub session_id: SessionId,
    pub variant: CatalogVariant,
    pub report: FullReport,
    pub assessed_at: Timestamp,
}

impl AssessmentRecord {
    /// Wraps a fresh report with a new id and the current time.
    pub fn new(session_id: SessionId, variant: CatalogVariant, report: FullReport) -> Self {
        Self {
            report_id: ReportId::new(),
            session_id,
            variant,
            report,
            assessed_at: Timestamp::now(),
        }
    }
}

/// Errors that can occur during history operations
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize record: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<HistoryError> for DomainError {
    fn from(err: HistoryError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for appending and reading assessment history
#[async_trait]
pub trait AssessmentHistory: Send + Sync {
    /// Append a record to its session's history
    ///
    /// # Errors
    /// Returns `HistoryError` if the write fails
    async fn append(&self, record: &AssessmentRecord) -> Result<(), HistoryError>;

    /// All records for a session, oldest first. Empty if the session is unknown.
    async fn list_for_session(
        &self,
        session_id: SessionId,
    ) -> Result<Vec<AssessmentRecord>, HistoryError>;

    /// Most recent record for a session, if any
    async fn latest_for_session(
        &self,
        session_id: SessionId,
    ) -> Result<Option<AssessmentRecord>, HistoryError> {
        Ok(self.list_for_session(session_id).await?.pop())
    }
}
