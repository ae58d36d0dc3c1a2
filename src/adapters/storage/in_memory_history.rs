//! In-Memory Assessment History Adapter
//!
//! Keeps every session's records in memory. Used when no history directory
//! is configured, and in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionId;
use crate::ports::{AssessmentHistory, AssessmentRecord, HistoryError};

/// In-memory, session-keyed assessment history
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentHistory {
    records: Arc<RwLock<HashMap<SessionId, Vec<AssessmentRecord>>>>,
}

impl InMemoryAssessmentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records across all sessions
    pub async fn record_count(&self) -> usize {
        self.records.read().await.values().map(Vec::len).sum()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl AssessmentHistory for InMemoryAssessmentHistory {
    async fn append(&self, record: &AssessmentRecord) -> Result<(), HistoryError> {
        let mut records = self.records.write().await;
        records
            .entry(record.session_id)
            .or_default()
            .push(record.clone());
        Ok(())
    }

    async fn list_for_session(
        &self,
        session_id: SessionId,
    ) -> Result<Vec<AssessmentRecord>, HistoryError> {
        let records = self.records.read().await;
        Ok(records.get(&session_id).cloned().unwrap_or_default())
    }

    async fn latest_for_session(
        &self,
        session_id: SessionId,
    ) -> Result<Option<AssessmentRecord>, HistoryError> {
        let records = self.records.read().await;
        Ok(records
            .get(&session_id)
            .and_then(|list| list.last())
            .cloned())
    }
}
