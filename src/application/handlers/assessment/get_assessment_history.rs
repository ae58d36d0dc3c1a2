//! GetAssessmentHistoryHandler - Query handler for a session's stored reports.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::ports::{AssessmentHistory, AssessmentRecord, HistoryError};

/// Query for a session's history.
#[derive(Debug, Clone, Copy)]
pub struct GetAssessmentHistoryQuery {
    pub session_id: SessionId,
}

/// Handler for reading assessment history.
pub struct GetAssessmentHistoryHandler {
    history: Arc<dyn AssessmentHistory>,
}

impl GetAssessmentHistoryHandler {
    pub fn new(history: Arc<dyn AssessmentHistory>) -> Self {
        Self { history }
    }

    /// All records, oldest first.
    pub async fn handle(
        &self,
        query: GetAssessmentHistoryQuery,
    ) -> Result<Vec<AssessmentRecord>, HistoryError> {
        self.history.list_for_session(query.session_id).await
    }

    /// The most recent record, if the session has any.
    pub async fn latest(
        &self,
        query: GetAssessmentHistoryQuery,
    ) -> Result<Option<AssessmentRecord>, HistoryError> {
        self.history.latest_for_session(query.session_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryAssessmentHistory;
    use crate::domain::assessment::{AnswerSheet, AssessmentEngine};
    use crate::domain::questionnaire::{standard_catalog, CatalogVariant};

    async fn seeded(session_id: SessionId, count: usize) -> Arc<InMemoryAssessmentHistory> {
        let history = Arc::new(InMemoryAssessmentHistory::new());
        let catalog = standard_catalog(CatalogVariant::Short).unwrap();
        for i in 0..count {
            let value = (i % 5) as i32 + 1;
            let answers: AnswerSheet = catalog.questions().iter().map(|q| (q.id, value)).collect();
            let report = AssessmentEngine::default().assess(&answers, catalog).unwrap();
            history
                .append(&AssessmentRecord::new(session_id, CatalogVariant::Short, report))
                .await
                .unwrap();
        }
        history
    }

    #[tokio::test]
    async fn lists_records_oldest_first() {
        let session_id = SessionId::new();
        let handler = GetAssessmentHistoryHandler::new(seeded(session_id, 3).await);

        let records = handler
            .handle(GetAssessmentHistoryQuery { session_id })
            .await
            .unwrap();
        assert_eq!(records.len(), 3);
        assert!(!records[1].assessed_at.is_before(&records[0].assessed_at));
    }

    #[tokio::test]
    async fn latest_is_last_appended() {
        let session_id = SessionId::new();
        let handler = GetAssessmentHistoryHandler::new(seeded(session_id, 2).await);
        let query = GetAssessmentHistoryQuery { session_id };

        let all = handler.handle(query).await.unwrap();
        let latest = handler.latest(query).await.unwrap().unwrap();
        assert_eq!(latest.report_id, all[1].report_id);
    }

    #[tokio::test]
    async fn unknown_session_has_no_latest() {
        let handler = GetAssessmentHistoryHandler::new(seeded(SessionId::new(), 1).await);
        let query = GetAssessmentHistoryQuery {
            session_id: SessionId::new(),
        };
        assert!(handler.handle(query).await.unwrap().is_empty());
        assert!(handler.latest(query).await.unwrap().is_none());
    }
}
