//! AssessConstitutionHandler - Command handler that scores an answer sheet
//! and appends the report to the session's history.

use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::domain::assessment::{AnswerSheet, AssessmentEngine, AssessmentError};
use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::questionnaire::{standard_catalog, CatalogError, CatalogVariant};
use crate::ports::{AssessmentHistory, AssessmentRecord, HistoryError};

/// Command to score one completed (or partially completed) questionnaire.
#[derive(Debug, Clone)]
pub struct AssessConstitutionCommand {
    pub session_id: SessionId,
    pub variant: CatalogVariant,
    pub answers: AnswerSheet,
}

/// Result of a successful assessment.
#[derive(Debug, Clone)]
pub struct AssessConstitutionResult {
    pub record: AssessmentRecord,
}

#[derive(Debug, Error)]
pub enum AssessConstitutionError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),

    #[error("Standard catalog failed to load: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to store assessment: {0}")]
    History(#[from] HistoryError),
}

impl From<AssessConstitutionError> for DomainError {
    fn from(err: AssessConstitutionError) -> Self {
        match err {
            AssessConstitutionError::Assessment(e) => e.into(),
            AssessConstitutionError::Catalog(e) => e.into(),
            AssessConstitutionError::History(e) => e.into(),
        }
    }
}

/// Handler for scoring assessments.
pub struct AssessConstitutionHandler {
    engine: AssessmentEngine,
    history: Arc<dyn AssessmentHistory>,
}

impl AssessConstitutionHandler {
    pub fn new(engine: AssessmentEngine, history: Arc<dyn AssessmentHistory>) -> Self {
        Self { engine, history }
    }

    pub async fn handle(
        &self,
        cmd: AssessConstitutionCommand,
    ) -> Result<AssessConstitutionResult, AssessConstitutionError> {
        // 1. Resolve the catalog
        let catalog = standard_catalog(cmd.variant)?;

        // 2. Score; nothing is stored when this fails
        let report = self.engine.assess(&cmd.answers, catalog)?;

        // 3. Append to history
        let record = AssessmentRecord::new(cmd.session_id, cmd.variant, report);
        self.history.append(&record).await?;

        info!(
            session_id = %record.session_id,
            report_id = %record.report_id,
            variant = %record.variant,
            answered = cmd.answers.len(),
            primary = %record.report.primary.category,
            dominant = record.report.primary.dominant,
            tendencies = record.report.tendencies.len(),
            "constitution assessed"
        );

        Ok(AssessConstitutionResult { record })
    }
}
