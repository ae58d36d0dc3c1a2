//! Assessment error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::questionnaire::{CatalogError, QuestionId};

/// Errors that abort an assessment. No partial report is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    #[error("Answer {value} for question {question_id} is outside the 1-5 scale")]
    InvalidAnswer { question_id: QuestionId, value: i32 },

    #[error("Catalog configuration error: {0}")]
    Configuration(#[from] CatalogError),
}

impl AssessmentError {
    pub fn invalid_answer(question_id: QuestionId, value: i32) -> Self {
        AssessmentError::InvalidAnswer { question_id, value }
    }
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        match &err {
            AssessmentError::InvalidAnswer { question_id, value } => {
                DomainError::new(ErrorCode::InvalidAnswer, err.to_string())
                    .with_detail("question_id", question_id.to_string())
                    .with_detail("value", value.to_string())
            }
            AssessmentError::Configuration(_) => {
                DomainError::new(ErrorCode::CatalogMisconfigured, err.to_string())
            }
        }
    }
}
