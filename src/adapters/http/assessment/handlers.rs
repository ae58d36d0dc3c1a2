//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{error, warn};

use crate::application::{
    AssessConstitutionCommand, AssessConstitutionHandler, GetAssessmentHistoryHandler,
    GetAssessmentHistoryQuery,
};
use crate::domain::assessment::AssessmentEngine;
use crate::domain::foundation::{ConstitutionType, DomainError, ErrorCode, SessionId};
use crate::domain::guidance::profile_for;
use crate::domain::questionnaire::{standard_catalog, CatalogVariant};
use crate::ports::AssessmentHistory;

use super::dto::{
    AssessRequest, AssessmentResponse, ErrorResponse, HistoryResponse, QuestionnaireResponse,
};

/// Application state for assessment endpoints.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub assess_handler: Arc<AssessConstitutionHandler>,
    pub history_handler: Arc<GetAssessmentHistoryHandler>,
    /// Catalog used when a request names none
    pub default_variant: CatalogVariant,
}

impl AssessmentAppState {
    pub fn new(
        engine: AssessmentEngine,
        history: Arc<dyn AssessmentHistory>,
        default_variant: CatalogVariant,
    ) -> Self {
        Self {
            assess_handler: Arc::new(AssessConstitutionHandler::new(engine, history.clone())),
            history_handler: Arc::new(GetAssessmentHistoryHandler::new(history)),
            default_variant,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/questionnaires/:variant - Questions and answer options
pub async fn get_questionnaire(
    Path(variant): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let variant: CatalogVariant = variant.parse()?;
    let catalog = standard_catalog(variant).map_err(DomainError::from)?;
    Ok(Json(QuestionnaireResponse::new(variant, catalog)))
}

/// GET /api/sessions/:session_id/assessments - Full history, oldest first
pub async fn list_assessments(
    State(state): State<AssessmentAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let session_id = parse_session_id(&session_id)?;
    let records = state
        .history_handler
        .handle(GetAssessmentHistoryQuery { session_id })
        .await
        .map_err(DomainError::from)?;

    Ok(Json(HistoryResponse {
        session_id: session_id.to_string(),
        total: records.len(),
        records,
    }))
}

/// GET /api/sessions/:session_id/assessments/latest - Most recent record
pub async fn latest_assessment(
    State(state): State<AssessmentAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let session_id = parse_session_id(&session_id)?;
    let record = state
        .history_handler
        .latest(GetAssessmentHistoryQuery { session_id })
        .await
        .map_err(DomainError::from)?
        .ok_or_else(|| {
            DomainError::new(
                ErrorCode::NotFound,
                format!("No assessments for session {}", session_id),
            )
        })?;

    Ok(Json(AssessmentResponse::from(record)))
}

/// GET /api/constitutions/:key - Descriptive profile of one category
pub async fn get_constitution(
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let category: ConstitutionType = key.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::UnknownCategory,
            format!("Unknown constitution '{}'", key),
        )
    })?;
    Ok(Json(profile_for(category)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions/:session_id/assessments - Score and store an assessment
pub async fn create_assessment(
    State(state): State<AssessmentAppState>,
    Path(session_id): Path<String>,
    Json(request): Json<AssessRequest>,
) -> Result<impl IntoResponse, AssessmentApiError> {
    let session_id = parse_session_id(&session_id)?;
    let cmd = AssessConstitutionCommand {
        session_id,
        variant: request.variant.unwrap_or(state.default_variant),
        answers: request.answers,
    };

    let result = state
        .assess_handler
        .handle(cmd)
        .await
        .map_err(DomainError::from)?;

    Ok((StatusCode::CREATED, Json(AssessmentResponse::from(result.record))))
}

fn parse_session_id(raw: &str) -> Result<SessionId, DomainError> {
    raw.parse()
        .map_err(|_| DomainError::validation("session_id", "Invalid session ID format"))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct AssessmentApiError(DomainError);

impl AssessmentApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.code {
            ErrorCode::ValidationFailed | ErrorCode::InvalidAnswer => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound | ErrorCode::UnknownCatalog | ErrorCode::UnknownCategory => {
                StatusCode::NOT_FOUND
            }
            ErrorCode::CatalogMisconfigured | ErrorCode::StorageError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DomainError> for AssessmentApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AssessmentApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!(code = %self.0.code, message = %self.0.message, "request failed");
        } else {
            warn!(code = %self.0.code, message = %self.0.message, "request rejected");
        }
        (status, Json(ErrorResponse::from(&self.0))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let status = |code| AssessmentApiError::from(DomainError::new(code, "x")).status();
        assert_eq!(status(ErrorCode::InvalidAnswer), StatusCode::BAD_REQUEST);
        assert_eq!(status(ErrorCode::ValidationFailed), StatusCode::BAD_REQUEST);
        assert_eq!(status(ErrorCode::UnknownCatalog), StatusCode::NOT_FOUND);
        assert_eq!(status(ErrorCode::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status(ErrorCode::StorageError), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            status(ErrorCode::CatalogMisconfigured),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn session_id_must_be_uuid() {
        assert!(parse_session_id("not-a-uuid").is_err());
        assert!(parse_session_id(&SessionId::new().to_string()).is_ok());
    }
}
