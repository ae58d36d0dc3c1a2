//! HTTP DTOs for assessment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::AnswerSheet;
use crate::domain::foundation::{ConstitutionType, DomainError, LikertAnswer};
use crate::domain::guidance::{profile_for, ConstitutionProfile};
use crate::domain::questionnaire::{CatalogVariant, QuestionCatalog};
use crate::ports::AssessmentRecord;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to score a questionnaire.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessRequest {
    /// Falls back to the configured default when absent.
    #[serde(default)]
    pub variant: Option<CatalogVariant>,
    /// Question id to answer value. Unanswered ids are simply omitted.
    pub answers: AnswerSheet,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One question as shown to the respondent.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionItem {
    pub id: u32,
    pub text: String,
    pub category: ConstitutionType,
}

/// One selectable answer.
#[derive(Debug, Clone, Serialize)]
pub struct LikertOption {
    pub value: u8,
    pub label: &'static str,
}

/// A questionnaire ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireResponse {
    pub variant: CatalogVariant,
    pub total: usize,
    pub questions: Vec<QuestionItem>,
    pub options: Vec<LikertOption>,
}

impl QuestionnaireResponse {
    pub fn new(variant: CatalogVariant, catalog: &QuestionCatalog) -> Self {
        Self {
            variant,
            total: catalog.len(),
            questions: catalog
                .questions()
                .iter()
                .map(|q| QuestionItem {
                    id: q.id.value(),
                    text: q.text.clone(),
                    category: q.category,
                })
                .collect(),
            options: LikertAnswer::all()
                .iter()
                .map(|a| LikertOption {
                    value: a.value(),
                    label: a.label(),
                })
                .collect(),
        }
    }
}

/// A stored assessment with the profiles of its primary and tendency categories.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    #[serde(flatten)]
    pub record: AssessmentRecord,
    pub primary_profile: ConstitutionProfile,
    pub tendency_profiles: Vec<ConstitutionProfile>,
}

impl From<AssessmentRecord> for AssessmentResponse {
    fn from(record: AssessmentRecord) -> Self {
        let primary_profile = profile_for(record.report.primary.category);
        let tendency_profiles = record
            .report
            .tendencies
            .iter()
            .map(|t| profile_for(t.category))
            .collect();
        Self {
            record,
            primary_profile,
            tendency_profiles,
        }
    }
}

/// A session's history, oldest first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub session_id: String,
    pub total: usize,
    pub records: Vec<AssessmentRecord>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let details = (!err.details.is_empty()).then(|| {
            serde_json::Value::Object(
                err.details
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            )
        });
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details,
        }
    }
}
