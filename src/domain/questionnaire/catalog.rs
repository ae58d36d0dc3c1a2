//! Question catalog - the validated, ordered questionnaire an assessment runs against.
//!
//! Catalogs arrive from outside the domain (embedded YAML, request bodies,
//! files) with free-form category tags. [`QuestionCatalog::from_records`] is
//! the single gate that turns them into typed [`Question`]s; every tag must
//! name one of the nine [`ConstitutionType`] keys and every id must be unique.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::question::{Question, QuestionId};
use crate::domain::foundation::{ConstitutionType, DomainError, ErrorCode};

/// Catalog misconfiguration. Always fatal: no catalog is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Question {question_id} references unknown category '{key}'")]
    UnknownCategory { question_id: u32, key: String },

    #[error("Question id {question_id} appears more than once")]
    DuplicateQuestion { question_id: u32 },

    #[error("Question {question_id} has empty text")]
    EmptyText { question_id: u32 },

    #[error("Catalog '{name}' contains no questions")]
    Empty { name: String },

    #[error("Catalog could not be parsed: {0}")]
    Parse(String),
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(ErrorCode::CatalogMisconfigured, err.to_string())
    }
}

/// The two standard questionnaire shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVariant {
    /// 27 items, 3 per category.
    #[default]
    Short,
    /// 67 items, 7-8 per category.
    Full,
}

impl CatalogVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogVariant::Short => "short",
            CatalogVariant::Full => "full",
        }
    }
}

impl fmt::Display for CatalogVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(CatalogVariant::Short),
            "full" => Ok(CatalogVariant::Full),
            other => Err(DomainError::new(
                ErrorCode::UnknownCatalog,
                format!("Unknown questionnaire '{}'", other),
            )),
        }
    }
}

/// Untyped question as supplied by an external catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u32,
    pub text: String,
    #[serde(alias = "type")]
    pub category: String,
    #[serde(default)]
    pub reverse: bool,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    name: String,
    questions: Vec<QuestionRecord>,
}

/// An ordered, validated sequence of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionCatalog {
    name: String,
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Validates raw records into a catalog, preserving their order.
    ///
    /// # Errors
    /// - `UnknownCategory` if a record's tag is not one of the nine keys
    /// - `DuplicateQuestion` if two records share an id
    /// - `EmptyText` if a record has blank text
    /// - `Empty` if there are no records
    pub fn from_records(
        name: impl Into<String>,
        records: Vec<QuestionRecord>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if records.is_empty() {
            return Err(CatalogError::Empty { name });
        }

        let mut seen = HashSet::with_capacity(records.len());
        let mut questions = Vec::with_capacity(records.len());

        for record in records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateQuestion {
                    question_id: record.id,
                });
            }
            if record.text.trim().is_empty() {
                return Err(CatalogError::EmptyText {
                    question_id: record.id,
                });
            }
            let category = record.category.parse::<ConstitutionType>().map_err(|_| {
                CatalogError::UnknownCategory {
                    question_id: record.id,
                    key: record.category.clone(),
                }
            })?;

            questions.push(Question {
                id: QuestionId::new(record.id),
                text: record.text,
                category,
                reverse: record.reverse,
            });
        }

        Ok(Self { name, questions })
    }

    /// Parses and validates a YAML catalog document (`name` + `questions`).
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument =
            serde_yaml::from_str(source).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_records(doc.name, doc.questions)
    }

    /// Builds a catalog from already-typed questions. Applies the same id and
    /// text checks as [`from_records`](Self::from_records).
    pub fn from_questions(
        name: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if questions.is_empty() {
            return Err(CatalogError::Empty { name });
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for q in &questions {
            if !seen.insert(q.id) {
                return Err(CatalogError::DuplicateQuestion {
                    question_id: q.id.value(),
                });
            }
            if q.text.trim().is_empty() {
                return Err(CatalogError::EmptyText {
                    question_id: q.id.value(),
                });
            }
        }
        Ok(Self { name, questions })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Questions in catalog order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of items tagged with `category`.
    pub fn item_count(&self, category: ConstitutionType) -> usize {
        self.questions
            .iter()
            .filter(|q| q.category == category)
            .count()
    }
}
