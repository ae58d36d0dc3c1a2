//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the constitution assessment domain.

mod constitution_type;
mod errors;
mod ids;
mod likert;
mod normalized_score;
mod timestamp;

pub use constitution_type::ConstitutionType;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ReportId, SessionId};
pub use likert::{LikertAnswer, LIKERT_MAX, LIKERT_MIN};
pub use normalized_score::NormalizedScore;
pub use timestamp::Timestamp;
