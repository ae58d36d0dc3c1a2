//! Assessment HTTP adapter - REST API for questionnaires, scoring and history.
//!
//! Provides endpoints for:
//! - Fetching a standard questionnaire
//! - Scoring answers and storing the report
//! - Reading a session's history
//! - Looking up category profiles

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{AssessmentApiError, AssessmentAppState};
pub use routes::assessment_router;
