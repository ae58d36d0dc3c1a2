//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Scoring (write) and history reads are handled separately.

pub mod handlers;

pub use handlers::{
    AssessConstitutionCommand, AssessConstitutionError, AssessConstitutionHandler,
    AssessConstitutionResult, GetAssessmentHistoryHandler, GetAssessmentHistoryQuery,
};
