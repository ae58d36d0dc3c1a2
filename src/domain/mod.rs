//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (category enum, answer scale, IDs, errors)
//! - `questionnaire` - Questions, catalog validation and the two standard catalogs
//! - `assessment` - The scoring pipeline from answers to a full report
//! - `guidance` - Descriptive profiles and advice per category

pub mod assessment;
pub mod foundation;
pub mod guidance;
pub mod questionnaire;
