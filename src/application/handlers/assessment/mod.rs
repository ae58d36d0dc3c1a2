//! Assessment command and query handlers.

mod assess_constitution;
mod get_assessment_history;

pub use assess_constitution::{
    AssessConstitutionCommand, AssessConstitutionError, AssessConstitutionHandler,
    AssessConstitutionResult,
};
pub use get_assessment_history::{GetAssessmentHistoryHandler, GetAssessmentHistoryQuery};
