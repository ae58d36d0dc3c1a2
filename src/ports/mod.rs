//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `AssessmentHistory` - Append-only, session-keyed report history

mod assessment_history;

pub use assessment_history::{AssessmentHistory, AssessmentRecord, HistoryError};
