//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Assessment history (in-memory, JSON-lines files)
//! - `http` - REST API (axum)

pub mod http;
pub mod storage;

pub use storage::{FileAssessmentHistory, InMemoryAssessmentHistory};
