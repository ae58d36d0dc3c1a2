//! Storage Adapters
//!
//! Implementations of the AssessmentHistory port.
//!
//! ## Available Adapters
//!
//! - **FileAssessmentHistory** - One JSON-lines file per session on disk
//! - **InMemoryAssessmentHistory** - In-memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileAssessmentHistory, InMemoryAssessmentHistory};
//!
//! // Production: file-based storage
//! let history = FileAssessmentHistory::new("./data/history");
//!
//! // Testing: in-memory storage
//! let history = InMemoryAssessmentHistory::new();
//! ```

mod file_history;
mod in_memory_history;

pub use file_history::FileAssessmentHistory;
pub use in_memory_history::InMemoryAssessmentHistory;
