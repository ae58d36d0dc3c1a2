//! Constitution Assessment - questionnaire scoring for the nine-category
//! constitution standard.
//!
//! The domain layer turns Likert answers into a full report (raw and
//! normalized scores, per-category judgments, the primary category,
//! tendencies and a radar series). Ports, adapters and the HTTP surface
//! store and serve those reports per session.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
