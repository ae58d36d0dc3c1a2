//! Assessment Module - The constitution scoring pipeline.
//!
//! Answers flow one way through pure, stateless stages:
//!
//! - `ScoreAggregator` - answers + questions to per-category raw sum and count
//! - `ScoreNormalizer` - raw sum + count to a 0-100 score
//! - `CategoryClassifier` - scores to per-category judgments
//! - `PrimarySelector` - the single dominant category
//! - `TendencyExtractor` - secondary categories, highest score first
//! - `ReportBuilder` - the full report with a canonical-order radar series
//!
//! `AssessmentEngine` runs the stages in order. Nothing here performs I/O;
//! optional diagnostics go through a `ScoringObserver`.

mod aggregator;
mod answers;
mod classifier;
mod engine;
mod errors;
mod normalizer;
mod observer;
mod report;
mod selector;
mod tendency;

pub use aggregator::{CategoryMap, CategoryRawScore, ScoreAggregator};
pub use answers::{AnswerPolicy, AnswerSheet};
pub use classifier::{
    CategoryClassifier, Judgment, BALANCED_BASIC_YES_CEILING, BALANCED_THRESHOLD,
    BALANCED_YES_CEILING, BIASED_TENDENCY_THRESHOLD, BIASED_YES_THRESHOLD,
};
pub use engine::AssessmentEngine;
pub use errors::AssessmentError;
pub use normalizer::ScoreNormalizer;
pub use observer::{NoopObserver, ScoringObserver, TracingObserver};
pub use report::{FullReport, RadarPoint, ReportBuilder, ScoreSheet, RADAR_FULL_MARK};
pub use selector::{PrimaryResult, PrimarySelector};
pub use tendency::{TendencyEntry, TendencyExtractor};
