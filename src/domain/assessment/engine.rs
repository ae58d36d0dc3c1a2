//! Assessment Engine - runs the full scoring pipeline for one answer sheet.

use std::sync::Arc;

use super::aggregator::ScoreAggregator;
use super::answers::{AnswerPolicy, AnswerSheet};
use super::classifier::CategoryClassifier;
use super::errors::AssessmentError;
use super::normalizer::ScoreNormalizer;
use super::observer::{NoopObserver, ScoringObserver};
use super::report::{FullReport, ReportBuilder};
use super::selector::PrimarySelector;
use super::tendency::TendencyExtractor;
use crate::domain::questionnaire::{QuestionCatalog, QuestionRecord};

/// Orchestrates aggregation, normalization, classification, primary
/// selection, tendency extraction and report assembly.
///
/// The engine holds no per-assessment state. One instance can score any
/// number of sheets concurrently.
#[derive(Clone)]
pub struct AssessmentEngine {
    policy: AnswerPolicy,
    observer: Arc<dyn ScoringObserver>,
}

impl AssessmentEngine {
    pub fn new(policy: AnswerPolicy) -> Self {
        Self {
            policy,
            observer: Arc::new(NoopObserver),
        }
    }

    /// Attaches a diagnostics observer.
    pub fn with_observer(mut self, observer: Arc<dyn ScoringObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn policy(&self) -> AnswerPolicy {
        self.policy
    }

    /// Scores `answers` against `catalog`.
    ///
    /// # Errors
    /// `InvalidAnswer` under the reject policy when any answered item is
    /// outside 1-5. No partial report is returned.
    pub fn assess(
        &self,
        answers: &AnswerSheet,
        catalog: &QuestionCatalog,
    ) -> Result<FullReport, AssessmentError> {
        let observer = self.observer.as_ref();

        let raw = ScoreAggregator::aggregate(answers, catalog.questions(), self.policy, observer)?;

        let scores = ScoreNormalizer::normalize_all(&raw);
        for (category, score) in &scores {
            observer.category_normalized(*category, &raw[category], *score);
        }

        let judgments = CategoryClassifier::classify_all(&scores);
        for (category, judgment) in &judgments {
            observer.category_judged(*category, scores[category], *judgment);
        }

        let primary = PrimarySelector::select(&scores, &judgments);
        observer.primary_selected(&primary);

        let tendencies = TendencyExtractor::extract(&scores, &judgments, &primary);

        Ok(ReportBuilder::build(&raw, scores, judgments, primary, tendencies))
    }

    /// Validates unchecked catalog records, then scores `answers` against them.
    ///
    /// # Errors
    /// `Configuration` when a record names an unknown category (or is
    /// otherwise malformed), before any answer is looked at.
    pub fn assess_records(
        &self,
        answers: &AnswerSheet,
        catalog_name: &str,
        records: Vec<QuestionRecord>,
    ) -> Result<FullReport, AssessmentError> {
        let catalog = QuestionCatalog::from_records(catalog_name, records)?;
        self.assess(answers, &catalog)
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new(AnswerPolicy::default())
    }
}

impl std::fmt::Debug for AssessmentEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssessmentEngine")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
