//! Scoring observer - optional diagnostics hook into the scoring pipeline.
//!
//! The pipeline itself never logs. Callers that want per-item or
//! per-category diagnostics attach an observer to the engine; the default
//! is [`NoopObserver`].

use tracing::{debug, trace, warn};

use super::aggregator::CategoryRawScore;
use super::classifier::Judgment;
use super::selector::PrimaryResult;
use crate::domain::foundation::{ConstitutionType, LikertAnswer, NormalizedScore};
use crate::domain::questionnaire::Question;

/// Receives callbacks as an assessment progresses. All methods default to no-ops.
pub trait ScoringObserver: Send + Sync {
    /// An answered item was added to its category's raw score.
    fn item_scored(&self, _question: &Question, _answer: LikertAnswer, _contribution: LikertAnswer) {}

    /// An out-of-range answer was clamped under the clamp policy.
    fn answer_clamped(&self, _question: &Question, _raw: i32, _clamped: LikertAnswer) {}

    /// A category's raw score was converted.
    fn category_normalized(
        &self,
        _category: ConstitutionType,
        _raw: &CategoryRawScore,
        _score: NormalizedScore,
    ) {
    }

    /// A category received its judgment.
    fn category_judged(&self, _category: ConstitutionType, _score: NormalizedScore, _judgment: Judgment) {}

    /// The primary category was chosen.
    fn primary_selected(&self, _primary: &PrimaryResult) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ScoringObserver for NoopObserver {}

/// Observer that forwards callbacks to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ScoringObserver for TracingObserver {
    fn item_scored(&self, question: &Question, answer: LikertAnswer, contribution: LikertAnswer) {
        trace!(
            question_id = %question.id,
            category = %question.category,
            reverse = question.reverse,
            answer = answer.value(),
            contribution = contribution.value(),
            "item scored"
        );
    }

    fn answer_clamped(&self, question: &Question, raw: i32, clamped: LikertAnswer) {
        warn!(
            question_id = %question.id,
            raw,
            clamped = clamped.value(),
            "answer outside 1-5 clamped"
        );
    }

    fn category_normalized(
        &self,
        category: ConstitutionType,
        raw: &CategoryRawScore,
        score: NormalizedScore,
    ) {
        debug!(
            %category,
            sum = raw.sum,
            count = raw.count,
            score = score.value(),
            "category normalized"
        );
    }

    fn category_judged(&self, category: ConstitutionType, score: NormalizedScore, judgment: Judgment) {
        debug!(%category, score = score.value(), judgment = judgment.as_str(), "category judged");
    }

    fn primary_selected(&self, primary: &PrimaryResult) {
        debug!(
            category = %primary.category,
            score = primary.score.value(),
            judgment = primary.judgment.as_str(),
            dominant = primary.dominant,
            "primary selected"
        );
    }
}
