//! Score Aggregator - per-category raw sums over answered items.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::answers::{AnswerPolicy, AnswerSheet};
use super::errors::AssessmentError;
use super::observer::ScoringObserver;
use crate::domain::foundation::{ConstitutionType, LikertAnswer};
use crate::domain::questionnaire::Question;

/// Per-category values, iterated in canonical category order.
pub type CategoryMap<T> = BTreeMap<ConstitutionType, T>;

/// Raw sum and answered-item count for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRawScore {
    pub sum: u32,
    pub count: u32,
}

impl CategoryRawScore {
    pub fn new(sum: u32, count: u32) -> Self {
        Self { sum, count }
    }

    fn add(&mut self, contribution: LikertAnswer) {
        self.sum += u32::from(contribution.value());
        self.count += 1;
    }
}

/// Aggregates answers into raw category scores.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Sums reverse-adjusted answers per category.
    ///
    /// # Algorithm
    /// For each question in catalog order with a present answer:
    /// contribution = reverse ? 6 - answer : answer; sum += contribution; count += 1
    ///
    /// # Edge Cases
    /// - Unanswered questions: skipped, not defaulted
    /// - Answers for ids not in `questions`: ignored
    /// - Categories with no answered items: present with sum 0, count 0
    /// - Answer outside 1..=5: `InvalidAnswer` under `Reject`, clamped under `Clamp`
    pub fn aggregate(
        answers: &AnswerSheet,
        questions: &[Question],
        policy: AnswerPolicy,
        observer: &dyn ScoringObserver,
    ) -> Result<CategoryMap<CategoryRawScore>, AssessmentError> {
        let mut raw: CategoryMap<CategoryRawScore> = ConstitutionType::all()
            .iter()
            .map(|c| (*c, CategoryRawScore::default()))
            .collect();

        for question in questions {
            let Some(value) = answers.get(question.id) else {
                continue;
            };

            let answer = match (LikertAnswer::try_from_i32(value), policy) {
                (Ok(answer), _) => answer,
                (Err(_), AnswerPolicy::Reject) => {
                    return Err(AssessmentError::invalid_answer(question.id, value));
                }
                (Err(_), AnswerPolicy::Clamp) => {
                    let clamped = LikertAnswer::clamped(value);
                    observer.answer_clamped(question, value, clamped);
                    clamped
                }
            };

            let contribution = question.contribution(answer);
            raw.entry(question.category).or_default().add(contribution);
            observer.item_scored(question, answer, contribution);
        }

        Ok(raw)
    }
}
