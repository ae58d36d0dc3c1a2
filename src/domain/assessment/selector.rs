//! Primary Selector - picks the single dominant category.

use serde::{Deserialize, Serialize};

use super::aggregator::CategoryMap;
use super::classifier::Judgment;
use crate::domain::foundation::{ConstitutionType, NormalizedScore};

/// The chosen primary category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryResult {
    pub category: ConstitutionType,
    pub score: NormalizedScore,
    pub judgment: Judgment,
    /// False when the primary's own judgment is `no`: the highest biased
    /// score is reported, but no pattern actually crosses a threshold.
    pub dominant: bool,
}

/// Primary category selection.
pub struct PrimarySelector;

impl PrimarySelector {
    /// Selects the primary category.
    ///
    /// # Algorithm
    /// 1. Balanced judged `yes` or `basicYes`: balanced, regardless of biased scores
    /// 2. Otherwise the biased category with the strictly highest score; equal
    ///    scores resolve to the earliest in canonical order
    ///
    /// Step 2 ignores the winner's own judgment, so a biased category judged
    /// `no` can still be primary. `dominant` flags that case.
    pub fn select(
        scores: &CategoryMap<NormalizedScore>,
        judgments: &CategoryMap<Judgment>,
    ) -> PrimaryResult {
        let score_of = |c: ConstitutionType| scores.get(&c).copied().unwrap_or_default();
        let judgment_of = |c: ConstitutionType| judgments.get(&c).copied().unwrap_or(Judgment::No);

        let balanced = ConstitutionType::Balanced;
        if matches!(judgment_of(balanced), Judgment::Yes | Judgment::BasicYes) {
            return Self::result(balanced, score_of(balanced), judgment_of(balanced));
        }

        let mut primary = ConstitutionType::QiDeficiency;
        let mut best = score_of(primary);
        for category in ConstitutionType::biased().iter().skip(1) {
            let score = score_of(*category);
            if score > best {
                best = score;
                primary = *category;
            }
        }

        Self::result(primary, best, judgment_of(primary))
    }

    fn result(category: ConstitutionType, score: NormalizedScore, judgment: Judgment) -> PrimaryResult {
        PrimaryResult {
            category,
            score,
            judgment,
            dominant: judgment != Judgment::No,
        }
    }
}
