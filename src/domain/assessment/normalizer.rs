//! Score Normalizer - linear conversion of raw sums onto the 0-100 scale.

use super::aggregator::{CategoryMap, CategoryRawScore};
use crate::domain::foundation::NormalizedScore;

/// Converts raw category scores to normalized scores.
pub struct ScoreNormalizer;

impl ScoreNormalizer {
    /// Converts one raw score.
    ///
    /// # Algorithm
    /// normalized = round(((sum - count) / (count * 4)) * 100), rounding half
    /// away from zero. Evaluated in integer arithmetic so the 30/40/60 cut
    /// points are never disturbed by floating-point error.
    ///
    /// # Edge Cases
    /// - count == 0: 0
    /// - sum == count (all answers 1): 0
    /// - sum == 5 * count (all answers 5): 100
    pub fn normalize(raw: &CategoryRawScore) -> NormalizedScore {
        if raw.count == 0 {
            return NormalizedScore::ZERO;
        }

        let numerator = 100 * (i64::from(raw.sum) - i64::from(raw.count));
        let denominator = 4 * i64::from(raw.count);
        let value = round_half_away_from_zero(numerator, denominator);

        // Aggregated sums always lie in [count, 5 * count]
        NormalizedScore::new(value.clamp(0, 100) as u8)
    }

    /// Converts every category.
    pub fn normalize_all(raw: &CategoryMap<CategoryRawScore>) -> CategoryMap<NormalizedScore> {
        raw.iter()
            .map(|(category, score)| (*category, Self::normalize(score)))
            .collect()
    }
}

/// Integer division rounding exact halves away from zero. `denominator` must be positive.
fn round_half_away_from_zero(numerator: i64, denominator: i64) -> i64 {
    let magnitude = (2 * numerator.abs() + denominator) / (2 * denominator);
    if numerator < 0 {
        -magnitude
    } else {
        magnitude
    }
}
