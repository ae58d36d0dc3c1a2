//! Tendency Extractor - secondary categories beside the primary.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use super::aggregator::CategoryMap;
use super::classifier::Judgment;
use super::selector::PrimaryResult;
use crate::domain::foundation::{ConstitutionType, NormalizedScore};

/// A non-primary category that reached `yes` or `tendency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TendencyEntry {
    pub category: ConstitutionType,
    pub score: NormalizedScore,
    pub judgment: Judgment,
}

pub struct TendencyExtractor;

impl TendencyExtractor {
    /// Every non-primary category judged `yes` or `tendency`, highest score
    /// first. Equal scores keep canonical order. No cap on the count.
    pub fn extract(
        scores: &CategoryMap<NormalizedScore>,
        judgments: &CategoryMap<Judgment>,
        primary: &PrimaryResult,
    ) -> Vec<TendencyEntry> {
        let mut tendencies: Vec<TendencyEntry> = judgments
            .iter()
            .filter(|(category, _)| **category != primary.category)
            .filter(|(_, judgment)| matches!(judgment, Judgment::Yes | Judgment::Tendency))
            .map(|(category, judgment)| TendencyEntry {
                category: *category,
                score: scores.get(category).copied().unwrap_or_default(),
                judgment: *judgment,
            })
            .collect();

        // stable sort keeps canonical order among equal scores
        tendencies.sort_by_key(|t| Reverse(t.score));
        tendencies
    }
}
