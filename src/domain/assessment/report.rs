//! Report Builder - assembles the full assessment report.

use serde::{Deserialize, Serialize};

use super::aggregator::{CategoryMap, CategoryRawScore};
use super::classifier::Judgment;
use super::selector::PrimaryResult;
use super::tendency::TendencyEntry;
use crate::domain::foundation::{ConstitutionType, NormalizedScore};

/// Upper bound of every radar axis.
pub const RADAR_FULL_MARK: u8 = 100;

/// Raw sums, converted scores and answered counts per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    pub raw: CategoryMap<u32>,
    pub transformed: CategoryMap<NormalizedScore>,
    pub counts: CategoryMap<u32>,
}

/// One radar chart axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarPoint {
    pub key: ConstitutionType,
    pub name: String,
    pub score: NormalizedScore,
    pub full_mark: u8,
}

/// The complete outcome of one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullReport {
    pub scores: ScoreSheet,
    pub judgments: CategoryMap<Judgment>,
    pub primary: PrimaryResult,
    pub tendencies: Vec<TendencyEntry>,
    /// All nine categories in canonical order, never score-sorted.
    pub radar_data: Vec<RadarPoint>,
}

impl FullReport {
    /// Converted score for `category`.
    pub fn score(&self, category: ConstitutionType) -> NormalizedScore {
        self.scores
            .transformed
            .get(&category)
            .copied()
            .unwrap_or_default()
    }

    /// Judgment for `category`.
    pub fn judgment(&self, category: ConstitutionType) -> Judgment {
        self.judgments.get(&category).copied().unwrap_or(Judgment::No)
    }
}

pub struct ReportBuilder;

impl ReportBuilder {
    pub fn build(
        raw: &CategoryMap<CategoryRawScore>,
        scores: CategoryMap<NormalizedScore>,
        judgments: CategoryMap<Judgment>,
        primary: PrimaryResult,
        tendencies: Vec<TendencyEntry>,
    ) -> FullReport {
        let radar_data = ConstitutionType::all()
            .iter()
            .map(|category| RadarPoint {
                key: *category,
                name: category.display_name().to_string(),
                score: scores.get(category).copied().unwrap_or_default(),
                full_mark: RADAR_FULL_MARK,
            })
            .collect();

        FullReport {
            scores: ScoreSheet {
                raw: raw.iter().map(|(c, r)| (*c, r.sum)).collect(),
                transformed: scores,
                counts: raw.iter().map(|(c, r)| (*c, r.count)).collect(),
            },
            judgments,
            primary,
            tendencies,
            radar_data,
        }
    }
}
