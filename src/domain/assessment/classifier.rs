//! Category Classifier - threshold judgments per category.
//!
//! The balanced category is judged against every other category's score;
//! each biased category is judged on its own score alone.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::aggregator::CategoryMap;
use crate::domain::foundation::{ConstitutionType, NormalizedScore};

/// Balanced score needed for `yes` or `basicYes`.
pub const BALANCED_THRESHOLD: u8 = 60;

/// Every other category must stay below this for a balanced `yes`.
pub const BALANCED_YES_CEILING: u8 = 30;

/// Every other category must stay below this for a balanced `basicYes`.
pub const BALANCED_BASIC_YES_CEILING: u8 = 40;

/// Biased score needed for `yes`.
pub const BIASED_YES_THRESHOLD: u8 = 40;

/// Biased score needed for `tendency`.
pub const BIASED_TENDENCY_THRESHOLD: u8 = 30;

/// Judgment status for one category.
///
/// Serializes as `{"status": "basicYes", "label": "基本是"}`. Only `status`
/// is read back; `label` is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Judgment {
    Yes,
    /// Balanced category only.
    BasicYes,
    /// Biased categories only.
    Tendency,
    No,
}

impl Judgment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Judgment::Yes => "yes",
            Judgment::BasicYes => "basicYes",
            Judgment::Tendency => "tendency",
            Judgment::No => "no",
        }
    }

    /// Returns the standard display label.
    pub fn label(&self) -> &'static str {
        match self {
            Judgment::Yes => "是",
            Judgment::BasicYes => "基本是",
            Judgment::Tendency => "倾向是",
            Judgment::No => "否",
        }
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Judgment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Judgment::Yes),
            "basicYes" => Ok(Judgment::BasicYes),
            "tendency" => Ok(Judgment::Tendency),
            "no" => Ok(Judgment::No),
            other => Err(format!("unknown judgment status '{}'", other)),
        }
    }
}

impl Serialize for Judgment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Judgment", 2)?;
        state.serialize_field("status", self.as_str())?;
        state.serialize_field("label", self.label())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Judgment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Repr {
            status: String,
        }

        let repr = Repr::deserialize(deserializer)?;
        repr.status.parse().map_err(de::Error::custom)
    }
}

/// Threshold classification functions.
pub struct CategoryClassifier;

impl CategoryClassifier {
    /// Judges the balanced category. First matching rule wins:
    /// 1. score >= 60 and max_other < 30: Yes
    /// 2. score >= 60 and max_other < 40: BasicYes
    /// 3. otherwise: No
    pub fn classify_balanced(score: NormalizedScore, max_other: NormalizedScore) -> Judgment {
        if score.value() < BALANCED_THRESHOLD {
            return Judgment::No;
        }
        match max_other.value() {
            v if v < BALANCED_YES_CEILING => Judgment::Yes,
            v if v < BALANCED_BASIC_YES_CEILING => Judgment::BasicYes,
            _ => Judgment::No,
        }
    }

    /// Judges one biased category: >= 40 Yes, [30, 40) Tendency, else No.
    pub fn classify_biased(score: NormalizedScore) -> Judgment {
        match score.value() {
            v if v >= BIASED_YES_THRESHOLD => Judgment::Yes,
            v if v >= BIASED_TENDENCY_THRESHOLD => Judgment::Tendency,
            _ => Judgment::No,
        }
    }

    /// Judges all nine categories. Missing entries count as score 0.
    pub fn classify_all(scores: &CategoryMap<NormalizedScore>) -> CategoryMap<Judgment> {
        let score_of = |c: &ConstitutionType| scores.get(c).copied().unwrap_or_default();

        let max_biased = ConstitutionType::biased()
            .iter()
            .map(score_of)
            .max()
            .unwrap_or_default();

        ConstitutionType::all()
            .iter()
            .map(|category| {
                let judgment = if category.is_balanced() {
                    Self::classify_balanced(score_of(category), max_biased)
                } else {
                    Self::classify_biased(score_of(category))
                };
                (*category, judgment)
            })
            .collect()
    }
}
