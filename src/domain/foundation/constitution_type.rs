//! ConstitutionType enum representing the 9 standard constitution categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The 9 constitution categories, declared in canonical catalog order.
///
/// The derived `Ord` follows declaration order, so ordered collections keyed
/// by `ConstitutionType` iterate in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConstitutionType {
    #[serde(rename = "pinghe")]
    Balanced,
    #[serde(rename = "qixu")]
    QiDeficiency,
    #[serde(rename = "yangxu")]
    YangDeficiency,
    #[serde(rename = "yinxu")]
    YinDeficiency,
    #[serde(rename = "tanshi")]
    PhlegmDampness,
    #[serde(rename = "shire")]
    DampHeat,
    #[serde(rename = "xueyu")]
    BloodStasis,
    #[serde(rename = "qiyu")]
    QiStagnation,
    #[serde(rename = "tebing")]
    SpecialDiathesis,
}

impl ConstitutionType {
    /// Returns all categories in canonical order.
    pub fn all() -> &'static [ConstitutionType] {
        &[
            ConstitutionType::Balanced,
            ConstitutionType::QiDeficiency,
            ConstitutionType::YangDeficiency,
            ConstitutionType::YinDeficiency,
            ConstitutionType::PhlegmDampness,
            ConstitutionType::DampHeat,
            ConstitutionType::BloodStasis,
            ConstitutionType::QiStagnation,
            ConstitutionType::SpecialDiathesis,
        ]
    }

    /// Returns the 8 biased categories in canonical order.
    pub fn biased() -> &'static [ConstitutionType] {
        &Self::all()[1..]
    }

    /// True for the balanced (baseline) category.
    pub fn is_balanced(&self) -> bool {
        matches!(self, ConstitutionType::Balanced)
    }

    /// Returns the wire key used in catalogs and reports.
    pub fn key(&self) -> &'static str {
        match self {
            ConstitutionType::Balanced => "pinghe",
            ConstitutionType::QiDeficiency => "qixu",
            ConstitutionType::YangDeficiency => "yangxu",
            ConstitutionType::YinDeficiency => "yinxu",
            ConstitutionType::PhlegmDampness => "tanshi",
            ConstitutionType::DampHeat => "shire",
            ConstitutionType::BloodStasis => "xueyu",
            ConstitutionType::QiStagnation => "qiyu",
            ConstitutionType::SpecialDiathesis => "tebing",
        }
    }

    /// Returns the standard display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ConstitutionType::Balanced => "平和质",
            ConstitutionType::QiDeficiency => "气虚质",
            ConstitutionType::YangDeficiency => "阳虚质",
            ConstitutionType::YinDeficiency => "阴虚质",
            ConstitutionType::PhlegmDampness => "痰湿质",
            ConstitutionType::DampHeat => "湿热质",
            ConstitutionType::BloodStasis => "血瘀质",
            ConstitutionType::QiStagnation => "气郁质",
            ConstitutionType::SpecialDiathesis => "特禀质",
        }
    }
}

impl fmt::Display for ConstitutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ConstitutionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|c| c.key() == s)
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("category", format!("unknown category key '{}'", s))
            })
    }
}
