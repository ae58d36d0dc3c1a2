//! The two standard questionnaires, embedded at compile time.
//!
//! Both go through the same validation as externally supplied catalogs, once,
//! on first use.

use once_cell::sync::Lazy;

use super::catalog::{CatalogError, CatalogVariant, QuestionCatalog};

static SHORT_SOURCE: &str = include_str!("catalogs/short.yaml");
static FULL_SOURCE: &str = include_str!("catalogs/full.yaml");

static SHORT: Lazy<Result<QuestionCatalog, CatalogError>> =
    Lazy::new(|| QuestionCatalog::from_yaml(SHORT_SOURCE));
static FULL: Lazy<Result<QuestionCatalog, CatalogError>> =
    Lazy::new(|| QuestionCatalog::from_yaml(FULL_SOURCE));

/// Returns the validated standard catalog for `variant`.
pub fn standard_catalog(variant: CatalogVariant) -> Result<&'static QuestionCatalog, CatalogError> {
    let loaded = match variant {
        CatalogVariant::Short => &*SHORT,
        CatalogVariant::Full => &*FULL,
    };
    loaded.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ConstitutionType;

    #[test]
    fn short_catalog_has_three_items_per_category() {
        let catalog = standard_catalog(CatalogVariant::Short).unwrap();
        assert_eq!(catalog.len(), 27);
        for category in ConstitutionType::all() {
            assert_eq!(catalog.item_count(*category), 3, "{}", category);
        }
    }

    #[test]
    fn short_catalog_has_single_reverse_item_on_balanced() {
        let catalog = standard_catalog(CatalogVariant::Short).unwrap();
        let reversed: Vec<_> = catalog.questions().iter().filter(|q| q.reverse).collect();
        assert_eq!(reversed.len(), 1);
        assert_eq!(reversed[0].category, ConstitutionType::Balanced);
    }

    #[test]
    fn full_catalog_shape() {
        let catalog = standard_catalog(CatalogVariant::Full).unwrap();
        assert_eq!(catalog.len(), 67);
        assert_eq!(catalog.item_count(ConstitutionType::Balanced), 8);
        assert_eq!(catalog.item_count(ConstitutionType::QiDeficiency), 8);
        assert_eq!(catalog.item_count(ConstitutionType::YangDeficiency), 7);
        assert_eq!(catalog.item_count(ConstitutionType::SpecialDiathesis), 7);
        assert_eq!(catalog.questions().iter().filter(|q| q.reverse).count(), 3);
    }

    #[test]
    fn catalogs_are_named_after_variant() {
        assert_eq!(standard_catalog(CatalogVariant::Short).unwrap().name(), "short");
        assert_eq!(standard_catalog(CatalogVariant::Full).unwrap().name(), "full");
    }
}
