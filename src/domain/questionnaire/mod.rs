//! Questionnaire Module - Questions and validated question catalogs.

mod catalog;
mod question;
mod standard;

pub use catalog::{CatalogError, CatalogVariant, QuestionCatalog, QuestionRecord};
pub use question::{Question, QuestionId};
pub use standard::standard_catalog;
