//! Guidance Module - Reference descriptions and lifestyle advice per category.

mod profile;

pub use profile::{profile_for, Advice, ConstitutionProfile};
