//! Scoring configuration

use serde::Deserialize;

use crate::domain::assessment::AnswerPolicy;
use crate::domain::questionnaire::CatalogVariant;

/// Scoring engine settings
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// `reject` (default) or `clamp`
    #[serde(default)]
    pub answer_policy: AnswerPolicy,

    /// Catalog used when a request names none
    #[serde(default)]
    pub default_variant: CatalogVariant,

    /// Attach the `tracing` observer to the engine
    #[serde(default = "default_trace_scoring")]
    pub trace_scoring: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            answer_policy: AnswerPolicy::default(),
            default_variant: CatalogVariant::default(),
            trace_scoring: default_trace_scoring(),
        }
    }
}

fn default_trace_scoring() -> bool {
    true
}
