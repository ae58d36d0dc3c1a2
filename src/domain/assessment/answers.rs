//! Answer sheet and out-of-range answer policy.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::questionnaire::QuestionId;

/// Raw answers keyed by question id. Skipped questions are simply absent.
///
/// Values are kept as given; range checking happens during aggregation under
/// the engine's [`AnswerPolicy`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet(BTreeMap<QuestionId, i32>);

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or overwrites) the answer to one question.
    pub fn answer(mut self, id: impl Into<QuestionId>, value: i32) -> Self {
        self.0.insert(id.into(), value);
        self
    }

    pub fn insert(&mut self, id: impl Into<QuestionId>, value: i32) {
        self.0.insert(id.into(), value);
    }

    pub fn get(&self, id: QuestionId) -> Option<i32> {
        self.0.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, i32)> + '_ {
        self.0.iter().map(|(id, v)| (*id, *v))
    }
}

impl<K: Into<QuestionId>> FromIterator<(K, i32)> for AnswerSheet {
    fn from_iter<T: IntoIterator<Item = (K, i32)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// How answers outside 1..=5 are treated. Applied uniformly to every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerPolicy {
    /// Abort the assessment with `InvalidAnswer`.
    #[default]
    Reject,
    /// Pin the value into range and report it to the observer.
    Clamp,
}
