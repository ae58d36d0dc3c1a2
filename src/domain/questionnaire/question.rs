//! Question value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ConstitutionType, LikertAnswer};

/// Catalog-unique question identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u32);

impl QuestionId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for QuestionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single questionnaire item tagged with the category it measures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub category: ConstitutionType,
    /// Higher agreement means lower trait intensity.
    #[serde(default)]
    pub reverse: bool,
}

impl Question {
    /// Creates a forward-scored question.
    pub fn new(id: impl Into<QuestionId>, text: impl Into<String>, category: ConstitutionType) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category,
            reverse: false,
        }
    }

    /// Creates a reverse-scored question.
    pub fn reversed(
        id: impl Into<QuestionId>,
        text: impl Into<String>,
        category: ConstitutionType,
    ) -> Self {
        Self {
            reverse: true,
            ..Self::new(id, text, category)
        }
    }

    /// Returns the value this question adds to its category's raw score.
    pub fn contribution(&self, answer: LikertAnswer) -> LikertAnswer {
        if self.reverse {
            answer.reversed()
        } else {
            answer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_question_contributes_answer_as_is() {
        let q = Question::new(4u32, "您容易气短吗？", ConstitutionType::QiDeficiency);
        assert!(!q.reverse);
        assert_eq!(q.contribution(LikertAnswer::Often), LikertAnswer::Often);
    }

    #[test]
    fn reverse_question_inverts_answer() {
        let q = Question::reversed(2u32, "您容易疲乏吗？", ConstitutionType::Balanced);
        assert_eq!(q.contribution(LikertAnswer::Never).value(), 5);
        assert_eq!(q.contribution(LikertAnswer::Always).value(), 1);
        assert_eq!(q.contribution(LikertAnswer::Sometimes).value(), 3);
    }

    #[test]
    fn reverse_defaults_to_false_when_absent() {
        let json = r#"{"id": 7, "text": "您手脚发凉吗？", "category": "yangxu"}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id, QuestionId::new(7));
        assert_eq!(q.category, ConstitutionType::YangDeficiency);
        assert!(!q.reverse);
    }
}
