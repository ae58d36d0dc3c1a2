//! Normalized score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A converted category score between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct NormalizedScore(u8);

impl NormalizedScore {
    /// Lowest possible score.
    pub const ZERO: Self = Self(0);

    /// Creates a new score, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a score, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "normalized_score",
                0,
                100,
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for NormalizedScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<u8> for NormalizedScore {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<NormalizedScore> for u8 {
    fn from(score: NormalizedScore) -> Self {
        score.0
    }
}

impl fmt::Display for NormalizedScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(NormalizedScore::new(0).value(), 0);
        assert_eq!(NormalizedScore::new(50).value(), 50);
        assert_eq!(NormalizedScore::new(100).value(), 100);
    }

    #[test]
    fn new_clamps_to_100() {
        assert_eq!(NormalizedScore::new(101).value(), 100);
        assert_eq!(NormalizedScore::new(255).value(), 100);
    }

    #[test]
    fn try_new_rejects_over_100() {
        match NormalizedScore::try_new(120) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "normalized_score");
                assert_eq!(actual, 120);
            }
            _ => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&NormalizedScore::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn deserialization_validates_range() {
        let score: NormalizedScore = serde_json::from_str("75").unwrap();
        assert_eq!(score.value(), 75);
        assert!(serde_json::from_str::<NormalizedScore>("101").is_err());
    }

    #[test]
    fn ordering_works() {
        assert!(NormalizedScore::new(25) < NormalizedScore::new(75));
        assert_eq!(NormalizedScore::default(), NormalizedScore::ZERO);
    }
}
