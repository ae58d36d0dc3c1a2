//! Likert answer value object (1 to 5 frequency scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Lowest valid answer value.
pub const LIKERT_MIN: i32 = 1;

/// Highest valid answer value.
pub const LIKERT_MAX: i32 = 5;

/// Five-point frequency answer: 1 (never) to 5 (always).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(u8)]
pub enum LikertAnswer {
    Never = 1,
    Rarely = 2,
    Sometimes = 3,
    Often = 4,
    Always = 5,
}

impl LikertAnswer {
    /// Creates an answer from an integer, returning error if out of range.
    pub fn try_from_i32(value: i32) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(LikertAnswer::Never),
            2 => Ok(LikertAnswer::Rarely),
            3 => Ok(LikertAnswer::Sometimes),
            4 => Ok(LikertAnswer::Often),
            5 => Ok(LikertAnswer::Always),
            _ => Err(ValidationError::out_of_range(
                "answer",
                LIKERT_MIN,
                LIKERT_MAX,
                value,
            )),
        }
    }

    /// Creates an answer by clamping any integer into range.
    pub fn clamped(value: i32) -> Self {
        match value.clamp(LIKERT_MIN, LIKERT_MAX) {
            1 => LikertAnswer::Never,
            2 => LikertAnswer::Rarely,
            3 => LikertAnswer::Sometimes,
            4 => LikertAnswer::Often,
            _ => LikertAnswer::Always,
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the mirrored answer (`6 - value`) used for reverse-scored items.
    pub fn reversed(&self) -> Self {
        match self {
            LikertAnswer::Never => LikertAnswer::Always,
            LikertAnswer::Rarely => LikertAnswer::Often,
            LikertAnswer::Sometimes => LikertAnswer::Sometimes,
            LikertAnswer::Often => LikertAnswer::Rarely,
            LikertAnswer::Always => LikertAnswer::Never,
        }
    }

    /// Returns the questionnaire option label.
    pub fn label(&self) -> &'static str {
        match self {
            LikertAnswer::Never => "没有",
            LikertAnswer::Rarely => "很少",
            LikertAnswer::Sometimes => "有时",
            LikertAnswer::Often => "经常",
            LikertAnswer::Always => "总是",
        }
    }

    /// Returns all answers in ascending order.
    pub fn all() -> &'static [LikertAnswer] {
        &[
            LikertAnswer::Never,
            LikertAnswer::Rarely,
            LikertAnswer::Sometimes,
            LikertAnswer::Often,
            LikertAnswer::Always,
        ]
    }
}

impl TryFrom<i32> for LikertAnswer {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from_i32(value)
    }
}

impl From<LikertAnswer> for i32 {
    fn from(answer: LikertAnswer) -> Self {
        i32::from(answer.value())
    }
}

impl fmt::Display for LikertAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
