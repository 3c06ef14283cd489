use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

use crate::model::fraction::{Fraction, Operation, ParseOperationError, combine};
use crate::model::ids::QuestionId;

/// Accepted numerator values for authored questions.
pub const NUMERATOR_RANGE: RangeInclusive<u32> = 0..=100;

/// Accepted denominator values for authored questions.
pub const DENOMINATOR_RANGE: RangeInclusive<u32> = 1..=100;

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Input field of the question authoring form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionField {
    Numerator1,
    Denominator1,
    Numerator2,
    Denominator2,
}

impl QuestionField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Numerator1 => "Numerator 1",
            Self::Denominator1 => "Denominator 1",
            Self::Numerator2 => "Numerator 2",
            Self::Denominator2 => "Denominator 2",
        }
    }

    #[must_use]
    pub fn range(self) -> RangeInclusive<u32> {
        match self {
            Self::Numerator1 | Self::Numerator2 => NUMERATOR_RANGE,
            Self::Denominator1 | Self::Denominator2 => DENOMINATOR_RANGE,
        }
    }
}

impl fmt::Display for QuestionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw, unvalidated text of a user-authored question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub numerator1: String,
    pub denominator1: String,
    pub numerator2: String,
    pub denominator2: String,
    pub operation: String,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(
        numerator1: impl Into<String>,
        denominator1: impl Into<String>,
        numerator2: impl Into<String>,
        denominator2: impl Into<String>,
        operation: impl Into<String>,
    ) -> Self {
        Self {
            numerator1: numerator1.into(),
            denominator1: denominator1.into(),
            numerator2: numerator2.into(),
            denominator2: denominator2.into(),
            operation: operation.into(),
        }
    }

    /// True when every numeric field has some text in it.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        [
            &self.numerator1,
            &self.denominator1,
            &self.numerator2,
            &self.denominator2,
        ]
        .iter()
        .all(|value| !value.trim().is_empty())
    }

    /// Validate the draft and derive the answer.
    ///
    /// Checks run in a fixed order and stop at the first failure: parsing,
    /// ranges, equal denominators, non-negative subtraction, arithmetic.
    ///
    /// # Errors
    ///
    /// Returns the `QuestionError` of the first failing check.
    pub fn validate(&self) -> Result<ValidatedQuestion, QuestionError> {
        let num1 = parse_field(&self.numerator1, QuestionField::Numerator1)?;
        let den1 = parse_field(&self.denominator1, QuestionField::Denominator1)?;
        let num2 = parse_field(&self.numerator2, QuestionField::Numerator2)?;
        let den2 = parse_field(&self.denominator2, QuestionField::Denominator2)?;
        let operation = self.operation.parse::<Operation>()?;

        let num1 = check_range(num1, QuestionField::Numerator1)?;
        let den1 = check_range(den1, QuestionField::Denominator1)?;
        let num2 = check_range(num2, QuestionField::Numerator2)?;
        let den2 = check_range(den2, QuestionField::Denominator2)?;

        ValidatedQuestion::from_parts(num1, den1, num2, den2, operation)
    }
}

fn parse_field(raw: &str, field: QuestionField) -> Result<i64, QuestionError> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .or_else(|_| saturated_integer(raw).ok_or(QuestionError::Parse { field }))
}

/// Well-formed integers too large for `i64` saturate so they fail the range check.
fn saturated_integer(raw: &str) -> Option<i64> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

fn check_range(value: i64, field: QuestionField) -> Result<u32, QuestionError> {
    let range = field.range();
    u32::try_from(value)
        .ok()
        .filter(|v| range.contains(v))
        .ok_or_else(|| QuestionError::range(field, value))
}

//
// ─── VALIDATED QUESTION ────────────────────────────────────────────────────────
//

/// A question that passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuestion {
    left: Fraction,
    right: Fraction,
    operation: Operation,
    answer: Fraction,
}

impl ValidatedQuestion {
    /// Build a question from numeric parts.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::Range` for out-of-bounds values,
    /// `QuestionError::DenominatorMismatch` when the denominators differ and
    /// `QuestionError::NegativeResult` when a subtraction would go below zero.
    pub fn from_parts(
        num1: u32,
        den1: u32,
        num2: u32,
        den2: u32,
        operation: Operation,
    ) -> Result<Self, QuestionError> {
        for (value, field) in [
            (num1, QuestionField::Numerator1),
            (den1, QuestionField::Denominator1),
            (num2, QuestionField::Numerator2),
            (den2, QuestionField::Denominator2),
        ] {
            if !field.range().contains(&value) {
                return Err(QuestionError::range(field, i64::from(value)));
            }
        }

        if den1 != den2 {
            return Err(QuestionError::DenominatorMismatch {
                left: den1,
                right: den2,
            });
        }

        if operation == Operation::Subtract && num1 < num2 {
            return Err(QuestionError::NegativeResult {
                left: num1,
                right: num2,
            });
        }

        let answer = combine(num1, den1, num2, den2, operation).ok_or(QuestionError::Compute)?;

        Ok(Self {
            left: Fraction::new(num1, den1),
            right: Fraction::new(num2, den2),
            operation,
            answer,
        })
    }

    #[must_use]
    pub fn assign_id(self, id: QuestionId) -> Question {
        Question {
            id,
            left: self.left,
            right: self.right,
            operation: self.operation,
            answer: self.answer,
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// An immutable quiz question with its derived answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    left: Fraction,
    right: Fraction,
    operation: Operation,
    answer: Fraction,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn numerator1(&self) -> u32 {
        self.left.numerator
    }

    #[must_use]
    pub fn denominator1(&self) -> u32 {
        self.left.denominator
    }

    #[must_use]
    pub fn numerator2(&self) -> u32 {
        self.right.numerator
    }

    #[must_use]
    pub fn denominator2(&self) -> u32 {
        self.right.denominator
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn correct_numerator(&self) -> u32 {
        self.answer.numerator
    }

    #[must_use]
    pub fn correct_denominator(&self) -> u32 {
        self.answer.denominator
    }

    #[must_use]
    pub fn left(&self) -> Fraction {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> Fraction {
        self.right
    }

    #[must_use]
    pub fn answer(&self) -> Fraction {
        self.answer
    }

    /// Exact match on both components; equivalent fractions do not count.
    #[must_use]
    pub fn is_correct(&self, numerator: u32, denominator: u32) -> bool {
        self.answer.numerator == numerator && self.answer.denominator == denominator
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left, self.operation, self.right, self.answer
        )
    }
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("{field} is not a whole number")]
    Parse { field: QuestionField },

    #[error(transparent)]
    Operation(#[from] ParseOperationError),

    #[error("{field} must be between {min} and {max}, got {value}")]
    Range {
        field: QuestionField,
        value: i64,
        min: u32,
        max: u32,
    },

    #[error("denominators differ ({left} vs {right})")]
    DenominatorMismatch { left: u32, right: u32 },

    #[error("subtraction would be negative ({left} < {right})")]
    NegativeResult { left: u32, right: u32 },

    #[error("could not compute the answer")]
    Compute,
}

impl QuestionError {
    fn range(field: QuestionField, value: i64) -> Self {
        let range = field.range();
        Self::Range {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        }
    }
}
