use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── OPERATION ─────────────────────────────────────────────────────────────────
//

/// Arithmetic applied to the two fractions of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
}

impl Operation {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
        }
    }

    /// Noun used in quiz headings ("Fraction Addition Quiz").
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
        }
    }

    /// Verb used in hints ("add the numerators").
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported operation: {raw:?}")]
pub struct ParseOperationError {
    pub raw: String,
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            _ => Err(ParseOperationError { raw: s.to_string() }),
        }
    }
}

//
// ─── FRACTION ──────────────────────────────────────────────────────────────────
//

/// Numerator/denominator pair. Never reduced to lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: u32,
    pub denominator: u32,
}

impl Fraction {
    #[must_use]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Combine two fractions that share a denominator.
///
/// Returns `None` when the denominators differ, or when a subtraction would
/// go below zero.
#[must_use]
pub fn combine(num1: u32, den1: u32, num2: u32, den2: u32, op: Operation) -> Option<Fraction> {
    if den1 != den2 {
        return None;
    }
    let numerator = match op {
        Operation::Add => num1.checked_add(num2)?,
        Operation::Subtract => num1.checked_sub(num2)?,
    };
    Some(Fraction::new(numerator, den1))
}
