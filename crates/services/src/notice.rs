//! User-facing notices handed to the notification collaborator (toasts).

use quiz_core::model::QuestionError;

use crate::error::QuizError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Ephemeral alert: a title, a message and a severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    #[must_use]
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Info,
        }
    }

    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    #[must_use]
    pub fn question_added() -> Self {
        Self::info(
            "Question Added!",
            "Your custom question has been added successfully.",
        )
    }

    #[must_use]
    pub fn question_removed() -> Self {
        Self::info("Question Removed", "The question was removed from your list.")
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl From<&QuestionError> for Notice {
    fn from(err: &QuestionError) -> Self {
        match err {
            QuestionError::Parse { .. } | QuestionError::Range { .. } => Self::error(
                "Invalid Input",
                "Please enter valid numbers between 0-100 for numerators and 1-100 for denominators.",
            ),
            QuestionError::Operation(_) => {
                Self::error("Invalid Input", "Please choose + or - as the operation.")
            }
            QuestionError::DenominatorMismatch { .. } => Self::error(
                "Different Denominators",
                "For now, please use fractions with the same denominator.",
            ),
            QuestionError::NegativeResult { .. } => Self::error(
                "Negative Result",
                "Please ensure the first fraction is larger for subtraction.",
            ),
            QuestionError::Compute => Self::error(
                "Error",
                "Could not calculate answer. Please check your inputs.",
            ),
            _ => Self::error("Error", "Please enter valid numbers."),
        }
    }
}

impl From<&QuizError> for Notice {
    fn from(err: &QuizError) -> Self {
        match err {
            QuizError::NoCustomQuestions => Self::error(
                "No Questions Yet",
                "Add at least one question before starting your own quiz.",
            ),
            QuizError::InvalidGuess => Self::error(
                "Invalid Answer",
                "Please enter whole numbers for the numerator and denominator.",
            ),
            other => Self::error("Error", other.to_string()),
        }
    }
}
