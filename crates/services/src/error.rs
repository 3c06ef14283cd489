//! Shared error types for the services crate.

use thiserror::Error;

use crate::quiz::QuizPhase;

/// Errors emitted by the quiz state machine and controller.
///
/// None of these change state: a rejected action leaves the session exactly
/// as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("cannot {action} while {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: QuizPhase,
    },
    #[error("no custom questions to start with")]
    NoCustomQuestions,
    #[error("question set is empty")]
    NoQuestions,
    #[error("answer must be two whole numbers")]
    InvalidGuess,
}
