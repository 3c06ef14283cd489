#![forbid(unsafe_code)]

pub mod error;
pub mod notice;
pub mod questions;
pub mod quiz;

pub use quiz_core::Clock;

pub use error::QuizError;
pub use notice::{Notice, Severity};
pub use questions::{CustomQuestionRepository, QuestionIdAllocator, validate_and_build};
pub use quiz::{
    AnswerOutcome, QuestionSource, QuizAction, QuizController, QuizEvent, QuizPhase,
    QuizProgress, QuizSession, transition,
};
