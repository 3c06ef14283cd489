mod phase;
mod progress;
mod session;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use phase::{QuestionSource, QuizPhase};
pub use progress::QuizProgress;
pub use session::{AnswerOutcome, QuizAction, QuizEvent, QuizSession, transition};
pub use workflow::QuizController;
