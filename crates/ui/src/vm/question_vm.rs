use quiz_core::model::{Fraction, Operation, Question};
use services::{AnswerOutcome, QuizProgress};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub text: String,
}

/// Everything the question screen displays, pre-formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub heading: String,
    pub symbol: &'static str,
    pub left: Fraction,
    pub right: Fraction,
    pub answer: Fraction,
    pub hint: String,
    pub feedback: Option<FeedbackVm>,
    pub progress_label: String,
    pub next_label: &'static str,
}

impl QuestionVm {
    /// The result chart only shows the answer once feedback is up.
    #[must_use]
    pub fn result_numerator(&self) -> u32 {
        if self.feedback.is_some() {
            self.answer.numerator
        } else {
            0
        }
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.feedback.is_some()
    }
}

#[must_use]
pub fn hint_text(operation: Operation) -> String {
    format!(
        "When adding or subtracting fractions with the same denominator, keep the denominator and {} the numerators!",
        operation.verb()
    )
}

#[must_use]
pub fn map_feedback(outcome: &AnswerOutcome) -> FeedbackVm {
    let text = if outcome.correct {
        "Correct!".to_string()
    } else {
        format!("Try again! The answer is {}", outcome.expected)
    };
    FeedbackVm {
        correct: outcome.correct,
        text,
    }
}

#[must_use]
pub fn map_question(
    question: &Question,
    outcome: Option<&AnswerOutcome>,
    progress: QuizProgress,
) -> QuestionVm {
    let operation = question.operation();
    QuestionVm {
        heading: format!("Fraction {} Quiz", operation.noun()),
        symbol: operation.symbol(),
        left: question.left(),
        right: question.right(),
        answer: question.answer(),
        hint: hint_text(operation),
        feedback: outcome.map(map_feedback),
        progress_label: format!("Question {} of {}", progress.number, progress.total),
        next_label: if progress.is_last {
            "See Results"
        } else {
            "Next Question →"
        },
    }
}
