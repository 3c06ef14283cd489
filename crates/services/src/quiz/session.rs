use quiz_core::model::{Fraction, Question, QuestionId, ScoreSummary};

use crate::error::QuizError;
use super::phase::{QuestionSource, QuizPhase};
use super::progress::QuizProgress;

//
// ─── ACTIONS AND EVENTS ────────────────────────────────────────────────────────
//

/// Input to the quiz state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizAction {
    /// Begin a quiz over `questions`. The caller picks the set.
    Start {
        source: QuestionSource,
        questions: Vec<Question>,
    },
    CheckAnswer {
        numerator: u32,
        denominator: u32,
    },
    Next,
    Restart,
}

impl QuizAction {
    fn verb(&self) -> &'static str {
        match self {
            Self::Start { .. } => "start",
            Self::CheckAnswer { .. } => "check an answer",
            Self::Next => "go to the next question",
            Self::Restart => "restart",
        }
    }
}

/// Result of checking one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub question_id: QuestionId,
    pub correct: bool,
    pub guess: Fraction,
    pub expected: Fraction,
}

/// What an applied action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    Started {
        source: QuestionSource,
        total: usize,
    },
    Answered(AnswerOutcome),
    Advanced {
        index: usize,
    },
    Completed(ScoreSummary),
    Restarted,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// State of a single quiz run.
///
/// The active set is fixed at start; `current` only moves forward by one per
/// `Next`, and `score` never exceeds the number of answered questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    source: QuestionSource,
    current: usize,
    score: u32,
    phase: QuizPhase,
    last_answer: Option<AnswerOutcome>,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn source(&self) -> QuestionSource {
        self.source
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// The question being asked, or `None` before the quiz starts.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.phase.is_started() {
            self.questions.get(self.current)
        } else {
            None
        }
    }

    /// Outcome of the current question once it has been checked.
    #[must_use]
    pub fn last_answer(&self) -> Option<&AnswerOutcome> {
        self.last_answer.as_ref()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn progress(&self) -> Option<QuizProgress> {
        self.current_question().map(|_| QuizProgress {
            number: self.current + 1,
            total: self.total(),
            score: self.score,
            is_last: self.is_last_question(),
        })
    }

    /// Final score, available once the quiz is complete.
    #[must_use]
    pub fn summary(&self) -> Option<ScoreSummary> {
        (self.phase == QuizPhase::Complete).then(|| self.score_summary())
    }

    fn score_summary(&self) -> ScoreSummary {
        let total = u32::try_from(self.total()).unwrap_or(u32::MAX);
        ScoreSummary::new(self.score, total)
    }

    /// Apply `action` in place.
    ///
    /// # Errors
    ///
    /// Returns the `QuizError` from `transition`; the session is unchanged.
    pub fn apply(&mut self, action: QuizAction) -> Result<QuizEvent, QuizError> {
        let (next, event) = transition(self, action)?;
        *self = next;
        Ok(event)
    }

    /// Start the quiz over the given set.
    ///
    /// # Errors
    ///
    /// See `transition`.
    pub fn start(
        &mut self,
        source: QuestionSource,
        questions: Vec<Question>,
    ) -> Result<QuizEvent, QuizError> {
        self.apply(QuizAction::Start { source, questions })
    }

    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside `InProgress`.
    pub fn check_answer(
        &mut self,
        numerator: u32,
        denominator: u32,
    ) -> Result<QuizEvent, QuizError> {
        self.apply(QuizAction::CheckAnswer {
            numerator,
            denominator,
        })
    }

    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside `ShowingFeedback`.
    pub fn next(&mut self) -> Result<QuizEvent, QuizError> {
        self.apply(QuizAction::Next)
    }

    pub fn restart(&mut self) -> QuizEvent {
        *self = Self::default();
        QuizEvent::Restarted
    }
}

/// Pure transition function: `(state, action) -> state`.
///
/// Returns the next session and the event describing the change. The input
/// session is never modified.
///
/// # Errors
///
/// - `QuizError::NoCustomQuestions` when starting a custom quiz with no questions.
/// - `QuizError::NoQuestions` when starting the default quiz with an empty set.
/// - `QuizError::InvalidTransition` when the action is not allowed in the current phase.
pub fn transition(
    session: &QuizSession,
    action: QuizAction,
) -> Result<(QuizSession, QuizEvent), QuizError> {
    let rejected = |action: &QuizAction| QuizError::InvalidTransition {
        action: action.verb(),
        phase: session.phase,
    };

    match (session.phase, action) {
        (_, QuizAction::Restart) => Ok((QuizSession::default(), QuizEvent::Restarted)),

        (QuizPhase::NotStarted, QuizAction::Start { source, questions }) => {
            if questions.is_empty() {
                return Err(match source {
                    QuestionSource::Custom => QuizError::NoCustomQuestions,
                    QuestionSource::Default => QuizError::NoQuestions,
                });
            }
            let total = questions.len();
            let next = QuizSession {
                questions,
                source,
                current: 0,
                score: 0,
                phase: QuizPhase::InProgress,
                last_answer: None,
            };
            Ok((next, QuizEvent::Started { source, total }))
        }

        (
            QuizPhase::InProgress,
            QuizAction::CheckAnswer {
                numerator,
                denominator,
            },
        ) => {
            let Some(question) = session.questions.get(session.current) else {
                return Err(QuizError::NoQuestions);
            };
            let correct = question.is_correct(numerator, denominator);
            let outcome = AnswerOutcome {
                question_id: question.id(),
                correct,
                guess: Fraction::new(numerator, denominator),
                expected: question.answer(),
            };
            let mut next = session.clone();
            if correct {
                next.score = next.score.saturating_add(1);
            }
            next.phase = QuizPhase::ShowingFeedback;
            next.last_answer = Some(outcome);
            Ok((next, QuizEvent::Answered(outcome)))
        }

        (QuizPhase::ShowingFeedback, QuizAction::Next) => {
            let mut next = session.clone();
            if session.is_last_question() {
                next.phase = QuizPhase::Complete;
                let summary = next.score_summary();
                Ok((next, QuizEvent::Completed(summary)))
            } else {
                let index = session.current + 1;
                next.current = index;
                next.phase = QuizPhase::InProgress;
                next.last_answer = None;
                Ok((next, QuizEvent::Advanced { index }))
            }
        }

        (_, action) => Err(rejected(&action)),
    }
}
