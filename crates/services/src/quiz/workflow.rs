use tracing::{debug, info, warn};

use quiz_core::Clock;
use quiz_core::model::{Question, QuestionDraft, QuestionError, QuestionId, ScoreSummary};
use quiz_core::presets::default_questions;

use crate::error::QuizError;
use crate::questions::{CustomQuestionRepository, QuestionIdAllocator, validate_and_build};
use super::phase::{QuestionSource, QuizPhase};
use super::progress::QuizProgress;
use super::session::{AnswerOutcome, QuizEvent, QuizSession};

/// Top-level owner of quiz state.
///
/// Holds the running session, the authored question list and the preset set.
/// Every mutation goes through one of the named methods below; the UI only
/// reads through the accessors.
#[derive(Debug, Clone)]
pub struct QuizController {
    session: QuizSession,
    custom: CustomQuestionRepository,
    ids: QuestionIdAllocator,
    defaults: Vec<Question>,
}

impl QuizController {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            session: QuizSession::new(),
            custom: CustomQuestionRepository::new(),
            ids: QuestionIdAllocator::new(clock),
            defaults: default_questions(),
        }
    }

    #[must_use]
    pub fn with_default_questions(mut self, defaults: Vec<Question>) -> Self {
        self.defaults = defaults;
        self
    }

    //
    // ─── QUIZ ──────────────────────────────────────────────────────────────────
    //

    /// Start a quiz with the preset set, or with a snapshot of the authored list.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoCustomQuestions` when `use_custom` is set and no
    /// questions have been authored; the request is ignored.
    /// Returns `QuizError::InvalidTransition` if a quiz is already running.
    pub fn start(&mut self, use_custom: bool) -> Result<QuizEvent, QuizError> {
        let source = QuestionSource::from_use_custom(use_custom);
        let questions = match source {
            QuestionSource::Default => self.defaults.clone(),
            QuestionSource::Custom => self.custom.snapshot(),
        };

        match self.session.start(source, questions) {
            Ok(event) => {
                info!(?source, total = self.session.total(), "quiz started");
                Ok(event)
            }
            Err(err) => {
                debug!(?source, error = %err, "start ignored");
                Err(err)
            }
        }
    }

    /// Check the raw answer fields against the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidGuess` if either field is not a whole number
    /// (nothing changes), or `QuizError::InvalidTransition` outside `InProgress`.
    pub fn check_answer(
        &mut self,
        numerator: &str,
        denominator: &str,
    ) -> Result<AnswerOutcome, QuizError> {
        let (Ok(numerator), Ok(denominator)) = (
            numerator.trim().parse::<u32>(),
            denominator.trim().parse::<u32>(),
        ) else {
            debug!(numerator, denominator, "unparseable answer");
            return Err(QuizError::InvalidGuess);
        };

        match self.session.check_answer(numerator, denominator) {
            Ok(QuizEvent::Answered(outcome)) => {
                debug!(
                    question = %outcome.question_id,
                    guess = %outcome.guess,
                    expected = %outcome.expected,
                    correct = outcome.correct,
                    score = self.session.score(),
                    "answer checked"
                );
                Ok(outcome)
            }
            Ok(other) => {
                warn!(event = ?other, "unexpected event for answer check");
                Err(QuizError::InvalidTransition {
                    action: "check an answer",
                    phase: self.session.phase(),
                })
            }
            Err(err) => {
                debug!(error = %err, "answer check ignored");
                Err(err)
            }
        }
    }

    /// Move past the feedback for the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` outside `ShowingFeedback`.
    pub fn next(&mut self) -> Result<QuizEvent, QuizError> {
        let event = self.session.next().inspect_err(|err| {
            debug!(error = %err, "next ignored");
        })?;
        match &event {
            QuizEvent::Completed(summary) => info!(
                score = summary.score(),
                total = summary.total(),
                percentage = summary.percentage(),
                tier = ?summary.tier(),
                "quiz complete"
            ),
            QuizEvent::Advanced { index } => debug!(index, "next question"),
            _ => {}
        }
        Ok(event)
    }

    /// Back to the start screen. The authored list is kept.
    pub fn restart(&mut self) -> QuizEvent {
        let was = self.session.phase();
        let event = self.session.restart();
        info!(from = %was, kept_custom = self.custom.len(), "quiz restarted");
        event
    }

    //
    // ─── AUTHORING ─────────────────────────────────────────────────────────────
    //

    /// Validate a draft, give it an id and append it to the authored list.
    ///
    /// # Errors
    ///
    /// Returns the first `QuestionError` from validation; the list is unchanged.
    pub fn add_question(&mut self, draft: &QuestionDraft) -> Result<Question, QuestionError> {
        match validate_and_build(draft, &mut self.ids) {
            Ok(question) => {
                info!(id = %question.id(), question = %question, "custom question added");
                self.custom.add(question.clone());
                Ok(question)
            }
            Err(err) => {
                warn!(error = %err, ?draft, "custom question rejected");
                Err(err)
            }
        }
    }

    /// Remove authored questions with `id`. Returns how many were removed.
    pub fn remove_question(&mut self, id: QuestionId) -> usize {
        let removed = self.custom.remove(id);
        info!(%id, removed, remaining = self.custom.len(), "custom question removed");
        removed
    }

    //
    // ─── READS ─────────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.session.current_question()
    }

    #[must_use]
    pub fn last_answer(&self) -> Option<&AnswerOutcome> {
        self.session.last_answer()
    }

    #[must_use]
    pub fn progress(&self) -> Option<QuizProgress> {
        self.session.progress()
    }

    #[must_use]
    pub fn summary(&self) -> Option<ScoreSummary> {
        self.session.summary()
    }

    #[must_use]
    pub fn custom_questions(&self) -> &[Question] {
        self.custom.list()
    }

    #[must_use]
    pub fn default_questions(&self) -> &[Question] {
        &self.defaults
    }
}
