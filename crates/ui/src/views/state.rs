use dioxus::prelude::*;

use quiz_core::model::{QuestionDraft, QuestionId};
use services::{Notice, QuizController};

/// Handles to the quiz controller and the current toast, shared through context.
///
/// Views read through the signals and mutate only through the methods here,
/// so every rejected action turns into a notice instead of being dropped.
#[derive(Clone, Copy, PartialEq)]
pub struct QuizState {
    pub controller: Signal<QuizController>,
    pub notice: Signal<Option<Notice>>,
}

impl QuizState {
    /// Returns true if the quiz started.
    pub fn start(mut self, use_custom: bool) -> bool {
        let result = self.controller.write().start(use_custom);
        match result {
            Ok(_) => {
                self.notice.set(None);
                true
            }
            Err(err) => {
                self.notice.set(Some(Notice::from(&err)));
                false
            }
        }
    }

    pub fn check_answer(mut self, numerator: &str, denominator: &str) {
        let result = self.controller.write().check_answer(numerator, denominator);
        if let Err(err) = result {
            self.notice.set(Some(Notice::from(&err)));
        }
    }

    pub fn next(mut self) {
        let result = self.controller.write().next();
        if let Err(err) = result {
            tracing::debug!(error = %err, "next ignored by view");
        }
    }

    pub fn restart(mut self) {
        self.controller.write().restart();
        self.notice.set(None);
    }

    /// Returns true if the question was added; the form clears only then.
    pub fn add_question(mut self, draft: &QuestionDraft) -> bool {
        let result = self.controller.write().add_question(draft);
        let (notice, added) = match result {
            Ok(_) => (Notice::question_added(), true),
            Err(err) => (Notice::from(&err), false),
        };
        self.notice.set(Some(notice));
        added
    }

    pub fn remove_question(mut self, id: QuestionId) {
        if self.controller.write().remove_question(id) > 0 {
            self.notice.set(Some(Notice::question_removed()));
        }
    }

    pub fn dismiss(mut self) {
        self.notice.set(None);
    }
}

/// Create the quiz signals and provide them to every descendant.
pub fn use_quiz_state_provider(init: impl FnOnce() -> QuizController) -> QuizState {
    use_context_provider(|| QuizState {
        controller: Signal::new(init()),
        notice: Signal::new(None),
    })
}
