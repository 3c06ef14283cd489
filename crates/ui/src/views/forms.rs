use quiz_core::model::{Operation, QuestionDraft};

//
// ─── AUTHORING FORM ────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Numerator1,
    Denominator1,
    Numerator2,
    Denominator2,
    Operation,
}

/// Raw text of the "Add a Fraction Question" form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthoringForm {
    pub numerator1: String,
    pub denominator1: String,
    pub numerator2: String,
    pub denominator2: String,
    pub operation: String,
}

impl Default for AuthoringForm {
    fn default() -> Self {
        Self {
            numerator1: String::new(),
            denominator1: String::new(),
            numerator2: String::new(),
            denominator2: String::new(),
            operation: Operation::Add.symbol().to_string(),
        }
    }
}

impl AuthoringForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Numerator1 => &mut self.numerator1,
            DraftField::Denominator1 => &mut self.denominator1,
            DraftField::Numerator2 => &mut self.numerator2,
            DraftField::Denominator2 => &mut self.denominator2,
            DraftField::Operation => &mut self.operation,
        };
        *slot = value;
    }

    #[must_use]
    pub fn draft(&self) -> QuestionDraft {
        QuestionDraft::new(
            self.numerator1.as_str(),
            self.denominator1.as_str(),
            self.numerator2.as_str(),
            self.denominator2.as_str(),
            self.operation.as_str(),
        )
    }

    /// "Add Question" stays disabled until every number field has text.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.draft().is_filled()
    }

    /// Hand the draft to `add`. The number fields are cleared only when `add`
    /// accepts it; a rejected draft keeps what the user typed.
    pub fn submit(&mut self, add: impl FnOnce(&QuestionDraft) -> bool) -> bool {
        let added = add(&self.draft());
        if added {
            self.numerator1.clear();
            self.denominator1.clear();
            self.numerator2.clear();
            self.denominator2.clear();
        }
        added
    }
}

//
// ─── ANSWER FORM ───────────────────────────────────────────────────────────────
//

/// Transient state of the question screen: the two guess fields and the hint flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerForm {
    pub numerator: String,
    pub denominator: String,
    pub show_hint: bool,
}

impl AnswerForm {
    #[must_use]
    pub fn can_check(&self) -> bool {
        !self.numerator.trim().is_empty() && !self.denominator.trim().is_empty()
    }

    pub fn reveal_hint(&mut self) {
        self.show_hint = true;
    }

    /// The hint is hidden while feedback is on screen.
    #[must_use]
    pub fn hint_visible(&self, revealed: bool) -> bool {
        self.show_hint && !revealed
    }

    /// Called when moving to the next question.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_clock;
    use services::QuizController;

    fn filled(n1: &str, d1: &str, n2: &str, d2: &str, op: &str) -> AuthoringForm {
        let mut form = AuthoringForm::new();
        form.set(DraftField::Numerator1, n1.into());
        form.set(DraftField::Denominator1, d1.into());
        form.set(DraftField::Numerator2, n2.into());
        form.set(DraftField::Denominator2, d2.into());
        form.set(DraftField::Operation, op.into());
        form
    }

    #[test]
    fn new_form_defaults_to_addition_and_cannot_submit() {
        let form = AuthoringForm::new();
        assert_eq!(form.operation, "+");
        assert!(!form.can_submit());
        assert!(!filled("1", "3", "1", "", "+").can_submit());
        assert!(filled("1", "3", "1", "3", "+").can_submit());
    }

    #[test]
    fn accepted_submit_clears_number_fields() {
        let mut ctl = QuizController::new(fixed_clock());
        let mut form = filled("2", "3", "1", "3", "-");

        assert!(form.submit(|draft| ctl.add_question(draft).is_ok()));
        assert_eq!(form.numerator1, "");
        assert_eq!(form.denominator1, "");
        assert_eq!(form.numerator2, "");
        assert_eq!(form.denominator2, "");
        assert_eq!(form.operation, "-");
        assert_eq!(ctl.custom_questions().len(), 1);
        assert_eq!(ctl.custom_questions()[0].to_string(), "2/3 - 1/3 = 1/3");
    }

    #[test]
    fn rejected_submit_keeps_what_was_typed() {
        let mut ctl = QuizController::new(fixed_clock());
        let mut form = filled("1", "4", "3", "8", "+");
        let before = form.clone();

        assert!(!form.submit(|draft| ctl.add_question(draft).is_ok()));
        assert_eq!(form, before);
        assert!(ctl.custom_questions().is_empty());
    }

    #[test]
    fn answer_form_gates_check_on_both_fields() {
        let mut form = AnswerForm::default();
        assert!(!form.can_check());
        form.numerator = "3".into();
        assert!(!form.can_check());
        form.denominator = "  ".into();
        assert!(!form.can_check());
        form.denominator = "3".into();
        assert!(form.can_check());
    }

    #[test]
    fn hint_hides_once_feedback_is_shown() {
        let mut form = AnswerForm::default();
        assert!(!form.hint_visible(false));
        form.reveal_hint();
        assert!(form.hint_visible(false));
        assert!(!form.hint_visible(true));
    }

    #[test]
    fn reset_clears_guess_and_hint_for_next_question() {
        let mut ctl = QuizController::new(fixed_clock());
        ctl.start(false).unwrap();

        let mut form = AnswerForm::default();
        form.numerator = "3".into();
        form.denominator = "3".into();
        form.reveal_hint();
        ctl.check_answer(&form.numerator, &form.denominator).unwrap();
        ctl.next().unwrap();
        form.reset();

        assert_eq!(form, AnswerForm::default());
        assert!(!form.can_check());
        assert!(!form.hint_visible(false));
        assert_eq!(ctl.progress().unwrap().number, 2);
    }
}
