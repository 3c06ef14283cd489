use quiz_core::model::{Question, QuestionId};

/// Row in the "Your Custom Questions" list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomQuestionItemVm {
    pub id: QuestionId,
    pub label: String,
}

#[must_use]
pub fn map_custom_questions(questions: &[Question]) -> Vec<CustomQuestionItemVm> {
    questions
        .iter()
        .map(|q| CustomQuestionItemVm {
            id: q.id(),
            label: q.to_string(),
        })
        .collect()
}

/// Label of the button that starts a quiz over the authored list.
#[must_use]
pub fn start_custom_label(count: usize) -> String {
    let noun = if count == 1 { "question" } else { "questions" };
    format!("Start Quiz with My Questions ({count} {noun})")
}
