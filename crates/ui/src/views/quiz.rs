use dioxus::prelude::*;
use services::QuizPhase;

use super::{QuestionView, QuizState, ResultsView, StartView};

/// Home route: shows the screen for the current quiz phase.
#[component]
pub fn QuizView() -> Element {
    let state = use_context::<QuizState>();
    let phase = state.controller.read().phase();

    match phase {
        QuizPhase::NotStarted => rsx! { StartView {} },
        QuizPhase::InProgress | QuizPhase::ShowingFeedback => rsx! { QuestionView {} },
        QuizPhase::Complete => rsx! { ResultsView {} },
    }
}
