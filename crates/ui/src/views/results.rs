use dioxus::prelude::*;

use crate::vm::map_results;

use super::QuizState;

#[component]
pub fn ResultsView() -> Element {
    let state = use_context::<QuizState>();
    let summary = state.controller.read().summary();
    let Some(summary) = summary else {
        return rsx! {
            div { class: "page results",
                p { class: "muted", "No results yet." }
            }
        };
    };
    let vm = map_results(&summary);

    rsx! {
        div { class: "page results",
            div { class: "results-card",
                div { class: "trophy", "🏆" }
                h1 { "Quiz Complete!" }
                p { class: "lead", "{vm.message}" }

                div { class: "score",
                    div { class: "score-big", "{vm.score_label}" }
                    div { class: "score-pct", "{vm.percentage_label}" }
                }

                dl { class: "breakdown",
                    dt { "Correct Answers" }
                    dd { class: "correct", "{vm.correct}" }
                    dt { "Incorrect Answers" }
                    dd { class: "incorrect", "{vm.incorrect}" }
                }

                button {
                    id: "try-again",
                    class: "btn btn--primary",
                    r#type: "button",
                    onclick: move |_| state.restart(),
                    "Try Again"
                }
            }
        }
    }
}
