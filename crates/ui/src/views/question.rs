use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::map_question;

use super::forms::AnswerForm;
use super::{FractionCircle, FractionText, QuizState};

#[component]
pub fn QuestionView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_context::<QuizState>();
    let mut answer = use_signal(AnswerForm::default);

    let vm = {
        let ctl = state.controller.read();
        ctl.current_question()
            .zip(ctl.progress())
            .map(|(question, progress)| map_question(question, ctl.last_answer(), progress))
    };
    let Some(vm) = vm else {
        return rsx! {
            div { class: "page quiz",
                p { class: "muted", "No question to show." }
            }
        };
    };

    let revealed = vm.is_revealed();
    let current = answer.read().clone();
    let can_check = current.can_check();
    let hint_visible = current.hint_visible(revealed);
    let hints_enabled = ctx.hints_enabled();
    let feedback_class = match &vm.feedback {
        Some(feedback) if feedback.correct => "feedback feedback--correct",
        _ => "feedback feedback--wrong",
    };

    rsx! {
        div { class: "page quiz",
            section { class: "visual",
                h2 { "Visualizing Operations" }
                div { class: "visual-row",
                    FractionCircle {
                        numerator: vm.left.numerator,
                        denominator: vm.left.denominator,
                        filled: true,
                    }
                    span { class: "op", "{vm.symbol}" }
                    FractionCircle {
                        numerator: vm.right.numerator,
                        denominator: vm.right.denominator,
                        filled: true,
                    }
                    span { class: "op", "=" }
                    FractionCircle {
                        numerator: vm.result_numerator(),
                        denominator: vm.answer.denominator,
                        filled: revealed,
                    }
                }
            }

            section { class: "work",
                h3 { "{vm.heading}" }
                div { class: "equation",
                    FractionText { fraction: vm.left }
                    span { class: "op", "{vm.symbol}" }
                    FractionText { fraction: vm.right }
                    span { class: "op", "=" }
                    div { class: "answer-inputs",
                        input {
                            id: "answer-numerator",
                            class: "answer-input",
                            r#type: "number",
                            placeholder: "?",
                            value: "{current.numerator}",
                            disabled: revealed,
                            oninput: move |evt| answer.write().numerator = evt.value(),
                        }
                        span { class: "fraction-bar" }
                        input {
                            id: "answer-denominator",
                            class: "answer-input",
                            r#type: "number",
                            placeholder: "?",
                            value: "{current.denominator}",
                            disabled: revealed,
                            oninput: move |evt| answer.write().denominator = evt.value(),
                        }
                    }
                }

                if let Some(feedback) = vm.feedback.as_ref() {
                    div { class: "{feedback_class}", role: "status",
                        span { "{feedback.text}" }
                    }
                }

                if hint_visible {
                    div { class: "hint",
                        p {
                            strong { "Hint: " }
                            "{vm.hint}"
                        }
                    }
                }

                div { class: "actions",
                    if revealed {
                        button {
                            id: "next-question",
                            class: "btn btn--primary",
                            r#type: "button",
                            onclick: move |_| {
                                answer.write().reset();
                                state.next();
                            },
                            "{vm.next_label}"
                        }
                    } else {
                        if hints_enabled {
                            button {
                                id: "get-hint",
                                class: "btn btn--outline",
                                r#type: "button",
                                onclick: move |_| answer.write().reveal_hint(),
                                "Get Hint"
                            }
                        }
                        button {
                            id: "check-answer",
                            class: "btn btn--primary",
                            r#type: "button",
                            disabled: !can_check,
                            onclick: move |_| {
                                let guess = answer.read().clone();
                                state.check_answer(&guess.numerator, &guess.denominator);
                            },
                            "✓ Check Answer"
                        }
                    }
                }

                p { class: "progress", "{vm.progress_label}" }
            }
        }
    }
}
