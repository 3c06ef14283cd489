use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;
use crate::vm::{map_custom_questions, start_custom_label};

use super::QuizState;
use super::forms::{AuthoringForm, DraftField};

#[component]
pub fn AuthoringView() -> Element {
    let state = use_context::<QuizState>();
    let navigator = use_navigator();

    let mut form = use_signal(AuthoringForm::new);

    let items = map_custom_questions(state.controller.read().custom_questions());
    let count = items.len();
    let start_label = start_custom_label(count);
    let can_add = form.read().can_submit();
    let current = form.read().clone();

    let on_add = move |_: MouseEvent| {
        form.write().submit(|draft| state.add_question(draft));
    };

    rsx! {
        div { class: "page authoring",
            div { class: "authoring-header",
                button {
                    id: "back-to-start",
                    class: "btn btn--ghost",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::Home {});
                    },
                    "← Back"
                }
                h1 { "Create Your Own Questions" }
            }

            section { class: "question-form",
                h2 { "Add a Fraction Question" }
                div { class: "form-row",
                    div { class: "fraction-input",
                        input {
                            id: "numerator1",
                            r#type: "number",
                            placeholder: "0",
                            value: "{current.numerator1}",
                            oninput: move |evt| form.write().set(DraftField::Numerator1, evt.value()),
                        }
                        span { class: "fraction-bar" }
                        input {
                            id: "denominator1",
                            r#type: "number",
                            placeholder: "1",
                            value: "{current.denominator1}",
                            oninput: move |evt| form.write().set(DraftField::Denominator1, evt.value()),
                        }
                    }
                    select {
                        id: "operation",
                        value: "{current.operation}",
                        onchange: move |evt| form.write().set(DraftField::Operation, evt.value()),
                        option { value: "+", "+" }
                        option { value: "-", "−" }
                    }
                    div { class: "fraction-input",
                        input {
                            id: "numerator2",
                            r#type: "number",
                            placeholder: "0",
                            value: "{current.numerator2}",
                            oninput: move |evt| form.write().set(DraftField::Numerator2, evt.value()),
                        }
                        span { class: "fraction-bar" }
                        input {
                            id: "denominator2",
                            r#type: "number",
                            placeholder: "1",
                            value: "{current.denominator2}",
                            oninput: move |evt| form.write().set(DraftField::Denominator2, evt.value()),
                        }
                    }
                }
                p { class: "muted",
                    "Note: Both fractions must have the same denominator. For subtraction, the first fraction should be larger."
                }
                button {
                    id: "add-question",
                    class: "btn btn--primary",
                    r#type: "button",
                    disabled: !can_add,
                    onclick: on_add,
                    "Add Question"
                }
            }

            section { class: "custom-list",
                h2 { "Your Custom Questions ({count})" }
                if items.is_empty() {
                    p { class: "muted empty", "No questions yet. Add one above!" }
                } else {
                    ul {
                        for item in items {
                            li { key: "{item.id}", class: "custom-item",
                                span { class: "custom-label", "{item.label}" }
                                button {
                                    class: "btn btn--icon",
                                    r#type: "button",
                                    title: "Remove question",
                                    onclick: move |_| state.remove_question(item.id),
                                    "✕"
                                }
                            }
                        }
                    }
                    button {
                        id: "start-custom-quiz",
                        class: "btn btn--accent",
                        r#type: "button",
                        onclick: move |_| {
                            if state.start(true) {
                                navigator.push(Route::Home {});
                            }
                        },
                        "{start_label}"
                    }
                }
            }
        }
    }
}
