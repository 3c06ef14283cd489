use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

use super::QuizState;

const FEATURES: [&str; 4] = [
    "Visual Learning",
    "Interactive Exercises",
    "Instant Feedback",
    "Hints Available",
];

#[component]
pub fn StartView() -> Element {
    let state = use_context::<QuizState>();
    let navigator = use_navigator();
    let custom_count = state.controller.read().custom_questions().len();

    rsx! {
        div { class: "page start",
            div { class: "start-card",
                h1 { "Math Learning Game" }
                p { class: "lead", "Learn fractions through interactive games and activities!" }
                p { class: "muted", "Perfect for grades 4-7 students" }

                section { class: "topic",
                    h2 { "Today's Topic: Fractions" }
                    p {
                        "You'll learn how to add and subtract fractions with visual aids and interactive quizzes."
                    }
                    ul { class: "features",
                        for feature in FEATURES.iter() {
                            li { "✓ {feature}" }
                        }
                    }
                }

                div { class: "start-actions",
                    button {
                        id: "start-default",
                        class: "btn btn--primary",
                        r#type: "button",
                        onclick: move |_| {
                            state.start(false);
                        },
                        "Start with Default Questions"
                    }
                    button {
                        id: "open-authoring",
                        class: "btn btn--outline",
                        r#type: "button",
                        onclick: move |_| {
                            navigator.push(Route::Questions {});
                        },
                        "Create My Own Questions ✏️"
                    }
                }

                if custom_count > 0 {
                    button {
                        id: "start-custom",
                        class: "btn btn--accent",
                        r#type: "button",
                        onclick: move |_| {
                            state.start(true);
                        },
                        "Start with My Questions ({custom_count})"
                    }
                }
            }
        }
    }
}
