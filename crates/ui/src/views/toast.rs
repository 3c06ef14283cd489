use dioxus::prelude::*;

use super::QuizState;

/// Renders the current notice, if any, until it is dismissed or replaced.
#[component]
pub fn ToastHost() -> Element {
    let state = use_context::<QuizState>();
    let notice = state.notice.read().clone();

    rsx! {
        if let Some(notice) = notice {
            div {
                class: if notice.is_error() { "toast toast--error" } else { "toast" },
                role: "status",
                div { class: "toast-body",
                    strong { class: "toast-title", "{notice.title}" }
                    p { class: "toast-message", "{notice.message}" }
                }
                button {
                    class: "toast-close",
                    r#type: "button",
                    onclick: move |_| state.dismiss(),
                    "✕"
                }
            }
        }
    }
}
