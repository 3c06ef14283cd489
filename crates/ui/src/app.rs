use dioxus::prelude::*;
use dioxus_router::Router;
use services::QuizController;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::use_quiz_state_provider;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    use_quiz_state_provider(move || QuizController::new(clock));
    let title = ctx.window_title().to_owned();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "{title}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
