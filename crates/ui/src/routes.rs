use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{AuthoringView, QuizView, ToastHost};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizView)] Home {},
        #[route("/questions", AuthoringView)] Questions {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
            ToastHost {}
        }
    }
}
