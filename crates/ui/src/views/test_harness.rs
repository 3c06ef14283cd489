use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::time::fixed_clock;
use services::{Clock, QuizController};

use crate::context::{UiApp, build_app_context};
use crate::views::{AuthoringView, QuizState, QuizView, ToastHost};

#[derive(Clone)]
struct TestApp {
    hints_enabled: bool,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn window_title(&self) -> String {
        "Fractions (test)".to_string()
    }

    fn hints_enabled(&self) -> bool {
        self.hints_enabled
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Quiz,
    Authoring,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    controller: QuizController,
    notice: Option<services::Notice>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| QuizState {
        controller: Signal::new(props.controller.clone()),
        notice: Signal::new(props.notice.clone()),
    });
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let page = match view {
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Authoring => rsx! { AuthoringView {} },
    };
    rsx! {
        {page}
        ToastHost {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub struct HarnessBuilder {
    view: ViewKind,
    controller: QuizController,
    hints_enabled: bool,
    notice: Option<services::Notice>,
}

impl HarnessBuilder {
    pub fn new(view: ViewKind) -> Self {
        Self {
            view,
            controller: QuizController::new(fixed_clock()),
            hints_enabled: true,
            notice: None,
        }
    }

    pub fn controller(mut self, controller: QuizController) -> Self {
        self.controller = controller;
        self
    }

    pub fn hints_enabled(mut self, enabled: bool) -> Self {
        self.hints_enabled = enabled;
        self
    }

    pub fn notice(mut self, notice: services::Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    pub fn build(self) -> ViewHarness {
        let dom = VirtualDom::new_with_props(
            ViewRouterHarness,
            ViewHarnessProps {
                app: Arc::new(TestApp {
                    hints_enabled: self.hints_enabled,
                }),
                view: self.view,
                controller: self.controller,
                notice: self.notice,
            },
        );
        ViewHarness { dom }
    }

    /// Build, rebuild and render to HTML in one go.
    pub fn render(self) -> String {
        let mut harness = self.build();
        harness.rebuild();
        harness.render()
    }
}
