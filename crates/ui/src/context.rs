use std::sync::Arc;

use services::Clock;

/// Settings the application composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;
    fn window_title(&self) -> String;
    fn hints_enabled(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    window_title: Arc<str>,
    hints_enabled: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            window_title: Arc::from(app.window_title()),
            hints_enabled: app.hints_enabled(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    #[must_use]
    pub fn hints_enabled(&self) -> bool {
        self.hints_enabled
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
