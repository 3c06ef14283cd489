mod args;
mod config;
mod telemetry;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use quiz_core::Clock;
use std::sync::Arc;
use tracing::info;
use ui::{App, UiApp, build_app_context};

use crate::args::{Args, print_usage};
use crate::config::{EnvOverrides, FileConfig, Settings};

struct DesktopApp {
    clock: Clock,
    title: String,
    hints_enabled: bool,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn window_title(&self) -> String {
        self.title.clone()
    }

    fn hints_enabled(&self) -> bool {
        self.hints_enabled
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1)).inspect_err(|_| print_usage())?;
    if args.help {
        print_usage();
        return Ok(());
    }

    let env = EnvOverrides::from_env();
    let config_path = Settings::config_path(&args, &env).map(ToOwned::to_owned);
    let file = match &config_path {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(&args, &env, &file);

    telemetry::init_tracing(&settings.log_filter, settings.log_format);
    info!(
        config = ?config_path,
        title = %settings.title,
        hints = settings.hints_enabled,
        "launching fraction quiz"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        clock: Clock::default_clock(),
        title: settings.title.clone(),
        hints_enabled: settings.hints_enabled,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(settings.title)
            .with_inner_size(LogicalSize::new(settings.width, settings.height))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
