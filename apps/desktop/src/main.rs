//! PhotoGrid Desktop — Dioxus-powered photo gallery.

use std::sync::Mutex;

use dioxus::prelude::*;

mod app;
mod fetch;
mod gallery;
mod overlay;
mod search;
mod state;

use app::App;
use state::AppState;

/// Config, client and saved searches, built before the Dioxus runtime exists.
/// `App` takes it on first render and moves it into the global signals.
pub static INITIAL_STATE: Mutex<Option<AppState>> = Mutex::new(None);

fn main() {
    init_logging();
    // Signals can't be written until the runtime is up.
    if let Ok(mut slot) = INITIAL_STATE.lock() {
        *slot = Some(AppState::load());
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((18, 18, 20, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("PhotoGrid")
                            .with_inner_size(LogicalSize::new(1280.0, 900.0))
                            .with_min_inner_size(LogicalSize::new(480.0, 500.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}

/// `RUST_LOG` wins; otherwise info for the photogrid crates.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("photogrid=info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
