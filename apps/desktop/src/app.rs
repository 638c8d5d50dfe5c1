//! Root application component — header with search, gallery, overlay, status bar.

use dioxus::prelude::*;
use photogrid_core::GalleryState;

use crate::gallery::GalleryPanel;
use crate::overlay::DetailOverlay;
use crate::search::SearchPanel;
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // Hand the pre-launch state over to the signals, once.
    use_hook(|| {
        let initial = crate::INITIAL_STATE.lock().ok().and_then(|mut s| s.take());
        if let Some(state) = initial {
            // The cursor must page by the same size the client asks for.
            let per_page = state.core.client.as_ref().map_or(state.core.config.per_page, |c| c.per_page());
            *GALLERY.write() = GalleryState::new(per_page);
            *CORE.write() = Some(state.core);
            *HISTORY.write() = Some(state.history);
        }
    });

    // Initial mount: recent photos, page 1.
    use_effect(crate::fetch::initial);

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            header {
                class: "header",
                div { class: "header-glow" }
                h1 { class: "header-title", "Gallery" }
                SearchPanel {}
            }

            GalleryPanel {}

            StatusBar {}

            DetailOverlay {}
        }
    }
}

/// Status bar at the bottom of the app
#[component]
fn StatusBar() -> Element {
    let gallery = GALLERY.read();
    let count = gallery.photos().len();
    let total = gallery.cursor().total();
    let page = gallery.page();
    let source = if gallery.query().is_empty() {
        "recent".to_string()
    } else {
        format!("\u{201C}{}\u{201D}", gallery.query())
    };
    let no_key = CORE.read().as_ref().is_some_and(|c| c.client.is_none());

    rsx! {
        div {
            class: "statusbar",
            span { class: "statusbar-source", "{source}" }
            span { class: "statusbar-sep", "|" }
            span { class: "statusbar-count", "{count} of {total} photos" }
            span { class: "statusbar-sep", "|" }
            span { class: "statusbar-page", "page {page}" }
            if gallery.is_loading() {
                span { class: "statusbar-sep", "|" }
                span { class: "statusbar-loading", "loading\u{2026}" }
            }
            if no_key {
                span { class: "statusbar-sep", "|" }
                span { class: "statusbar-warning", "no API key configured" }
            }
        }
    }
}
