//! Detail overlay — the selected photo at a larger size with its description.

use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn DetailOverlay() -> Element {
    let overlay = OVERLAY.read();
    if !overlay.is_open() {
        return rsx! {};
    }
    let title = overlay.title().unwrap_or_default().to_string();
    let src = overlay.image_url().unwrap_or_default();
    let description = overlay.description().unwrap_or_default().to_string();
    let alt = overlay.selected().map(|p| p.title.clone()).unwrap_or_default();

    rsx! {
        div {
            class: "modal-backdrop",
            tabindex: "-1",
            onclick: move |_| OVERLAY.write().close(),
            onkeydown: move |e: Event<KeyboardData>| {
                if e.key() == Key::Escape {
                    OVERLAY.write().close();
                }
            },
            onmounted: move |e: Event<MountedData>| async move {
                // Focus so Escape reaches the handler above.
                let _ = e.set_focus(true).await;
            },

            div {
                class: "modal",
                role: "dialog",
                onclick: move |e: Event<MouseData>| e.stop_propagation(),

                div {
                    class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| OVERLAY.write().close(),
                        "\u{00D7}"
                    }
                }

                div {
                    class: "modal-body",
                    img { class: "modal-image", src: "{src}", alt: "{alt}" }
                    if !description.is_empty() {
                        p { class: "modal-description", "{description}" }
                    }
                }
            }
        }
    }
}
