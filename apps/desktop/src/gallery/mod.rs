//! Gallery panel — infinite-scrolling thumbnail grid.

mod tile;

use dioxus::prelude::*;

use crate::fetch;
use crate::state::*;
use tile::PhotoTile;

/// Start loading the next page when the viewport is this close to the bottom.
const LOAD_THRESHOLD_PX: f64 = 300.0;

/// True once the visible area reaches within [`LOAD_THRESHOLD_PX`] of the content's end.
fn near_bottom(scroll_top: f64, client_height: f64, scroll_height: f64) -> bool {
    scroll_top + client_height + LOAD_THRESHOLD_PX >= scroll_height
}

#[component]
pub fn GalleryPanel() -> Element {
    let gallery = GALLERY.read();
    let photos = gallery.photos();

    rsx! {
        div {
            class: "gallery",
            onscroll: move |e: Event<ScrollData>| {
                let top = e.scroll_top() as f64;
                let client = e.client_height() as f64;
                let height = e.scroll_height() as f64;
                if near_bottom(top, client, height) {
                    fetch::load_more();
                }
            },

            div {
                class: "photo-grid",
                for (i, photo) in photos.iter().enumerate() {
                    PhotoTile { key: "{i}-{photo.id}", photo: photo.clone() }
                }
            }

            if gallery.is_loading() {
                div {
                    class: "gallery-loading",
                    span { class: "spinner" }
                    span { "Loading photos\u{2026}" }
                }
            } else if gallery.has_more() {
                // Fallback when the first page does not fill the viewport.
                button {
                    class: "gallery-more",
                    onclick: move |_| fetch::load_more(),
                    "Load more"
                }
            } else if photos.is_empty() {
                div { class: "gallery-empty", "No photos found." }
            } else {
                p { class: "gallery-end", "No more photos to load." }
            }
        }
    }
}
