//! One thumbnail in the grid; clicking it opens the detail overlay.

use dioxus::prelude::*;
use photogrid_core::types::{ImageSize, Photo};

use crate::state::*;

#[component]
pub fn PhotoTile(photo: Photo) -> Element {
    let src = photo.image_url(ImageSize::GRID);
    let title = photo.title.clone();

    rsx! {
        div {
            class: "photo-tile",
            title: "{title}",
            onclick: move |_| OVERLAY.write().open(photo.clone()),
            img {
                class: "photo-image",
                src: "{src}",
                alt: "{title}",
                loading: "lazy",
            }
        }
    }
}
