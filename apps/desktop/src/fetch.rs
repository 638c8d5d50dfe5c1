//! Runs gallery loads: begin on the signal, await the client, apply the result.

use dioxus::prelude::*;
use photogrid_core::controller::PendingLoad;
use photogrid_core::{GalleryError, PhotoSource};

use crate::state::*;

/// Await `pending` on the shared client and merge the result into [`GALLERY`].
fn run(pending: PendingLoad) {
    let client = CORE.peek().as_ref().and_then(|core| core.client.clone());
    spawn(async move {
        let result = match client {
            Some(client) => client.search(&pending.request).await,
            None => Err(GalleryError::MissingApiKey),
        };
        GALLERY.write().apply(pending, result);
    });
}

/// Recent photos, page 1.
pub fn initial() {
    let pending = GALLERY.write().initial();
    run(pending);
}

/// New query (empty = recent): back to the top, page 1.
pub fn set_query(query: &str) {
    let pending = GALLERY.write().set_query(query);
    scroll_to_top();
    run(pending);
}

/// Next page of the current query, if any and nothing is in flight.
pub fn load_more() {
    let pending = GALLERY.write().load_more();
    if let Some(pending) = pending {
        run(pending);
    }
}

fn scroll_to_top() {
    let _ = document::eval("document.querySelector('.gallery')?.scrollTo(0, 0);");
}
