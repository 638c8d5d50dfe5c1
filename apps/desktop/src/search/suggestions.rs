//! Autocomplete dropdown listing saved searches, with a button to clear them.

use dioxus::prelude::*;
use tracing::warn;

use crate::state::*;

#[component]
pub fn Suggestions(current: String, on_select: EventHandler<String>) -> Element {
    let history = HISTORY.read();
    let options: Vec<String> = history
        .as_ref()
        .map(|h| h.suggestions(&current).into_iter().map(str::to_string).collect())
        .unwrap_or_default();
    let has_history = history.as_ref().is_some_and(|h| !h.is_empty());

    if !has_history {
        return rsx! {};
    }

    rsx! {
        div {
            class: "suggestions",
            // Keep focus on the input while clicking inside the dropdown.
            onmousedown: move |e: Event<MouseData>| e.prevent_default(),

            if options.is_empty() {
                div { class: "suggestion-empty", "No matching searches" }
            }
            for option in options.iter() {
                div {
                    key: "{option}",
                    class: if *option == current { "suggestion active" } else { "suggestion" },
                    onclick: {
                        let value = option.clone();
                        move |_| on_select.call(value.clone())
                    },
                    "{option}"
                }
            }

            div { class: "suggestions-divider" }
            div {
                class: "suggestions-footer",
                button {
                    class: "suggestions-clear",
                    onclick: move |_| clear_history(),
                    "Clear Search History"
                }
            }
        }
    }
}

fn clear_history() {
    if let Some(history) = HISTORY.write().as_mut() {
        if let Err(e) = history.clear() {
            warn!("Could not clear search history: {e}");
        }
    }
}
