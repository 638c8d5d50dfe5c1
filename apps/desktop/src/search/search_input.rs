//! Search input component with debounced search and debounced history saves.

use dioxus::prelude::*;
use photogrid_core::config::DEFAULT_DEBOUNCE_MS;
use photogrid_core::search::{InputEffect, SearchInput as InputState};
use std::time::Duration;
use tracing::warn;

use super::suggestions::Suggestions;
use crate::fetch;
use crate::state::*;

#[component]
pub fn SearchInput() -> Element {
    let input = use_signal(|| {
        let delay = CORE
            .peek()
            .as_ref()
            .map(|core| core.config.debounce())
            .unwrap_or(Duration::from_millis(DEFAULT_DEBOUNCE_MS));
        InputState::new(delay)
    });
    let mut dropdown_open = use_signal(|| false);

    let query = input.read().query().to_string();
    let has_query = !query.is_empty();

    rsx! {
        div {
            class: if has_query { "search-field has-query" } else { "search-field" },

            div {
                class: "search-input-row",

                // Search icon
                svg {
                    class: "search-icon",
                    width: "16",
                    height: "16",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    circle { cx: "11", cy: "11", r: "8" }
                    line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                }

                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search photos...",
                    value: "{query}",
                    autofocus: true,
                    onfocus: move |_| dropdown_open.set(true),
                    onblur: move |_| dropdown_open.set(false),
                    oninput: move |e: Event<FormData>| {
                        dropdown_open.set(true);
                        apply_input(input, &e.value());
                    },
                    onkeydown: move |e: Event<KeyboardData>| {
                        if e.key() == Key::Escape {
                            dropdown_open.set(false);
                        }
                    },
                }

                // Clear button
                if has_query {
                    button {
                        class: "search-clear",
                        onclick: move |_| apply_input(input, ""),
                        "\u{00D7}"
                    }
                }
            }

            if dropdown_open() {
                Suggestions {
                    current: query.clone(),
                    on_select: move |value: String| {
                        dropdown_open.set(false);
                        apply_input(input, &value);
                    },
                }
            }
        }
    }
}

/// Feed a new value through the input state and start whatever it asks for:
/// an immediate recent fetch, a debounced search, and a debounced history save.
pub fn apply_input(mut input: Signal<InputState>, value: &str) {
    let Some(change) = input.write().on_change(value) else {
        return;
    };

    match change.effect {
        InputEffect::Recent => fetch::set_query(""),
        InputEffect::Search { query, ticket } => {
            let timer = input.peek().search_timer().clone();
            spawn(async move {
                if timer.settled(ticket).await {
                    fetch::set_query(&query);
                }
            });
        }
    }

    let timer = input.peek().save_timer().clone();
    let query = change.query;
    let ticket = change.save;
    spawn(async move {
        if timer.settled(ticket).await {
            save_query(&query);
        }
    });
}

fn save_query(query: &str) {
    if let Some(history) = HISTORY.write().as_mut() {
        if let Err(e) = history.record(query) {
            warn!(query, "Could not save search history: {e}");
        }
    }
}
