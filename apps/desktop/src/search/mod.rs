//! Search panel — input field with history suggestions.

mod search_input;
mod suggestions;

use dioxus::prelude::*;
use search_input::SearchInput;

#[component]
pub fn SearchPanel() -> Element {
    rsx! {
        div {
            class: "search-panel",
            SearchInput {}
        }
    }
}
