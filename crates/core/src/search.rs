//! Search input: turns keystrokes into debounced searches and history saves.
//!
//! Two independent timers run off every change of the input value:
//!
//! - the search timer; the query is searched once it has been quiet for the delay,
//!   except that clearing the input fetches recent photos immediately
//! - the save timer; the query is written to history once it has been quiet for
//!   the delay (empty queries are never saved)

use std::time::Duration;

use crate::debounce::{Debouncer, Ticket};

/// What the gallery should do about a changed input value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEffect {
    /// Input was cleared: fetch recent photos now.
    Recent,
    /// Search `query` if `ticket` is still current after the quiet period.
    Search { query: String, ticket: Ticket },
}

/// Result of [`SearchInput::on_change`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputChange {
    pub effect: InputEffect,
    /// Save `query` to history if this ticket is still current after the quiet period.
    pub save: Ticket,
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct SearchInput {
    query: String,
    search_timer: Debouncer,
    save_timer: Debouncer,
}

impl SearchInput {
    pub fn new(delay: Duration) -> Self {
        Self {
            query: String::new(),
            search_timer: Debouncer::new(delay),
            save_timer: Debouncer::new(delay),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn search_timer(&self) -> &Debouncer {
        &self.search_timer
    }

    pub fn save_timer(&self) -> &Debouncer {
        &self.save_timer
    }

    /// Feed a new input value. Returns `None` when the value did not change.
    pub fn on_change(&mut self, value: &str) -> Option<InputChange> {
        if value == self.query {
            return None;
        }
        self.query = value.to_string();

        let effect = if value.is_empty() {
            self.search_timer.cancel();
            InputEffect::Recent
        } else {
            InputEffect::Search { query: value.to_string(), ticket: self.search_timer.schedule() }
        };

        Some(InputChange { effect, save: self.save_timer.schedule(), query: value.to_string() })
    }

    /// Same as typing an empty value.
    pub fn clear(&mut self) -> Option<InputChange> {
        self.on_change("")
    }
}
