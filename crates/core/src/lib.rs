//! PhotoGrid core — everything the gallery front ends share.
//!
//! # Modules
//!
//! - [`types`] — Photo records, response envelopes, image URLs
//! - [`api`] — Photo-search endpoint client behind the [`api::PhotoSource`] seam
//! - [`pagination`] — Page cursor and `has_more` computation
//! - [`controller`] — Gallery state: replace/append merging, stale-result guard
//! - [`debounce`] — Cancellable delayed task
//! - [`search`] — Search input: debounced searches and history saves
//! - [`history`] — Query history over a pluggable key-value store
//! - [`overlay`] — Detail overlay state
//! - [`config`] — `config.toml` + environment configuration
//! - [`error`] — Shared error type

pub mod api;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod history;
pub mod overlay;
pub mod pagination;
pub mod search;
pub mod types;

pub use api::{FlickrClient, PhotoSource, SearchRequest};
pub use config::GalleryConfig;
pub use controller::{GalleryController, GalleryState, LoadOutcome, PendingLoad};
pub use error::{GalleryError, Result};
pub use history::{FileStore, KeyValueStore, MemoryStore, QueryHistory};
pub use overlay::Overlay;
pub use search::{InputChange, InputEffect, SearchInput};
pub use types::{ImageSize, Photo, PhotoPage};
