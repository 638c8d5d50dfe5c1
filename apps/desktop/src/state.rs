//! Global application state using Dioxus signals.

use photogrid_core::controller::GalleryState;
use photogrid_core::history::QueryHistory;
use photogrid_core::overlay::Overlay;
use photogrid_core::{FlickrClient, GalleryConfig};
use dioxus::prelude::*;
use tracing::warn;

#[cfg(feature = "web")]
pub type HistoryStore = photogrid_core::history::BrowserStore;
#[cfg(not(feature = "web"))]
pub type HistoryStore = photogrid_core::history::FileStore;

/// Configuration and client, built once before launch.
pub struct Core {
    pub config: GalleryConfig,
    /// `None` when no API key is configured; every fetch then fails and is logged.
    pub client: Option<FlickrClient>,
}

/// Everything prepared before Dioxus launches, consumed on first render.
pub struct AppState {
    pub core: Core,
    pub history: QueryHistory<HistoryStore>,
}

impl AppState {
    pub fn load() -> Self {
        let config = GalleryConfig::load();
        let client = match FlickrClient::new(&config) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!("{e}");
                None
            }
        };
        let history = QueryHistory::load(history_store(), config.history_key.clone());
        AppState { core: Core { config, client }, history }
    }
}

#[cfg(feature = "web")]
fn history_store() -> HistoryStore {
    photogrid_core::history::BrowserStore
}

#[cfg(not(feature = "web"))]
fn history_store() -> HistoryStore {
    photogrid_core::history::FileStore::in_data_dir()
        .unwrap_or_else(|| photogrid_core::history::FileStore::new("photogrid-storage.json"))
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Config and client — set once at startup
pub static CORE: GlobalSignal<Option<Core>> = Signal::global(|| None);

/// Loaded photos, cursor, active query, fetch lifecycle
pub static GALLERY: GlobalSignal<GalleryState> = Signal::global(GalleryState::default);

/// Photo shown in the detail overlay
pub static OVERLAY: GlobalSignal<Overlay> = Signal::global(Overlay::default);

/// Saved searches offered as suggestions
pub static HISTORY: GlobalSignal<Option<QueryHistory<HistoryStore>>> = Signal::global(|| None);
