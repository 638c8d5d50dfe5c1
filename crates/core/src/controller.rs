//! Gallery controller: the loaded photo list, pagination cursor, active query, and
//! fetch lifecycle.
//!
//! A load is split in two halves so a UI can await the network call without holding
//! its state borrow:
//!
//! 1. [`GalleryState::begin_load`] marks the state as loading and returns a
//!    [`PendingLoad`] stamped with the current generation.
//! 2. [`GalleryState::apply`] merges the result, replacing the list for the first
//!    page of a session and appending for later pages.
//!
//! Every page-1 load, and every change of query, opens a new generation. Results stamped with an older generation
//! are discarded, so a slow response for a superseded query never overwrites newer
//! results.

use tracing::{debug, warn};

use crate::api::{PhotoSource, SearchRequest};
use crate::error::Result;
use crate::pagination::PageCursor;
use crate::types::{Photo, PhotoPage};

/// Fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
}

/// A request handed out by [`GalleryState::begin_load`], to be passed back to
/// [`GalleryState::apply`] with its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    pub request: SearchRequest,
    generation: u64,
    replace: bool,
}

impl PendingLoad {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What [`GalleryState::apply`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// First page of a session: the list now holds exactly this many photos.
    Replaced(usize),
    /// Later page: this many photos were appended.
    Appended(usize),
    /// The fetch failed; prior state kept.
    Failed,
    /// Result belonged to a superseded generation and was dropped.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    photos: Vec<Photo>,
    cursor: PageCursor,
    query: String,
    fetch: FetchState,
    generation: u64,
}

impl GalleryState {
    pub fn new(per_page: u32) -> Self {
        Self {
            photos: Vec::new(),
            cursor: PageCursor::new(per_page),
            query: String::new(),
            fetch: FetchState::Idle,
            generation: 0,
        }
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn page(&self) -> u32 {
        self.cursor.page()
    }

    pub fn has_more(&self) -> bool {
        self.cursor.has_more()
    }

    pub fn fetch_state(&self) -> FetchState {
        self.fetch
    }

    pub fn is_loading(&self) -> bool {
        self.fetch == FetchState::Loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    // -----------------------------------------------------------------------
    // Triggers
    // -----------------------------------------------------------------------

    /// Initial mount: recent photos, page 1.
    pub fn initial(&mut self) -> PendingLoad {
        self.begin_load("", 1)
    }

    /// Query change: forget the old cursor and fetch page 1 of the new query.
    /// An empty query means recent photos.
    pub fn set_query(&mut self, query: &str) -> PendingLoad {
        self.begin_load(query, 1)
    }

    /// Scroll reached the bottom: next page of the current query, unless a fetch is
    /// already running or everything has been loaded.
    pub fn load_more(&mut self) -> Option<PendingLoad> {
        if self.is_loading() {
            return None;
        }
        let next = self.cursor.next_page()?;
        let query = self.query.clone();
        Some(self.begin_load(&query, next))
    }

    /// Mark the state as loading and build the request for `query` at `page`.
    /// Page 1, or any change of query, opens a new generation whose first result
    /// replaces the list.
    pub fn begin_load(&mut self, query: &str, page: u32) -> PendingLoad {
        let page = page.max(1);
        let replace = page == 1 || query != self.query;
        if replace {
            self.generation += 1;
            self.query = query.to_string();
            self.cursor.reset();
        }
        self.fetch = FetchState::Loading;
        debug!(query, page, generation = self.generation, "begin load");
        PendingLoad { request: SearchRequest::new(query, page), generation: self.generation, replace }
    }

    /// Give up on a pending load without touching the list or cursor.
    pub fn abort(&mut self, pending: PendingLoad) {
        if pending.generation == self.generation {
            self.fetch = FetchState::Idle;
        }
    }

    /// Merge the result of a pending load.
    pub fn apply(&mut self, pending: PendingLoad, result: Result<PhotoPage>) -> LoadOutcome {
        if pending.generation != self.generation {
            debug!(
                query = pending.request.text.as_str(),
                page = pending.request.page,
                stale = pending.generation,
                current = self.generation,
                "dropping superseded result"
            );
            return LoadOutcome::Stale;
        }
        self.fetch = FetchState::Idle;

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                if pending.request.is_recent() {
                    warn!(page = pending.request.page, "Error fetching recent photos: {e}");
                } else {
                    warn!(
                        query = pending.request.text.as_str(),
                        page = pending.request.page,
                        "Error searching photos: {e}"
                    );
                }
                return LoadOutcome::Failed;
            }
        };

        let count = page.photo.len();
        let outcome = if pending.replace {
            self.photos = page.photo;
            LoadOutcome::Replaced(count)
        } else {
            self.photos.extend(page.photo);
            LoadOutcome::Appended(count)
        };
        self.cursor.advance_to(pending.request.page, page.total);
        debug!(
            page = pending.request.page,
            total = page.total,
            loaded = self.photos.len(),
            has_more = self.cursor.has_more(),
            "load applied"
        );
        outcome
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PER_PAGE)
    }
}

// ---------------------------------------------------------------------------
// Async driver
// ---------------------------------------------------------------------------

/// Owns a [`GalleryState`] and a [`PhotoSource`] and runs each trigger to completion.
pub struct GalleryController<S> {
    source: S,
    state: GalleryState,
}

impl<S: PhotoSource> GalleryController<S> {
    pub fn new(source: S, per_page: u32) -> Self {
        Self { source, state: GalleryState::new(per_page) }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch `page` of `query` and merge it.
    pub async fn load_page(&mut self, query: &str, page: u32) -> LoadOutcome {
        let pending = self.state.begin_load(query, page);
        self.run(pending).await
    }

    /// Like [`load_page`](Self::load_page), but a failed fetch is returned to the caller
    /// instead of only being logged. State is left as a failed load leaves it.
    pub async fn try_load_page(&mut self, query: &str, page: u32) -> Result<LoadOutcome> {
        let pending = self.state.begin_load(query, page);
        match self.source.search(&pending.request).await {
            Ok(result) => Ok(self.state.apply(pending, Ok(result))),
            Err(e) => {
                self.state.abort(pending);
                Err(e)
            }
        }
    }

    pub async fn initial(&mut self) -> LoadOutcome {
        let pending = self.state.initial();
        self.run(pending).await
    }

    pub async fn set_query(&mut self, query: &str) -> LoadOutcome {
        let pending = self.state.set_query(query);
        self.run(pending).await
    }

    /// `None` when there was nothing to load.
    pub async fn load_more(&mut self) -> Option<LoadOutcome> {
        let pending = self.state.load_more()?;
        Some(self.run(pending).await)
    }

    async fn run(&mut self, pending: PendingLoad) -> LoadOutcome {
        let result = self.source.search(&pending.request).await;
        self.state.apply(pending, result)
    }
}
