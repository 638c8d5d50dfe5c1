//! Test harness for gallery integration tests.
//!
//! [`ScriptedSource`] answers searches with generated photos and records every
//! request. [`SearchHarness`] wires a [`SearchInput`] to a shared [`GalleryState`] and
//! [`QueryHistory`] the way a front end does, spawning the debounced tasks on a
//! `LocalSet`.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use photogrid_core::api::{PhotoSource, SearchRequest};
use photogrid_core::controller::GalleryState;
use photogrid_core::error::{GalleryError, Result};
use photogrid_core::history::{MemoryStore, QueryHistory};
use photogrid_core::search::{InputEffect, SearchInput};
use photogrid_core::types::{Photo, PhotoPage};
use tokio::task::JoinHandle;

pub const PER_PAGE: u32 = 40;

// ---------------------------------------------------------------------------
// Scripted photo source
// ---------------------------------------------------------------------------

pub struct ScriptedSource {
    requests: Mutex<Vec<SearchRequest>>,
    total: u64,
    per_page: u32,
    latency: HashMap<String, Duration>,
    failing_pages: HashSet<u32>,
}

impl ScriptedSource {
    /// Every query reports `total` photos, served `per_page` at a time.
    pub fn new(total: u64, per_page: u32) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            total,
            per_page,
            latency: HashMap::new(),
            failing_pages: HashSet::new(),
        }
    }

    /// Delay responses for `text` by `delay`.
    pub fn with_latency(mut self, text: &str, delay: Duration) -> Self {
        self.latency.insert(text.to_string(), delay);
        self
    }

    /// Fail every request for `page`.
    pub fn failing_on_page(mut self, page: u32) -> Self {
        self.failing_pages.insert(page);
        self
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Photo id generated for the `index`-th photo of `page` of `text`.
pub fn photo_id(text: &str, page: u32, index: usize) -> String {
    let label = if text.is_empty() { "recent" } else { text };
    format!("{label}-{page}-{index}")
}

impl PhotoSource for ScriptedSource {
    async fn search(&self, request: &SearchRequest) -> Result<PhotoPage> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(delay) = self.latency.get(&request.text) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_pages.contains(&request.page) {
            return Err(GalleryError::Api { code: 105, message: "Service currently unavailable".into() });
        }

        let already = u64::from(request.page - 1) * u64::from(self.per_page);
        let count = self.total.saturating_sub(already).min(u64::from(self.per_page)) as usize;
        let photo = (0..count)
            .map(|i| Photo {
                id: photo_id(&request.text, request.page, i),
                owner: None,
                secret: "secret".into(),
                server: "65535".into(),
                farm: 66,
                title: format!("photo {i}"),
                description: None,
            })
            .collect();

        Ok(PhotoPage {
            page: u64::from(request.page),
            pages: self.total.div_ceil(u64::from(self.per_page)),
            perpage: u64::from(self.per_page),
            total: self.total,
            photo,
        })
    }
}

// ---------------------------------------------------------------------------
// Search input wiring
// ---------------------------------------------------------------------------

pub struct SearchHarness {
    pub input: SearchInput,
    pub gallery: Rc<RefCell<GalleryState>>,
    pub history: Rc<RefCell<QueryHistory<MemoryStore>>>,
    pub source: Rc<ScriptedSource>,
    tasks: Vec<JoinHandle<()>>,
}

impl SearchHarness {
    pub fn new(source: ScriptedSource) -> Self {
        Self {
            input: SearchInput::new(Duration::from_millis(800)),
            gallery: Rc::new(RefCell::new(GalleryState::new(PER_PAGE))),
            history: Rc::new(RefCell::new(QueryHistory::load(MemoryStore::new(), "searchQueries"))),
            source: Rc::new(source),
            tasks: Vec::new(),
        }
    }

    /// Must be called from inside a `LocalSet`.
    pub fn type_text(&mut self, value: &str) {
        let Some(change) = self.input.on_change(value) else {
            return;
        };

        match change.effect {
            InputEffect::Recent => {
                let pending = self.gallery.borrow_mut().set_query("");
                self.tasks.push(spawn_fetch(&self.gallery, &self.source, pending));
            }
            InputEffect::Search { query, ticket } => {
                let timer = self.input.search_timer().clone();
                let gallery = Rc::clone(&self.gallery);
                let source = Rc::clone(&self.source);
                self.tasks.push(tokio::task::spawn_local(async move {
                    if timer.settled(ticket).await {
                        let pending = gallery.borrow_mut().set_query(&query);
                        let result = source.search(&pending.request).await;
                        gallery.borrow_mut().apply(pending, result);
                    }
                }));
            }
        }

        let timer = self.input.save_timer().clone();
        let history = Rc::clone(&self.history);
        let query = change.query;
        self.tasks.push(tokio::task::spawn_local(async move {
            if timer.settled(change.save).await {
                history.borrow_mut().record(&query).unwrap();
            }
        }));
    }

    /// Scroll-to-bottom.
    pub fn scroll_to_bottom(&mut self) {
        let pending = self.gallery.borrow_mut().load_more();
        if let Some(pending) = pending {
            self.tasks.push(spawn_fetch(&self.gallery, &self.source, pending));
        }
    }

    /// Wait for every spawned task to finish.
    pub async fn settle(&mut self) {
        for task in self.tasks.drain(..) {
            task.await.unwrap();
        }
    }

    pub fn photo_ids(&self) -> Vec<String> {
        self.gallery.borrow().photos().iter().map(|p| p.id.clone()).collect()
    }
}

fn spawn_fetch(
    gallery: &Rc<RefCell<GalleryState>>,
    source: &Rc<ScriptedSource>,
    pending: photogrid_core::controller::PendingLoad,
) -> JoinHandle<()> {
    let gallery = Rc::clone(gallery);
    let source = Rc::clone(source);
    tokio::task::spawn_local(async move {
        let result = source.search(&pending.request).await;
        gallery.borrow_mut().apply(pending, result);
    })
}
