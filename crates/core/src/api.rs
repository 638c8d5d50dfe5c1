//! Photo-search endpoint client.
//!
//! [`PhotoSource`] is the seam the gallery controller talks to; [`FlickrClient`] is the
//! HTTP implementation. Every request uses the same fixed filter set (safe search,
//! photos only, gallery photos, description extras) and varies only in text and page.

use std::future::Future;

use tracing::debug;

use crate::config::GalleryConfig;
use crate::error::{GalleryError, Result};
use crate::types::{PhotoPage, SearchResponse};

const SEARCH_METHOD: &str = "flickr.photos.search";

/// A single page request. An empty `text` asks for recent photos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub text: String,
    pub page: u32,
}

impl SearchRequest {
    pub fn new(text: impl Into<String>, page: u32) -> Self {
        Self { text: text.into(), page: page.max(1) }
    }

    pub fn recent(page: u32) -> Self {
        Self::new(String::new(), page)
    }

    pub fn is_recent(&self) -> bool {
        self.text.is_empty()
    }
}

/// Anything that can answer a paginated photo search.
pub trait PhotoSource {
    fn search(&self, request: &SearchRequest) -> impl Future<Output = Result<PhotoPage>>;
}

// ---------------------------------------------------------------------------
// HTTP client
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct FlickrClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    per_page: u32,
    safe_search: u8,
}

impl FlickrClient {
    /// Build a client from configuration. Fails when no API key is configured.
    pub fn new(config: &GalleryConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();

        #[allow(unused_mut)]
        let mut builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(config.timeout());
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: config.endpoint.clone(),
            api_key,
            per_page: config.per_page,
            safe_search: config.safe_search,
        })
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Query parameters for a request, in the order the endpoint documents them.
    pub fn query_params(&self, request: &SearchRequest) -> Vec<(&'static str, String)> {
        vec![
            ("api_key", self.api_key.clone()),
            ("method", SEARCH_METHOD.to_string()),
            ("safe_search", self.safe_search.to_string()),
            ("content_type", "1".to_string()),
            ("content_types", "0".to_string()),
            ("in_gallery", "true".to_string()),
            ("text", request.text.clone()),
            ("page", request.page.to_string()),
            ("format", "json".to_string()),
            ("extras", "description".to_string()),
            ("nojsoncallback", "1".to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

impl PhotoSource for FlickrClient {
    async fn search(&self, request: &SearchRequest) -> Result<PhotoPage> {
        debug!(text = request.text.as_str(), page = request.page, "photo search");

        let body = self
            .http
            .get(&self.endpoint)
            .query(&self.query_params(request))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        decode_page(&body)
    }
}

/// Decode a response body into a page, mapping `stat = "fail"` to [`GalleryError::Api`].
/// A successful response without a `photos` object is treated as an empty page.
pub fn decode_page(body: &str) -> Result<PhotoPage> {
    let response: SearchResponse = serde_json::from_str(body)?;
    if !response.is_ok() {
        return Err(GalleryError::Api {
            code: response.code.unwrap_or_default(),
            message: response.message.unwrap_or_else(|| "unknown error".to_string()),
        });
    }
    Ok(response.photos.unwrap_or_default())
}
