//! Photo records and search-response envelopes as returned by the photo-search API,
//! plus image URL construction.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Title shown when a photo has an empty title.
pub const UNTITLED: &str = "Untitled";

// ---------------------------------------------------------------------------
// Image sizes
// ---------------------------------------------------------------------------

/// Size suffix appended to a static image URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageSize {
    /// 75x75 square crop.
    Square,
    /// 150x150 square crop.
    LargeSquare,
    /// 100 px on the longest side.
    Thumbnail,
    /// 240 px on the longest side.
    Small,
    /// 400 px on the longest side — used for grid thumbnails.
    #[default]
    Small400,
    /// 640 px on the longest side — used by the detail overlay.
    Medium640,
    /// 800 px on the longest side.
    Medium800,
    /// 1024 px on the longest side.
    Large,
}

impl ImageSize {
    /// The single-letter suffix used in the static URL.
    pub fn suffix(self) -> char {
        match self {
            ImageSize::Square => 's',
            ImageSize::LargeSquare => 'q',
            ImageSize::Thumbnail => 't',
            ImageSize::Small => 'm',
            ImageSize::Small400 => 'w',
            ImageSize::Medium640 => 'z',
            ImageSize::Medium800 => 'c',
            ImageSize::Large => 'b',
        }
    }

    /// Parse a suffix letter back into a size.
    pub fn from_suffix(c: char) -> Option<Self> {
        Some(match c {
            's' => ImageSize::Square,
            'q' => ImageSize::LargeSquare,
            't' => ImageSize::Thumbnail,
            'm' => ImageSize::Small,
            'w' => ImageSize::Small400,
            'z' => ImageSize::Medium640,
            'c' => ImageSize::Medium800,
            'b' => ImageSize::Large,
            _ => return None,
        })
    }

    /// Grid thumbnails.
    pub const GRID: ImageSize = ImageSize::Small400;
    /// Detail overlay rendering.
    pub const DETAIL: ImageSize = ImageSize::Medium640;
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

// ---------------------------------------------------------------------------
// Photo record
// ---------------------------------------------------------------------------

/// Wrapped text field, serialized by the API as `{"_content": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(rename = "_content", default)]
    pub content: String,
}

/// A single photo as returned by the search endpoint. Never mutated after decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    #[serde(default)]
    pub owner: Option<String>,
    pub secret: String,
    pub server: String,
    #[serde(deserialize_with = "number_or_string")]
    pub farm: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<Content>,
}

impl Photo {
    /// Static image URL for this photo at the given size.
    pub fn image_url(&self, size: ImageSize) -> String {
        image_url(&self.id, &self.server, self.farm, &self.secret, size)
    }

    /// Title for display, falling back to [`UNTITLED`] when empty.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// Description text, empty when the record carries none.
    pub fn description_text(&self) -> &str {
        self.description.as_ref().map(|d| d.content.as_str()).unwrap_or("")
    }
}

/// Compose a static image URL from its parts.
pub fn image_url(id: &str, server: &str, farm: u64, secret: &str, size: ImageSize) -> String {
    format!("https://farm{farm}.staticflickr.com/{server}/{id}_{secret}_{}.jpg", size.suffix())
}

// ---------------------------------------------------------------------------
// Response envelopes
// ---------------------------------------------------------------------------

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PhotoPage {
    #[serde(default = "first_page", deserialize_with = "number_or_string")]
    pub page: u64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub pages: u64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub perpage: u64,
    #[serde(default, deserialize_with = "number_or_string")]
    pub total: u64,
    #[serde(default)]
    pub photo: Vec<Photo>,
}

fn first_page() -> u64 {
    1
}

/// Top-level response. `stat` is `"ok"` or `"fail"`; failures carry `code`/`message`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub stat: String,
    #[serde(default)]
    pub photos: Option<PhotoPage>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SearchResponse {
    pub fn is_ok(&self) -> bool {
        self.stat != "fail"
    }
}

/// The API has returned counts both as JSON numbers and as numeric strings.
fn number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Str(s) if s.trim().is_empty() => Ok(0),
        Raw::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Photo {
        Photo {
            id: "53012345678".into(),
            owner: Some("12345@N00".into()),
            secret: "abc123def4".into(),
            server: "65535".into(),
            farm: 66,
            title: "Harbour at dusk".into(),
            description: Some(Content { content: "Long exposure.".into() }),
        }
    }

    #[test]
    fn builds_thumbnail_and_detail_urls() {
        let p = sample();
        assert_eq!(
            p.image_url(ImageSize::GRID),
            "https://farm66.staticflickr.com/65535/53012345678_abc123def4_w.jpg"
        );
        assert_eq!(
            p.image_url(ImageSize::DETAIL),
            "https://farm66.staticflickr.com/65535/53012345678_abc123def4_z.jpg"
        );
    }

    #[test]
    fn empty_title_falls_back_to_untitled() {
        let mut p = sample();
        assert_eq!(p.display_title(), "Harbour at dusk");
        p.title.clear();
        assert_eq!(p.display_title(), "Untitled");
    }

    #[test]
    fn decodes_counts_given_as_strings() {
        let json = r#"{
            "stat": "ok",
            "photos": {
                "page": 2, "pages": "17", "perpage": 40, "total": "668",
                "photo": [{
                    "id": "1", "owner": "o", "secret": "s", "server": "7",
                    "farm": 8, "title": "", "ispublic": 1,
                    "description": {"_content": "hello"}
                }]
            }
        }"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        let page = resp.photos.unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.pages, 17);
        assert_eq!(page.total, 668);
        assert_eq!(page.photo[0].description_text(), "hello");
    }

    #[test]
    fn missing_photo_list_defaults_to_empty() {
        let resp: SearchResponse =
            serde_json::from_str(r#"{"stat":"ok","photos":{"page":1,"total":0}}"#).unwrap();
        assert!(resp.photos.unwrap().photo.is_empty());
    }

    #[test]
    fn missing_description_is_empty_text() {
        let mut p = sample();
        p.description = None;
        assert_eq!(p.description_text(), "");
    }

    #[test]
    fn suffix_round_trips_through_parse() {
        assert_eq!(ImageSize::from_suffix('z'), Some(ImageSize::DETAIL));
        assert_eq!(ImageSize::from_suffix('x'), None);
    }
}
