//! Runtime configuration: defaults, `config.toml` overrides, and environment overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{GalleryError, Result};

/// Default photo-search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.flickr.com/services/rest/";
/// Results requested per page.
pub const DEFAULT_PER_PAGE: u32 = 40;
/// Quiet period before a typed query is searched and before it is saved to history.
pub const DEFAULT_DEBOUNCE_MS: u64 = 800;
/// Key under which the query history is persisted.
pub const DEFAULT_HISTORY_KEY: &str = "searchQueries";

const ENV_API_KEY: &str = "PHOTOGRID_API_KEY";
const ENV_ENDPOINT: &str = "PHOTOGRID_ENDPOINT";

// ---------------------------------------------------------------------------
// Cross-platform path helpers
// ---------------------------------------------------------------------------

const APP_DIR: &str = "photogrid";

/// `HOME`, falling back to `USERPROFILE` on Windows.
pub fn home_dir() -> Option<PathBuf> {
    env_path(&["HOME", "USERPROFILE"])
}

/// Where `config.toml` lives: `~/.photogrid`, or `%APPDATA%\photogrid` on Windows.
pub fn config_dir() -> Option<PathBuf> {
    if cfg!(windows) {
        env_path(&["APPDATA"]).map(|p| p.join(APP_DIR))
    } else {
        home_dir().map(|h| h.join(format!(".{APP_DIR}")))
    }
}

/// Where persisted state lives: `~/.local/share/photogrid`, or `%LOCALAPPDATA%\photogrid`.
pub fn data_dir() -> Option<PathBuf> {
    if cfg!(windows) {
        env_path(&["LOCALAPPDATA", "APPDATA"]).map(|p| p.join(APP_DIR))
    } else {
        home_dir().map(|h| h.join(".local").join("share").join(APP_DIR))
    }
}

/// First of `vars` that is set.
fn env_path(vars: &[&str]) -> Option<PathBuf> {
    vars.iter().find_map(|v| std::env::var_os(v)).map(PathBuf::from)
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    pub api_key: String,
    pub endpoint: String,
    pub per_page: u32,
    /// 1 = safe, 2 = moderate, 3 = restricted.
    pub safe_search: u8,
    pub debounce_ms: u64,
    pub timeout_secs: u64,
    pub history_key: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            per_page: DEFAULT_PER_PAGE,
            safe_search: 1,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            timeout_secs: 20,
            history_key: DEFAULT_HISTORY_KEY.to_string(),
        }
    }
}

impl GalleryConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Fail early when no API key was configured anywhere.
    pub fn require_api_key(&self) -> Result<&str> {
        if self.api_key.trim().is_empty() {
            Err(GalleryError::MissingApiKey)
        } else {
            Ok(&self.api_key)
        }
    }

    /// Default location of `config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        config_dir().map(|d| d.join("config.toml"))
    }

    /// Load from the default location (if present) and apply environment overrides.
    pub fn load() -> Self {
        let mut config = match Self::default_path() {
            Some(path) => Self::from_file(&path),
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Load from an explicit file and apply environment overrides.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Self::from_file(path);
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Defaults merged with the contents of `path`. A missing or unparsable file yields defaults.
    pub fn from_file(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        debug!(path = %path.display(), "Loading config");
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), "{e}");
                Self::default()
            }),
            Err(e) => {
                warn!(path = %path.display(), "Could not read config: {e}");
                Self::default()
            }
        }
    }

    /// Parse a TOML document over the defaults. Unknown keys warn with a typo suggestion.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table = content
            .parse::<toml::Table>()
            .map_err(|e| GalleryError::Config(format!("Failed to parse config.toml: {e}")))?;

        warn_unknown_keys(&table);

        let mut config = Self::default();

        if let Some(v) = table.get("api_key").and_then(|v| v.as_str()) {
            config.api_key = v.to_string();
        }
        if let Some(v) = table.get("endpoint").and_then(|v| v.as_str()) {
            config.endpoint = v.to_string();
        }
        if let Some(v) = table.get("per_page").and_then(|v| v.as_integer()) {
            let v = positive(v, "per_page")?;
            config.per_page = u32::try_from(v)
                .map_err(|_| GalleryError::Config(format!("per_page is too large (got {v})")))?;
        }
        if let Some(v) = table.get("safe_search").and_then(|v| v.as_integer()) {
            if !(1..=3).contains(&v) {
                return Err(GalleryError::Config(format!("safe_search must be 1, 2 or 3 (got {v})")));
            }
            config.safe_search = v as u8;
        }
        if let Some(v) = table.get("debounce_ms").and_then(|v| v.as_integer()) {
            config.debounce_ms = non_negative(v, "debounce_ms")?;
        }
        if let Some(v) = table.get("timeout_secs").and_then(|v| v.as_integer()) {
            config.timeout_secs = positive(v, "timeout_secs")?;
        }
        if let Some(v) = table.get("history_key").and_then(|v| v.as_str()) {
            config.history_key = v.to_string();
        }

        Ok(config)
    }

    /// Apply `PHOTOGRID_*` overrides using the given lookup.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.is_empty()) {
            self.api_key = key;
        }
        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|v| !v.is_empty()) {
            self.endpoint = endpoint;
        }
    }
}

fn positive(v: i64, key: &str) -> Result<u64> {
    if v <= 0 {
        return Err(GalleryError::Config(format!("{key} must be positive (got {v})")));
    }
    Ok(v as u64)
}

fn non_negative(v: i64, key: &str) -> Result<u64> {
    if v < 0 {
        return Err(GalleryError::Config(format!("{key} must not be negative (got {v})")));
    }
    Ok(v as u64)
}

// ---------------------------------------------------------------------------
// Key validation
// ---------------------------------------------------------------------------

/// Known keys in `config.toml`.
const KNOWN_CONFIG_KEYS: &[&str] =
    &["api_key", "endpoint", "per_page", "safe_search", "debounce_ms", "timeout_secs", "history_key"];

fn warn_unknown_keys(table: &toml::Table) {
    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        match suggest_key(key) {
            Some(suggestion) => warn!(
                key = key.as_str(),
                suggestion,
                "Unknown key in config.toml — did you mean '{suggestion}'?"
            ),
            None => warn!(
                key = key.as_str(),
                "Unknown key in config.toml (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            ),
        }
    }
}

/// Closest known key within an edit distance of 3.
fn suggest_key(key: &str) -> Option<&'static str> {
    KNOWN_CONFIG_KEYS
        .iter()
        .copied()
        .min_by_key(|k| edit_distance(key, k))
        .filter(|k| edit_distance(key, k) <= 3)
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    // row[j] = distance between the prefix of `a` seen so far and b[..j]
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb { diag } else { 1 + diag.min(above).min(row[j]) };
            diag = above;
        }
    }
    row[b.len()]
}
