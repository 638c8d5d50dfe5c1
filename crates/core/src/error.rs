//! Error type shared by the client, stores, and configuration loader.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GalleryError>;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned an error (code {code}): {message}")]
    Api { code: i64, message: String },

    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("No API key configured (set PHOTOGRID_API_KEY or api_key in config.toml)")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<std::io::Error> for GalleryError {
    fn from(err: std::io::Error) -> Self {
        GalleryError::Storage(err.to_string())
    }
}
