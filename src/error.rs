//! Error types for every phase of the collage workflow.
//!
//! Each phase owns its error enum so callers can tell where things went
//! wrong. [`CollageError`] wraps them for the workflow as a whole and knows
//! how to turn itself into the single status line shown to the user.

use reqwest::StatusCode;
use thiserror::Error;

pub const FETCH_FAILED_STATUS: &str = "Error while fetching top artists";
pub const FATAL_STATUS_PREFIX: &str = "Fatal error while creating collage: ";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    Missing(&'static str),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Last.fm reported error {code}: {message}")]
    Api { code: u32, message: String },

    #[error("request to Last.fm failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Last.fm answered with status {0}")]
    Status(StatusCode),

    #[error("unexpected Last.fm response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no top artists found for this user and time range")]
    Empty,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to download image {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode image {url}: {source}")]
    Image {
        url: String,
        #[source]
        source: image::ImageError,
    },

    #[error("none of the artists has an image")]
    NoImages,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to encode collage as PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("upload to Imgur failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid Imgur response: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Imgur response does not contain a link")]
    MissingLink,
}

#[derive(Debug, Error)]
pub enum CollageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("a collage is already being created")]
    Busy,

    #[error("{0}")]
    Generic(String),
}

impl CollageError {
    /// Human readable status line for the progress channel.
    pub fn status_message(&self) -> String {
        match self {
            CollageError::Fetch(_) => FETCH_FAILED_STATUS.to_string(),
            other => format!("{FATAL_STATUS_PREFIX}{other}"),
        }
    }
}

impl From<tokio::task::JoinError> for CollageError {
    fn from(err: tokio::task::JoinError) -> Self {
        CollageError::Generic(err.to_string())
    }
}
