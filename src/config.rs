//! Configuration management for the collage tool.
//!
//! This module handles loading configuration values from environment
//! variables and `.env` files. Credentials for Last.fm and Imgur are never
//! compiled into the binary; they are read once into a [`Config`] and handed
//! to the clients that need them.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::error::ConfigError;

pub const LASTFM_API_KEY: &str = "LASTFM_API_KEY";
pub const LASTFM_API_URL: &str = "LASTFM_API_URL";
pub const IMGUR_CLIENT_ID: &str = "IMGUR_CLIENT_ID";
pub const IMGUR_UPLOAD_URL: &str = "IMGUR_UPLOAD_URL";
pub const COLLAGE_FONT_PATH: &str = "COLLAGE_FONT_PATH";

pub const DEFAULT_LASTFM_API_URL: &str = "https://ws.audioscrobbler.com/2.0/";
pub const DEFAULT_IMGUR_UPLOAD_URL: &str = "https://api.imgur.com/3/upload.xml";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist and loads variables
/// from `collagecli/.env` below the platform-specific local data directory:
/// - Linux: `~/.local/share/collagecli/.env`
/// - macOS: `~/Library/Application Support/collagecli/.env`
/// - Windows: `%LOCALAPPDATA%/collagecli/.env`
///
/// A missing `.env` file is fine, the process environment is used as is.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no .env file, using process environment");
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())?;
    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("collagecli/.env");
    path
}

/// Runtime configuration shared by the Last.fm and Imgur clients.
#[derive(Debug, Clone)]
pub struct Config {
    /// Last.fm API key used for `user.gettopartists`.
    pub lastfm_api_key: String,
    /// Base URL of the Last.fm REST endpoint.
    pub lastfm_api_url: String,
    /// Imgur application client id, sent as `Authorization: Client-ID <id>`.
    pub imgur_client_id: String,
    /// Imgur upload endpoint returning an XML document.
    pub imgur_upload_url: String,
    /// Font used for tile labels. Falls back to well known system fonts.
    pub font_path: Option<PathBuf>,
}

impl Config {
    pub fn new(lastfm_api_key: impl Into<String>, imgur_client_id: impl Into<String>) -> Self {
        Self {
            lastfm_api_key: lastfm_api_key.into(),
            lastfm_api_url: DEFAULT_LASTFM_API_URL.to_string(),
            imgur_client_id: imgur_client_id.into(),
            imgur_upload_url: DEFAULT_IMGUR_UPLOAD_URL.to_string(),
            font_path: None,
        }
    }

    /// Builds the configuration from the process environment.
    ///
    /// `LASTFM_API_KEY` and `IMGUR_CLIENT_ID` are required. The endpoint URLs
    /// default to the public services and `COLLAGE_FONT_PATH` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first required variable
    /// that is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            lastfm_api_key: required(LASTFM_API_KEY)?,
            lastfm_api_url: optional(LASTFM_API_URL)
                .unwrap_or_else(|| DEFAULT_LASTFM_API_URL.to_string()),
            imgur_client_id: required(IMGUR_CLIENT_ID)?,
            imgur_upload_url: optional(IMGUR_UPLOAD_URL)
                .unwrap_or_else(|| DEFAULT_IMGUR_UPLOAD_URL.to_string()),
            font_path: optional(COLLAGE_FONT_PATH).map(PathBuf::from),
        })
    }

    pub fn with_lastfm_api_url(mut self, url: impl Into<String>) -> Self {
        self.lastfm_api_url = url.into();
        self
    }

    pub fn with_imgur_upload_url(mut self, url: impl Into<String>) -> Self {
        self.imgur_upload_url = url.into();
        self
    }

    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::Missing(name))
}

fn optional(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
