//! Error type definitions
//!
//! Defines the main error types used throughout the media access crate.

use thiserror::Error;

/// Main error type for media access operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Non-success response from the Rhombus API
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// LAN selection was requested but the camera reported no LAN URI
    #[error("No LAN URI available for camera {camera_uuid}")]
    NoLanUri { camera_uuid: String },

    /// MPD document inspection errors
    #[error("MPD error: {reason}")]
    Mpd { reason: String },

    /// Non-success response while downloading a media segment
    #[error("Media download failed (HTTP {status}): {uri}")]
    MediaDownload { uri: String, status: u16 },

    /// Network/HTTP client errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new API error from a status code and response body
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a "no LAN URI available" error for the given camera
    pub fn no_lan_uri(camera_uuid: impl Into<String>) -> Self {
        Self::NoLanUri {
            camera_uuid: camera_uuid.into(),
        }
    }

    /// Create an MPD inspection error
    pub fn mpd(reason: impl Into<String>) -> Self {
        Self::Mpd {
            reason: reason.into(),
        }
    }

    /// Create a media download error
    pub fn media_download(uri: impl Into<String>, status: u16) -> Self {
        Self::MediaDownload {
            uri: uri.into(),
            status,
        }
    }
}
