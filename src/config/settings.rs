//! Configuration settings structure
//!
//! Defines the settings structure and loading logic for the media access
//! client.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default Rhombus API endpoint
pub const DEFAULT_API_URL: &str = "https://api2.rhombussystems.com";

/// Main configuration settings for the media access client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// API endpoint configuration
    pub api: ApiSettings,
    /// Federated token configuration
    pub token: TokenSettings,
    /// VOD download configuration
    pub download: DownloadSettings,
}

/// API endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the Rhombus API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Accept self-signed certificates. Cameras present self-signed
    /// certificates on their LAN media endpoints.
    pub accept_invalid_certs: bool,
}

/// Federated token configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenSettings {
    /// Default token validity in seconds when the caller does not specify one
    pub default_duration_secs: u64,
}

/// VOD download configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadSettings {
    /// Directory clips are written under
    pub output_dir: PathBuf,
    /// Length of one media segment in seconds, fixed by the service
    pub segment_seconds: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 30,
            accept_invalid_certs: false,
        }
    }
}

impl Default for TokenSettings {
    fn default() -> Self {
        Self {
            default_duration_secs: crate::vod::DEFAULT_FEDERATED_TOKEN_DURATION_SECS,
        }
    }
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./res"),
            segment_seconds: 2,
        }
    }
}

impl ApiSettings {
    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| crate::Error::config(format!("Invalid config file {path:?}: {e}")))
    }

    /// Load settings from environment variables over defaults
    pub fn from_env() -> crate::Result<Self> {
        Self::default().merge_with_env()
    }

    /// Override settings from environment variables
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        if let Ok(url) = std::env::var("RHOMBUS_API_URL") {
            self.api.base_url = url;
        }

        if let Ok(timeout) = std::env::var("RHOMBUS_API_TIMEOUT_SECS") {
            self.api.timeout_secs = timeout
                .parse()
                .map_err(|e| crate::Error::config(format!("Invalid timeout: {e}")))?;
        }

        if let Ok(duration) = std::env::var("RHOMBUS_TOKEN_DURATION") {
            self.token.default_duration_secs = duration
                .parse()
                .map_err(|e| crate::Error::config(format!("Invalid token duration: {e}")))?;
        }

        if let Ok(dir) = std::env::var("RHOMBUS_OUTPUT_DIR") {
            self.download.output_dir = PathBuf::from(dir);
        }

        Ok(self)
    }

    /// Validate the final configuration
    pub fn validate(&self) -> crate::Result<()> {
        url::Url::parse(&self.api.base_url)
            .map_err(|e| crate::Error::config(format!("Invalid API base URL: {e}")))?;

        if self.token.default_duration_secs == 0 {
            return Err(crate::Error::config(
                "Token duration must be greater than zero",
            ));
        }

        if self.download.segment_seconds == 0 {
            return Err(crate::Error::config(
                "Segment length must be greater than zero",
            ));
        }

        Ok(())
    }
}
