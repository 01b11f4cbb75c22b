//! Configuration management
//!
//! This module handles loading and managing settings for the media access
//! client from defaults, configuration files, and environment variables.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::{ApiSettings, DownloadSettings, Settings, TokenSettings};
