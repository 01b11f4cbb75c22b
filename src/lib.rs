//! Rhombus Media Access - Rust Implementation
//!
//! A client library for the Rhombus Systems camera cloud API, for applications
//! that present or download recorded (VOD) and live video from managed cameras.
//! It resolves network-appropriate playback URI templates for a camera, obtains
//! the short-lived federated session tokens required to access them, and can
//! download a finished VOD clip to disk by walking the MPEG-DASH segments
//! described by the clip's MPD document.
//!
//! # Architecture
//!
//! All remote interaction goes through the [`RhombusProvider`] capability
//! trait, with [`RhombusClient`] as the reqwest-backed implementation. The
//! fetcher functions in [`vod`] are thin orchestrations over that trait: no
//! retries, no caching, no token renewal - failures from the service propagate
//! to the caller unmodified.
//!
//! # Examples
//!
//! ```rust,no_run
//! use rhombus_media_access::{ConnectionType, RhombusClient, Settings, vod};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let settings = Settings::default();
//! let client = RhombusClient::new("my-api-key", &settings)?;
//!
//! let (uri, token) =
//!     vod::fetch_media_uris(&client, "camera-uuid", 600, ConnectionType::Lan).await?;
//! println!("VOD at {uri} with token {token}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod types;
pub mod vod;

pub use api::{RhombusClient, RhombusProvider};
pub use config::Settings;
pub use error::{Error, Result};
pub use types::{ConnectionType, FederatedSessionTokenResponse, MediaUrisResponse};
pub use vod::DEFAULT_FEDERATED_TOKEN_DURATION_SECS;
