//! VOD and live media access
//!
//! The fetchers in this module are thin orchestrations over a
//! [`RhombusProvider`](crate::api::RhombusProvider): resolve a camera's
//! playback URI for the caller's network path, obtain the federated session
//! token that authorizes access to it, and optionally download a finished
//! clip to disk by walking its MPEG-DASH segments.

pub mod download;
pub mod fetcher;
pub mod mpd;

pub use download::{DownloadedClip, download_alert_vod, download_vod};
pub use fetcher::{
    DEFAULT_FEDERATED_TOKEN_DURATION_SECS, fetch_federated_token,
    fetch_federated_token_with_duration, fetch_live_uri, fetch_media_uris,
};
pub use mpd::MpdInfo;
