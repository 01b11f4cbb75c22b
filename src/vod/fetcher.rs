//! Media URI and federated token fetchers
//!
//! Two sequential request/response calls against the service, nothing more:
//! no retries, no caching, no token renewal. Every invocation performs fresh
//! round trips, and any remote failure propagates to the caller unmodified.

use crate::{Error, Result, api::RhombusProvider, types::ConnectionType};
use tracing::debug;

/// Default federated token validity: 20 minutes.
///
/// [`fetch_federated_token_with_duration`] takes an explicit duration for
/// callers (and tests) that need a different window.
pub const DEFAULT_FEDERATED_TOKEN_DURATION_SECS: u64 = 20 * 60;

/// Fetch a federated session token with the default validity window.
///
/// The token string is returned verbatim as the service issued it.
pub async fn fetch_federated_token<P>(api: &P) -> Result<String>
where
    P: RhombusProvider + ?Sized,
{
    fetch_federated_token_with_duration(api, DEFAULT_FEDERATED_TOKEN_DURATION_SECS).await
}

/// Fetch a federated session token valid for `duration_sec` seconds.
///
/// The duration passes through to the service unchecked.
pub async fn fetch_federated_token_with_duration<P>(api: &P, duration_sec: u64) -> Result<String>
where
    P: RhombusProvider + ?Sized,
{
    debug!("Fetching federated session token valid for {}s", duration_sec);
    let response = api.generate_federated_session_token(duration_sec).await?;
    Ok(response.federated_session_token)
}

/// Fetch a camera's VOD URI together with a token to access it.
///
/// Requests the camera's media URIs, then a federated session token valid for
/// `duration_sec` seconds, and returns the pair selected for
/// `connection_type`: the first LAN VOD template, or the single WAN VOD
/// template. Returns [`Error::NoLanUri`] when LAN is requested but the camera
/// reported no LAN templates.
pub async fn fetch_media_uris<P>(
    api: &P,
    camera_uuid: &str,
    duration_sec: u64,
    connection_type: ConnectionType,
) -> Result<(String, String)>
where
    P: RhombusProvider + ?Sized,
{
    debug!("Fetching media URIs for camera {}", camera_uuid);
    let media_uris = api.get_media_uris(camera_uuid).await?;

    let token = fetch_federated_token_with_duration(api, duration_sec).await?;

    let uri = match connection_type {
        ConnectionType::Lan => media_uris
            .lan_vod_uri()
            .map(str::to_owned)
            .ok_or_else(|| Error::no_lan_uri(camera_uuid))?,
        ConnectionType::Wan => media_uris.wan_vod_mpd_uri_template,
    };

    debug!("Selected {} VOD URI {}", connection_type, uri);
    Ok((uri, token))
}

/// Fetch a camera's live MPD URI together with a token to access it.
///
/// Same contract as [`fetch_media_uris`], selecting from the live URI fields
/// instead of the VOD templates. Callers outside the camera's network should
/// pass [`ConnectionType::Wan`]; this function does not probe LAN
/// reachability.
pub async fn fetch_live_uri<P>(
    api: &P,
    camera_uuid: &str,
    duration_sec: u64,
    connection_type: ConnectionType,
) -> Result<(String, String)>
where
    P: RhombusProvider + ?Sized,
{
    debug!("Fetching live URIs for camera {}", camera_uuid);
    let media_uris = api.get_media_uris(camera_uuid).await?;

    let token = fetch_federated_token_with_duration(api, duration_sec).await?;

    let uri = match connection_type {
        ConnectionType::Lan => media_uris
            .lan_live_uri()
            .map(str::to_owned)
            .ok_or_else(|| Error::no_lan_uri(camera_uuid))?,
        ConnectionType::Wan => media_uris.wan_live_mpd_uri,
    };

    debug!("Selected {} live URI {}", connection_type, uri);
    Ok((uri, token))
}
