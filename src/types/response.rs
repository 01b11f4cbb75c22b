//! Response type definitions
//!
//! Response bodies returned by the Rhombus API. Unknown fields are ignored;
//! the URI template sequences deserialize as empty when absent.

use serde::{Deserialize, Serialize};

/// Response for federated session token generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederatedSessionTokenResponse {
    /// The issued short-lived token, returned verbatim to callers
    pub federated_session_token: String,
}

impl FederatedSessionTokenResponse {
    /// Create a new token response
    pub fn new(federated_session_token: impl Into<String>) -> Self {
        Self {
            federated_session_token: federated_session_token.into(),
        }
    }
}

/// Media URIs reported by a camera.
///
/// VOD URIs are templates with `{START_TIME}` and `{DURATION}` placeholders;
/// live URIs point at the camera's rolling MPD document. Each comes in a LAN
/// variant (possibly several, one per reachable interface) and a single WAN
/// relay variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaUrisResponse {
    /// LAN VOD MPD URI templates, one per camera interface
    #[serde(default)]
    pub lan_vod_mpd_uris_templates: Vec<String>,

    /// WAN VOD MPD URI template
    #[serde(default)]
    pub wan_vod_mpd_uri_template: String,

    /// LAN live MPD URIs, one per camera interface
    #[serde(default)]
    pub lan_live_mpd_uris: Vec<String>,

    /// WAN live MPD URI
    #[serde(default)]
    pub wan_live_mpd_uri: String,
}

impl MediaUrisResponse {
    /// First LAN VOD template, if the camera reported any
    pub fn lan_vod_uri(&self) -> Option<&str> {
        self.lan_vod_mpd_uris_templates.first().map(String::as_str)
    }

    /// First LAN live URI, if the camera reported any
    pub fn lan_live_uri(&self) -> Option<&str> {
        self.lan_live_mpd_uris.first().map(String::as_str)
    }
}
