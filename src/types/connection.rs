//! Connection type selector
//!
//! Cameras expose media both on the local network and relayed over the WAN;
//! callers pick which URI variant they want.

use serde::{Deserialize, Serialize};

/// Which network path to use when selecting a media URI.
///
/// Unless the caller is known to be outside the camera's network, LAN is the
/// right choice and is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConnectionType {
    /// Reach the camera over the local network
    #[default]
    Lan,
    /// Reach the camera through the wide-area relay
    Wan,
}

impl std::fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lan => write!(f, "LAN"),
            Self::Wan => write!(f, "WAN"),
        }
    }
}
