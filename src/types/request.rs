//! Request type definitions
//!
//! Request bodies for the two Rhombus API calls this crate issues. Field
//! names follow the service's camelCase wire format.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/org/generateFederatedSessionToken`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFederatedSessionTokenRequest {
    /// How long the issued token should remain valid, in seconds
    pub duration_sec: u64,
}

impl GenerateFederatedSessionTokenRequest {
    /// Create a token request with the given validity duration
    pub fn new(duration_sec: u64) -> Self {
        Self { duration_sec }
    }
}

/// Request body for `POST /api/camera/getMediaUris`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMediaUrisRequest {
    /// UUID of the camera to look up
    pub camera_uuid: String,
}

impl GetMediaUrisRequest {
    /// Create a media URI request for the given camera
    pub fn new(camera_uuid: impl Into<String>) -> Self {
        Self {
            camera_uuid: camera_uuid.into(),
        }
    }
}
