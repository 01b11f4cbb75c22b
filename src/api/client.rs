//! Rhombus API client
//!
//! Issues the two organization/camera-level calls this crate needs and the
//! cookie-authenticated media GETs used when downloading segments. One
//! outbound request per call: no retries, no caching, no token renewal.

use crate::{
    Error, Result,
    config::Settings,
    types::{
        FederatedSessionTokenResponse, GenerateFederatedSessionTokenRequest, GetMediaUrisRequest,
        MediaUrisResponse,
    },
};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, COOKIE, HeaderMap, HeaderValue};

/// Abstract capability interface over the Rhombus service.
///
/// Exactly the two remote calls the fetchers need. Implementations own all
/// transport concerns; failures surface unmodified through [`crate::Error`].
#[async_trait]
pub trait RhombusProvider: Send + Sync {
    /// Request a federated session token valid for `duration_sec` seconds
    async fn generate_federated_session_token(
        &self,
        duration_sec: u64,
    ) -> Result<FederatedSessionTokenResponse>;

    /// Request the media URIs of the given camera
    async fn get_media_uris(&self, camera_uuid: &str) -> Result<MediaUrisResponse>;
}

/// Reqwest-backed Rhombus API client
#[derive(Debug, Clone)]
pub struct RhombusClient {
    /// HTTP client carrying the API key headers
    http: reqwest::Client,
    /// Base URL of the API, without trailing slash
    base_url: String,
}

impl RhombusClient {
    /// Create a client authenticated with the given API key.
    ///
    /// The key is sent as the `x-auth-scheme: api-token` / `x-auth-apikey`
    /// header pair the service expects on every request.
    pub fn new(api_key: &str, settings: &Settings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("x-auth-scheme", HeaderValue::from_static("api-token"));
        let mut api_key_value = HeaderValue::from_str(api_key)
            .map_err(|e| Error::config(format!("Invalid API key: {e}")))?;
        api_key_value.set_sensitive(true);
        headers.insert("x-auth-apikey", api_key_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(settings.api.timeout())
            .danger_accept_invalid_certs(settings.api.accept_invalid_certs)
            .build()?;

        Ok(Self::from_reqwest(&settings.api.base_url, http))
    }

    /// Create a client over an existing `reqwest::Client`.
    ///
    /// Used by tests to point the client at a local mock server.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL this client targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON body to an API path and decode the JSON response
    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("POST {}", url);

        let response = self.http.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!("API call {} failed with HTTP {}", path, status);
            return Err(Error::api(status.as_u16(), message));
        }

        Ok(response.json().await?)
    }

    /// GET a media URI authenticated with a federated session token.
    ///
    /// The token rides in the `RSESSIONID` cookie; without it the media
    /// endpoints answer 401.
    pub async fn media_get(&self, uri: &str, federated_token: &str) -> Result<reqwest::Response> {
        tracing::debug!("GET {}", uri);

        let response = self
            .http
            .get(uri)
            .header(
                COOKIE,
                HeaderValue::from_str(&media_cookie(federated_token))
                    .map_err(|e| Error::config(format!("Invalid federated token: {e}")))?,
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::media_download(uri, status.as_u16()));
        }

        Ok(response)
    }
}

/// Cookie value carrying a federated session token
fn media_cookie(federated_token: &str) -> String {
    format!("RSESSIONID=RFT:{federated_token}")
}

#[async_trait]
impl RhombusProvider for RhombusClient {
    async fn generate_federated_session_token(
        &self,
        duration_sec: u64,
    ) -> Result<FederatedSessionTokenResponse> {
        let request = GenerateFederatedSessionTokenRequest::new(duration_sec);
        self.post("/api/org/generateFederatedSessionToken", &request)
            .await
    }

    async fn get_media_uris(&self, camera_uuid: &str) -> Result<MediaUrisResponse> {
        let request = GetMediaUrisRequest::new(camera_uuid);
        self.post("/api/camera/getMediaUris", &request).await
    }
}
