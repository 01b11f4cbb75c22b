//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

/// Test helper functions
pub mod helpers {
    use rhombus_media_access::RhombusClient;
    use wiremock::MockServer;

    /// Start a mock service and a client pointed at it
    pub async fn setup() -> (MockServer, RhombusClient) {
        let server = MockServer::start().await;
        let client = RhombusClient::from_reqwest(&server.uri(), reqwest::Client::new());
        (server, client)
    }
}
