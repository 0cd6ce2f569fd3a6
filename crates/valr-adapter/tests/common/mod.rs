/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for valr-adapter tests

use valr_adapter::{ClientConfig, Credentials, ValrClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Credentials matching the published VALR signing example
#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new(
        "41b24fab0d6443929f5cb76782815ca0da32f3190e7383f9fe7752e755868141",
        "0e06e223696b1d9bc6d8df1f701a87326c16763d8f2ebaaacb1042b61d7c3035",
    )
}

/// Client pointed at a mock server with test credentials attached
#[allow(dead_code)]
pub fn authed_client(base_url: &str) -> ValrClient {
    let mut client = ValrClient::with_config_and_base_url(ClientConfig::default(), base_url)
        .expect("client init");
    client.set_credentials(test_credentials());
    client
}
