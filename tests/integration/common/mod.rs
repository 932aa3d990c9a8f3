//! Shared fixtures for integration tests
//!
//! - `http_office` wires a `Backoffice` to a wiremock server over real HTTP
//! - `mock_office` wires one to the in-memory `MockBackend`

use std::sync::Arc;

use tourdesk_app::Backoffice;
use tourdesk_client::mock::MockBackend;
use tourdesk_client::ClientConfig;
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "integration-token";

#[allow(dead_code)]
/// Back office talking HTTP to a fresh wiremock server
pub async fn http_office() -> (MockServer, Backoffice) {
    let server = MockServer::start().await;
    let config = ClientConfig::new(format!("{}/api", server.uri())).with_access_token(TEST_TOKEN);
    let office = Backoffice::from_config(config).expect("http transport builds");
    (server, office)
}

/// Back office on an in-memory backend, returned for seeding and assertions
#[allow(dead_code)]
pub fn mock_office() -> (MockBackend, Backoffice) {
    let backend = MockBackend::new();
    let office = Backoffice::new(Arc::new(backend.clone()));
    (backend, office)
}
