//! Common test utilities for client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use lunartools_client::{Config, LunarClient};
use wiremock::MockServer;

pub const CLIENT_ID: &str = "test-client";
pub const ACCESS_TOKEN: &str = "test-token";

/// Mock API server plus a client pointed at it.
pub struct TestHarness {
    pub server: MockServer,
    pub client: LunarClient,
}

impl TestHarness {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let config = Config::new(CLIENT_ID, ACCESS_TOKEN).with_base_url(server.uri());
        let client = LunarClient::new(config);
        Self { server, client }
    }

    /// URL of a webhook endpoint on the mock server.
    pub fn webhook_url(&self) -> String {
        format!("{}/api/webhooks/123/abc", self.server.uri())
    }
}
