//! Common test utilities for integration tests.
//!
//! This module re-exports commonly used types for testing the log backend
//! client. All integration tests should use these utilities to ensure
//! consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use logview_client::testing::load_fixture;

#[allow(unused_imports)]
pub use logview_client::{ClientError, LogViewerClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client pointed at the mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> LogViewerClient {
    LogViewerClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client should build for mock server")
}
