//! Backend client creation.
//!
//! Does NOT handle:
//! - Configuration loading (see `runtime::config`).
//!
//! Invariants / Assumptions:
//! - The provided config has a validated, normalized base URL.
//! - No request is made here; the first request is the startup log load.

use anyhow::Result;
use logview_client::LogViewerClient;
use logview_config::Config;

/// Create a backend client from loaded configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn create_client(config: &Config) -> Result<LogViewerClient> {
    let client = LogViewerClient::builder().from_config(config).build()?;
    tracing::info!(base_url = %client.base_url(), "Backend client created");
    Ok(client)
}
