//! Main log backend client and API methods.
//!
//! This module provides the primary [`LogViewerClient`] used by the TUI.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `logs`: Log listing
//! - `analysis`: AI analysis
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Retrying failed requests; every call is a single attempt
//!
//! # Invariants
//! - `base_url` never ends with a slash

pub mod builder;

mod analysis;
mod logs;

/// Log backend client.
///
/// # Creating a Client
///
/// Use [`LogViewerClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use logview_client::LogViewerClient;
///
/// let client = LogViewerClient::builder()
///     .base_url("http://localhost:5000".to_string())
///     .build()?;
/// let records = client.list_logs().await?;
/// ```
#[derive(Debug, Clone)]
pub struct LogViewerClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl LogViewerClient {
    /// Create a new client builder.
    pub fn builder() -> builder::LogViewerClientBuilder {
        builder::LogViewerClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
