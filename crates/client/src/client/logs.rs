//! Log listing API methods for [`LogViewerClient`].
//!
//! # What this module handles:
//! - Retrieving the full stored log collection
//!
//! # What this module does NOT handle:
//! - Filtering or pagination (the backend returns everything)
//! - Low-level HTTP calls (in [`crate::endpoints::logs`])

use crate::client::LogViewerClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::LogRecord;

impl LogViewerClient {
    /// Fetch every stored log record, in the order the backend returns them.
    pub async fn list_logs(&self) -> Result<Vec<LogRecord>> {
        endpoints::get_logs(&self.http, &self.base_url).await
    }
}
