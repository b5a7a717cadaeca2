//! AI analysis API methods for [`LogViewerClient`].

use crate::client::LogViewerClient;
use crate::endpoints;
use crate::error::Result;

impl LogViewerClient {
    /// Request a free-text analysis of the stored logs.
    ///
    /// The backend chooses which logs to analyze; nothing is sent with the request.
    pub async fn analyze_logs(&self) -> Result<String> {
        let response = endpoints::get_analysis(&self.http, &self.base_url).await?;
        Ok(response.analysis)
    }
}
