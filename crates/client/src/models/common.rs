//! Response shapes shared across endpoints.

use serde::Deserialize;

/// Error body returned by the backend on failures, e.g. `{"error": "Internal Server Error"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerErrorBody {
    pub error: String,
}
