//! Models for the AI analysis endpoint.

use serde::{Deserialize, Serialize};

/// Response of `GET /api/ai/analyze`.
///
/// The text is opaque: it may contain newlines and is shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}
