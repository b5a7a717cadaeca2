//! AI analysis endpoint.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::request::{parse_json, send_request};
use crate::error::Result;
use crate::models::AnalysisResponse;
use logview_config::constants::ANALYZE_PATH;

/// Request an AI-generated analysis of the stored logs.
///
/// The call can take a long time; it is bounded only by the client's
/// configured timeout, if any.
pub async fn get_analysis(client: &Client, base_url: &str) -> Result<AnalysisResponse> {
    let url = format!("{}{}", base_url, ANALYZE_PATH);
    debug!("Requesting log analysis from {}", url);

    let response = send_request(client.get(&url).header("Accept", "application/json")).await?;
    let analysis: AnalysisResponse = parse_json(response, "analysis response").await?;

    debug!(chars = analysis.analysis.chars().count(), "Received log analysis");
    Ok(analysis)
}
