//! Log listing endpoint.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::request::{parse_json, send_request};
use crate::error::Result;
use crate::models::LogRecord;
use logview_config::constants::LOGS_PATH;

/// Get every stored log record.
///
/// Records are returned in backend order (newest first for the reference
/// backend); no sorting happens here.
pub async fn get_logs(client: &Client, base_url: &str) -> Result<Vec<LogRecord>> {
    let url = format!("{}{}", base_url, LOGS_PATH);
    debug!("Fetching log records from {}", url);

    let response = send_request(client.get(&url).header("Accept", "application/json")).await?;
    let records: Vec<LogRecord> = parse_json(response, "log records").await?;

    debug!(count = records.len(), "Fetched log records");
    Ok(records)
}
