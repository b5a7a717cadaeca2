//! Request helper shared by all endpoints.
//!
//! Sends a request exactly once and turns non-2xx responses into
//! [`ClientError::ApiError`], unwrapping the backend's `{"error": "..."}`
//! body into the message when present.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::ServerErrorBody;

/// Sends an HTTP request and maps non-success statuses to `ClientError::ApiError`.
///
/// # Errors
///
/// - `ClientError::HttpError` when no response was received.
/// - `ClientError::ApiError` for any non-2xx status.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();

    if status.is_success() {
        debug!(status = status.as_u16(), url = %response.url(), "Request succeeded");
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    let message = error_message(status, body);

    debug!(status = status.as_u16(), %url, %message, "Request failed");

    Err(ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    })
}

/// Reads the full body and deserializes it, reporting shape mismatches as
/// `ClientError::InvalidResponse` with the given context.
pub async fn parse_json<T: DeserializeOwned>(response: Response, context: &str) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse {context}: {e}")))
}

fn error_message(status: StatusCode, body: String) -> String {
    if let Ok(parsed) = serde_json::from_str::<ServerErrorBody>(&body) {
        return parsed.error;
    }
    if body.trim().is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string();
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_unwraps_error_field() {
        let msg = error_message(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error": "AI analysis failed"}"#.to_string(),
        );
        assert_eq!(msg, "AI analysis failed");
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        let msg = error_message(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert_eq!(msg, "upstream down");
    }

    #[test]
    fn test_error_message_empty_body_uses_reason() {
        let msg = error_message(StatusCode::SERVICE_UNAVAILABLE, "  ".to_string());
        assert_eq!(msg, "Service Unavailable");
    }
}
