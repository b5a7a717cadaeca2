//! Redaction wrapper for Action logging.
//!
//! Log records and analysis text can carry user data (IPs, request paths,
//! free-form messages), so actions are logged through `RedactedAction`,
//! which replaces payloads with their sizes.
//!
//! # Example
//!
//! ```ignore
//! let action = Action::AnalysisFinished(Ok("Summary: ...".to_string()));
//! tracing::info!("Handling action: {:?}", RedactedAction(&action));
//! // Logs: Handling action: AnalysisFinished(Ok(<12 chars>))
//! ```

use crate::action::variants::Action;

/// Debug wrapper that prints payload sizes instead of payloads.
pub struct RedactedAction<'a>(pub &'a Action);

impl std::fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::LogsLoaded(Ok(records)) => {
                write!(f, "LogsLoaded(Ok(<{} records>))", records.len())
            }
            Action::LogsLoaded(Err(_)) => write!(f, "LogsLoaded(Err(<redacted>))"),
            Action::AnalysisFinished(Ok(text)) => {
                write!(f, "AnalysisFinished(Ok(<{} chars>))", text.chars().count())
            }
            Action::AnalysisFinished(Err(_)) => write!(f, "AnalysisFinished(Err(<redacted>))"),
            other => write!(f, "{:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logview_client::{ClientError, LogId, LogRecord};
    use std::sync::Arc;

    fn record(message: &str) -> LogRecord {
        LogRecord {
            id: LogId::Int(1),
            timestamp: "2024-05-01T10:00:00".to_string(),
            log_level: "INFO".to_string(),
            message: message.to_string(),
            details: None,
            source_ip: Some("10.1.2.3".to_string()),
            endpoint: Some("/api/secret".to_string()),
        }
    }

    #[test]
    fn test_logs_loaded_shows_count_only() {
        let action = Action::LogsLoaded(Ok(vec![record("user=alice"), record("user=bob")]));
        let output = format!("{:?}", RedactedAction(&action));

        assert_eq!(output, "LogsLoaded(Ok(<2 records>))");
        assert!(!output.contains("alice"));
        assert!(!output.contains("10.1.2.3"));
    }

    #[test]
    fn test_analysis_text_is_redacted() {
        let action = Action::AnalysisFinished(Ok("Line1\nLine2".to_string()));
        let output = format!("{:?}", RedactedAction(&action));

        assert_eq!(output, "AnalysisFinished(Ok(<11 chars>))");
    }

    #[test]
    fn test_errors_are_redacted() {
        let err = Arc::new(ClientError::InvalidResponse("token=abc".to_string()));
        let output = format!("{:?}", RedactedAction(&Action::LogsLoaded(Err(err.clone()))));
        assert!(!output.contains("token=abc"));

        let output = format!("{:?}", RedactedAction(&Action::AnalysisFinished(Err(err))));
        assert!(!output.contains("token=abc"));
    }

    #[test]
    fn test_simple_variants_use_debug() {
        assert_eq!(format!("{:?}", RedactedAction(&Action::LoadLogs)), "LoadLogs");
        assert_eq!(format!("{:?}", RedactedAction(&Action::Tick)), "Tick");
        assert_eq!(
            format!("{:?}", RedactedAction(&Action::Resize(80, 24))),
            "Resize(80, 24)"
        );
    }
}
