//! Log record models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored log record.
///
/// The reference backend uses integer primary keys; string identifiers are
/// accepted as well so other storage layers can be plugged in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogId {
    Int(i64),
    Text(String),
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// A single stored log event.
///
/// All text fields are display-only: the timestamp is never parsed and the
/// level is only used to pick a display color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: LogId,
    pub timestamp: String,
    pub log_level: String,
    pub message: String,
    /// Arbitrary structured payload attached to the event.
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(default)]
    pub source_ip: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl LogRecord {
    /// Source IP if present and non-empty.
    pub fn source_ip(&self) -> Option<&str> {
        non_empty(self.source_ip.as_deref())
    }

    /// Endpoint if present and non-empty.
    pub fn endpoint(&self) -> Option<&str> {
        non_empty(self.endpoint.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
