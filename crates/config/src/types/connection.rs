//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, optional timeout).
//! - Define the main `Config` structure handed to the client and TUI crates.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `timeout: None` means requests never time out.
//! - `Config::default()` points at the local development backend.

use crate::constants::DEFAULT_BASE_URL;
use crate::types::theme::ColorTheme;
use std::time::Duration;

/// Connection configuration for the log backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Base URL of the backend (e.g., http://localhost:5000), without trailing slash
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_verify: false,
            timeout: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub theme: ColorTheme,
}

impl Config {
    /// Create a config pointing at `base_url` with every other setting at its default.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            ..Self::default()
        }
    }
}
