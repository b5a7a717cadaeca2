//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `LOGVIEW_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid values return ConfigError::InvalidValue naming the variable.

use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::ColorTheme;

pub const ENV_BASE_URL: &str = "LOGVIEW_BASE_URL";
pub const ENV_TIMEOUT: &str = "LOGVIEW_TIMEOUT";
pub const ENV_SKIP_VERIFY: &str = "LOGVIEW_SKIP_VERIFY";
pub const ENV_THEME: &str = "LOGVIEW_THEME";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse a timeout given in whole seconds. Zero disables the timeout.
pub(crate) fn parse_timeout_secs(var: &str, raw: &str) -> Result<Option<Duration>, ConfigError> {
    let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: "must be a whole number of seconds".to_string(),
    })?;
    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        loader.set_timeout(Some(parse_timeout_secs(ENV_TIMEOUT, &timeout)?));
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
        loader.set_skip_verify(Some(skip.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: ENV_SKIP_VERIFY.to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }
    if let Some(theme) = env_var_or_none(ENV_THEME) {
        let theme: ColorTheme = theme.parse().map_err(|message| ConfigError::InvalidValue {
            var: ENV_THEME.to_string(),
            message,
        })?;
        loader.set_theme(Some(theme));
    }

    Ok(())
}
