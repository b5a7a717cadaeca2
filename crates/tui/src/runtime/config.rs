//! Configuration loading for the TUI.
//!
//! Responsibilities:
//! - Load configuration with `.env`, environment and CLI overrides.
//!
//! Does NOT handle:
//! - Creating the backend client (see `runtime::client`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > `.env` file > defaults.
//! - `load_dotenv()` runs before environment variables are read.

use anyhow::{Context, Result};
use logview_config::{Config, ConfigLoader};
use std::time::Duration;

use crate::cli::Cli;

/// Apply CLI overrides on top of a loader that already read the environment.
pub fn apply_cli_overrides(mut loader: ConfigLoader, cli: &Cli) -> ConfigLoader {
    if let Some(url) = &cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout((secs > 0).then(|| Duration::from_secs(secs)));
    }
    if let Some(theme) = cli.theme {
        loader = loader.with_theme(theme);
    }
    loader
}

/// Load the full configuration for this session.
///
/// # Errors
///
/// Returns an error if the `.env` file is malformed or any value fails
/// validation.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load .env file")?
        .from_env()
        .context("Invalid environment configuration")?;

    let config = apply_cli_overrides(loader, cli)
        .build()
        .context("Invalid configuration")?;

    tracing::debug!(
        base_url = %config.connection.base_url,
        timeout = ?config.connection.timeout,
        theme = %config.theme,
        "Configuration loaded"
    );
    Ok(config)
}
