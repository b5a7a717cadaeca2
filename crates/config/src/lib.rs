//! Configuration management for the log viewer.
//!
//! This crate provides types and loaders for the backend connection settings
//! (from `.env`, environment variables and explicit overrides), the shared
//! workspace constants, and the terminal color palette.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{ColorTheme, Config, ConnectionConfig, Theme};
