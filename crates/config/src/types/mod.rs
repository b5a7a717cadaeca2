//! Configuration type definitions for the log viewer.
//!
//! Responsibilities:
//! - Define the connection settings handed to the client crate.
//! - Define the selectable color themes and their runtime palettes.
//!
//! Does NOT handle:
//! - Configuration loading from `.env` or environment variables (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `ColorTheme` is the selectable representation; `Theme` is the runtime representation.

pub(crate) mod connection;
mod theme;

pub use connection::{Config, ConnectionConfig};
pub use theme::{ColorTheme, Theme};
