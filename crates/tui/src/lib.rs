//! Terminal log viewer for the log backend.
//!
//! The binary (`src/main.rs`) owns the terminal and the event loop; this
//! library holds everything the loop drives so it can be tested headless:
//! actions, application state, rendering and async side effects.

pub mod action;
pub mod app;
pub mod cli;
pub mod runtime;
pub mod ui;

pub use action::{Action, RedactedAction};
pub use app::App;
