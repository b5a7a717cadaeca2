//! Action protocol for the TUI.
//!
//! Responsibilities:
//! - Define the `Action` enum that flows between the input task, the event
//!   loop and spawned side-effect tasks.
//! - Provide `RedactedAction` for logging actions without their payloads.
//!
//! Does NOT handle:
//! - Applying actions to state (see `crate::app`).
//! - Spawning network work (see `crate::runtime::side_effects`).
//!
//! Invariants:
//! - Request actions (`LoadLogs`, `RunAnalysis`) reach the side-effect
//!   dispatcher only after `App::update` accepted the transition.
//! - Result actions carry `Arc<ClientError>` so they stay `Clone`.

pub mod redaction;
pub mod variants;

pub use redaction::RedactedAction;
pub use variants::Action;
