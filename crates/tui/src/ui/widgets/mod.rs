//! Shared UI widgets for common rendering patterns.

pub mod empty;
pub mod loading;

pub use empty::render_empty_state;
pub use loading::spinner_label;
