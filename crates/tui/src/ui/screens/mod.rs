//! Screen renderers.

pub mod logs;
