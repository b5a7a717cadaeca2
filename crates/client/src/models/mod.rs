//! Data models for log backend responses.

mod analysis;
mod common;
mod logs;

pub use analysis::AnalysisResponse;
pub use common::ServerErrorBody;
pub use logs::{LogId, LogRecord};
