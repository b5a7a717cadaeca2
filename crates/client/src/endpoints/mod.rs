//! REST API endpoint implementations.

mod analysis;
mod logs;
pub mod request;

pub use analysis::get_analysis;
pub use logs::get_logs;
pub use request::send_request;
