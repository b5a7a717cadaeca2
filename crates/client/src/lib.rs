//! Log backend HTTP client.
//!
//! This crate provides a type-safe async client for the log storage service:
//! listing stored log records and requesting an AI-generated analysis of them.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::LogViewerClient;
pub use client::builder::LogViewerClientBuilder;
pub use error::{ClientError, Result};
pub use models::{AnalysisResponse, LogId, LogRecord};
