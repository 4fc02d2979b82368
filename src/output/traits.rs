//! Renderer trait and output errors

use crate::scanner::{ScanError, ScanReport};
use thiserror::Error;

/// Errors that can occur while producing output
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Turns scan outcomes into a printable document
pub trait Renderer {
    /// Renders a successful scan
    fn render_report(&self, report: &ScanReport) -> OutputResult<String>;

    /// Renders a failed scan, including remediation suggestions where the
    /// format allows
    fn render_error(&self, error: &ScanError) -> OutputResult<String>;
}
