//! Output module for presenting scan results
//!
//! This module handles:
//! - Rendering reports and failures as text, markdown or JSON
//! - Mapping failure categories to remediation suggestions
//! - Writing rendered output to stdout or a file

mod json;
mod markdown;
mod text;
mod traits;

pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use text::TextRenderer;
pub use traits::{OutputError, OutputResult, Renderer};

use crate::config::OutputFormat;
use crate::scanner::ErrorCategory;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Returns the renderer for an output format
pub fn renderer_for(format: OutputFormat) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Markdown => Box::new(MarkdownRenderer),
    }
}

/// Remediation suggestions shown alongside a failure
///
/// # Examples
///
/// ```
/// use seo_scan::output::suggestions;
/// use seo_scan::ErrorCategory;
///
/// assert_eq!(suggestions(ErrorCategory::Network).len(), 3);
/// ```
pub fn suggestions(category: ErrorCategory) -> &'static [&'static str] {
    match category {
        ErrorCategory::Network => &[
            "Check your internet connection",
            "Try again in a few moments",
            "Disable any VPN or proxy temporarily",
        ],
        ErrorCategory::NotFound => &[
            "Verify the domain name is correct",
            "Make sure the website is online",
            "Try with or without \"www\" prefix",
        ],
        ErrorCategory::AccessDenied => &[
            "The website may be blocking automated requests",
            "Try again later",
            "Some websites restrict access to scanners",
        ],
        ErrorCategory::ServerError => &[
            "Our scanning service encountered an issue",
            "Please try again in a few minutes",
            "Contact support if the problem persists",
        ],
        ErrorCategory::Timeout => &[
            "The website is taking too long to respond",
            "Try again with a faster website",
            "Some websites may be slow or overloaded",
        ],
        ErrorCategory::Validation => &[
            "Enter a bare domain such as example.com",
            "Remove any path, port or query string",
        ],
        ErrorCategory::Unknown => &["Please try again", "Contact support if the problem continues"],
    }
}

/// Writes rendered output to `path`, or to stdout when no path is given
pub fn write_output(rendered: &str, path: Option<&Path>) -> OutputResult<()> {
    match path {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(rendered.as_bytes())?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
