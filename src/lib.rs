//! seo-scan: a single-page SEO auditor
//!
//! This crate fetches one page plus its well-known auxiliary resources
//! (robots.txt, sitemap candidates), parses the HTML, and scores it against a
//! fixed battery of independent metrics.

pub mod config;
pub mod metrics;
pub mod output;
pub mod scanner;
pub mod url;

use thiserror::Error;

/// Main error type for seo-scan operations
#[derive(Debug, Error)]
pub enum SeoScanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Scan failed: {0}")]
    Scan(#[from] scanner::ScanError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Domain is required")]
    EmptyDomain,

    #[error("Invalid domain format. Please enter a valid domain name (e.g., example.com)")]
    InvalidDomain(String),

    #[error("Failed to parse URL: {0}")]
    Parse(#[from] ::url::ParseError),

    #[error("Missing host in URL: {0}")]
    MissingHost(String),
}

/// Result type alias for seo-scan operations
pub type Result<T> = std::result::Result<T, SeoScanError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use metrics::{aggregate, MetricResult, MetricStatus};
pub use scanner::{ErrorCategory, ScanError, ScanReport, Scanner};
pub use url::is_valid_hostname;
