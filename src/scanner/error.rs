//! Scan failure taxonomy
//!
//! Failures that abort a scan are classified into a closed set of
//! [`ErrorCategory`] values. Presenters work from the category alone.

use crate::scanner::fetcher::TransportError;
use crate::UrlError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Machine-readable classification of a scan failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Network,
    NotFound,
    AccessDenied,
    ServerError,
    Timeout,
    Validation,
    Unknown,
}

impl ErrorCategory {
    /// Returns the snake_case wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::NotFound => "not_found",
            Self::AccessDenied => "access_denied",
            Self::ServerError => "server_error",
            Self::Timeout => "timeout",
            Self::Validation => "validation",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a scan can be aborted
#[derive(Debug, Error)]
pub enum ScanFailure {
    #[error(transparent)]
    InvalidInput(#[from] UrlError),

    #[error("Unable to connect to website: {0}")]
    Unreachable(TransportError),

    #[error("{message}")]
    HttpStatus {
        status: u16,
        category: ErrorCategory,
        message: String,
    },

    #[error("Website returned empty content")]
    EmptyContent,
}

impl ScanFailure {
    /// Builds the failure for a non-2xx main page response
    ///
    /// # Example
    ///
    /// ```
    /// use seo_scan::scanner::{ErrorCategory, ScanFailure};
    ///
    /// let failure = ScanFailure::from_status(404, "Not Found");
    /// assert_eq!(failure.category(), ErrorCategory::NotFound);
    /// assert_eq!(failure.status_code(), 404);
    /// ```
    pub fn from_status(status: u16, reason: &str) -> Self {
        let (category, message) = match status {
            404 => (
                ErrorCategory::NotFound,
                "Website not found. Please check the domain name.".to_string(),
            ),
            403 => (
                ErrorCategory::AccessDenied,
                "Access denied. The website may be blocking our scanner.".to_string(),
            ),
            500 => (
                ErrorCategory::ServerError,
                "The website server encountered an error.".to_string(),
            ),
            502 => (
                ErrorCategory::ServerError,
                "Bad gateway. The website may be temporarily unavailable.".to_string(),
            ),
            503 => (
                ErrorCategory::ServerError,
                "Service unavailable. The website may be down for maintenance.".to_string(),
            ),
            504 => (
                ErrorCategory::Timeout,
                "Gateway timeout. The website is not responding.".to_string(),
            ),
            500..=599 => (
                ErrorCategory::ServerError,
                format!("HTTP {}: {}", status, reason),
            ),
            _ => (ErrorCategory::Unknown, format!("HTTP {}: {}", status, reason)),
        };

        Self::HttpStatus {
            status,
            category,
            message,
        }
    }

    /// Returns the category this failure is reported under
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput(UrlError::EmptyDomain | UrlError::InvalidDomain(_)) => {
                ErrorCategory::Validation
            }
            Self::InvalidInput(_) => ErrorCategory::Unknown,
            Self::Unreachable(_) => ErrorCategory::Network,
            Self::HttpStatus { category, .. } => *category,
            Self::EmptyContent => ErrorCategory::ServerError,
        }
    }

    /// Returns the HTTP status used when framing this failure as a response
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(UrlError::EmptyDomain | UrlError::InvalidDomain(_)) => 400,
            Self::InvalidInput(_) => 500,
            Self::Unreachable(_) => 503,
            Self::HttpStatus { status, .. } => *status,
            Self::EmptyContent => 422,
        }
    }
}

/// A failed scan, ready for presentation
#[derive(Debug, Clone, Error, Serialize)]
#[error("{message}")]
pub struct ScanError {
    /// Human-readable description
    pub message: String,
    /// Machine-readable classification
    pub category: ErrorCategory,
    /// Domain as entered by the user
    pub domain: String,
    /// When the failure was recorded
    pub timestamp: DateTime<Utc>,
    /// Status code for response framing
    #[serde(skip)]
    pub status_code: u16,
}

impl ScanError {
    /// Records a failure for the given domain input
    pub fn new(domain: impl Into<String>, failure: &ScanFailure) -> Self {
        Self {
            message: failure.to_string(),
            category: failure.category(),
            domain: domain.into(),
            timestamp: Utc::now(),
            status_code: failure.status_code(),
        }
    }
}
