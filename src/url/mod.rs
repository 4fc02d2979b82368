//! URL handling module for seo-scan
//!
//! This module turns user-supplied domains into fetchable URLs: hostname
//! validation, candidate URL construction, protocol fallback and base URL
//! resolution.

mod domain;

use crate::{UrlError, UrlResult};
use url::Url;

pub use domain::{is_valid_hostname, strip_scheme};

/// Validates user input as a domain, optionally prefixed with a scheme
///
/// Surrounding whitespace is ignored. The returned slice is the trimmed input.
///
/// # Examples
///
/// ```
/// use seo_scan::url::validate_domain;
///
/// assert_eq!(validate_domain(" example.com ").unwrap(), "example.com");
/// assert!(validate_domain("https://example.com").is_ok());
/// assert!(validate_domain("not a domain").is_err());
/// ```
pub fn validate_domain(input: &str) -> UrlResult<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::EmptyDomain);
    }

    if !is_valid_hostname(strip_scheme(trimmed)) {
        return Err(UrlError::InvalidDomain(trimmed.to_string()));
    }

    Ok(trimmed)
}

/// Builds the first URL to try for a validated domain
///
/// Input that already carries `http://` or `https://` is used as-is,
/// everything else is assumed to be served over HTTPS.
pub fn candidate_url(domain: &str) -> UrlResult<Url> {
    let raw = if domain.starts_with("https://") || domain.starts_with("http://") {
        domain.to_string()
    } else {
        format!("https://{}", domain)
    };

    Ok(Url::parse(&raw)?)
}

/// Returns the plain-HTTP variant of an HTTPS URL
///
/// Returns `None` when the URL is not HTTPS, since retrying would repeat the
/// same request.
pub fn http_fallback(url: &Url) -> Option<Url> {
    if url.scheme() != "https" {
        return None;
    }

    let mut fallback = url.clone();
    fallback.set_scheme("http").ok()?;
    Some(fallback)
}

/// Reduces a URL to its origin (scheme, host and port)
///
/// # Examples
///
/// ```
/// use url::Url;
/// use seo_scan::url::base_url;
///
/// let page = Url::parse("https://www.example.com:8443/blog/post?id=1").unwrap();
/// assert_eq!(base_url(&page).unwrap().as_str(), "https://www.example.com:8443/");
/// ```
pub fn base_url(url: &Url) -> UrlResult<Url> {
    let origin = url.origin();
    if !origin.is_tuple() {
        return Err(UrlError::MissingHost(url.to_string()));
    }

    Ok(Url::parse(&origin.ascii_serialization())?)
}

/// Renders a base URL without the trailing slash the `url` crate adds
pub fn display_base(base: &Url) -> String {
    base.as_str().trim_end_matches('/').to_string()
}
