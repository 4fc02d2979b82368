//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests made during a scan:
//! - Building the HTTP client with a browser-like user agent
//! - GET requests with per-request timeouts, following redirects
//! - Classifying transport failures (timeout, connect, other)
//!
//! An HTTP error status is NOT a transport failure: any received response is
//! returned as a [`FetchedPage`] and the caller decides what the status means.

use crate::config::HttpConfig;
use async_trait::async_trait;
use reqwest::{header::HeaderMap, redirect::Policy, Client};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Failure to complete a network exchange
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}: {message}")]
    Connect { url: String, message: String },

    #[error("Request failed for {url}: {message}")]
    Other { url: String, message: String },
}

/// A received HTTP response with its body read as text
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code
    pub status: u16,
    /// Canonical reason phrase for the status (may be empty)
    pub status_text: String,
    /// Response headers
    pub headers: HeaderMap,
    /// Final URL after redirects
    pub final_url: Url,
    /// Body decoded as text
    pub body: String,
}

impl FetchedPage {
    /// Returns true for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Result of fetching a single resource
pub type FetchOutcome = Result<FetchedPage, TransportError>;

/// Capability to retrieve a URL
///
/// Implementations follow redirects and identify themselves with the
/// configured user agent. Exceeding `timeout` must surface as
/// [`TransportError::Timeout`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url, timeout: Duration) -> FetchOutcome;
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use seo_scan::config::HttpConfig;
/// use seo_scan::scanner::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .connect_timeout(Duration::from_secs(config.page_timeout_secs))
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`Fetcher`] backed by a shared reqwest client
///
/// The client only pools connections; no response data is cached, so one
/// instance can serve any number of independent scans.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher from HTTP configuration
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url, timeout: Duration) -> FetchOutcome {
        tracing::debug!("GET {} (timeout {:?})", url, timeout);

        let response = self
            .client
            .get(url.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        let final_url = response.url().clone();
        let headers = response.headers().clone();

        let body = response
            .text()
            .await
            .map_err(|e| classify_error(url, e))?;

        Ok(FetchedPage {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
            headers,
            final_url,
            body,
        })
    }
}

/// Maps a reqwest error onto the transport failure taxonomy
fn classify_error(url: &Url, error: reqwest::Error) -> TransportError {
    let url = url.to_string();

    if error.is_timeout() {
        TransportError::Timeout { url }
    } else if error.is_connect() {
        TransportError::Connect {
            url,
            message: error.to_string(),
        }
    } else {
        TransportError::Other {
            url,
            message: error.to_string(),
        }
    }
}
