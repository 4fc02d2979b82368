//! Scan orchestration
//!
//! A scan runs as one sequential async flow:
//! 1. Validate the domain and build the candidate URL
//! 2. Fetch the page, retrying once over plain HTTP on a transport failure
//! 3. Reject error statuses and empty bodies
//! 4. Run the network metrics (robots.txt, sitemap) against the base URL
//! 5. Parse the page and run the page-local metrics
//! 6. Aggregate into a [`ScanReport`]

use crate::config::HttpConfig;
use crate::metrics::{aggregate, evaluate_all, probe_network, PageContext, ResponseFacts};
use crate::scanner::document::Document;
use crate::scanner::error::{ScanError, ScanFailure};
use crate::scanner::fetcher::{FetchedPage, Fetcher, HttpFetcher};
use crate::scanner::report::ScanReport;
use crate::url::{base_url, candidate_url, display_base, http_fallback, validate_domain};
use chrono::Utc;
use std::time::{Duration, Instant};
use url::Url;

/// Runs scans against a [`Fetcher`]
///
/// Holds no per-scan state; one scanner may serve any number of scans.
#[derive(Debug, Clone)]
pub struct Scanner<F = HttpFetcher> {
    fetcher: F,
    page_timeout: Duration,
    auxiliary_timeout: Duration,
}

impl Scanner<HttpFetcher> {
    /// Creates a scanner backed by a reqwest client built from `config`
    pub fn from_config(config: &HttpConfig) -> crate::Result<Self> {
        Ok(Self::new(HttpFetcher::new(config)?, config))
    }
}

impl<F: Fetcher> Scanner<F> {
    /// Creates a scanner over an arbitrary fetcher, taking timeouts from `config`
    pub fn new(fetcher: F, config: &HttpConfig) -> Self {
        Self {
            fetcher,
            page_timeout: Duration::from_secs(config.page_timeout_secs),
            auxiliary_timeout: Duration::from_secs(config.auxiliary_timeout_secs),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Scans the domain the user entered
    ///
    /// Invalid input fails with a `validation` error before any request is
    /// made.
    pub async fn scan(&self, input: &str) -> Result<ScanReport, ScanError> {
        let domain = input.trim();

        let result = match validate_domain(domain).and_then(candidate_url) {
            Ok(candidate) => self.run(domain, candidate).await,
            Err(e) => Err(ScanFailure::from(e)),
        };

        result.map_err(|failure| self.fail(domain, failure))
    }

    /// Scans an already-built candidate URL, skipping domain validation
    ///
    /// `domain` is only used for labelling the report.
    pub async fn scan_url(&self, domain: &str, candidate: Url) -> Result<ScanReport, ScanError> {
        self.run(domain, candidate)
            .await
            .map_err(|failure| self.fail(domain, failure))
    }

    fn fail(&self, domain: &str, failure: ScanFailure) -> ScanError {
        let error = ScanError::new(domain, &failure);
        tracing::warn!(
            "Scan of '{}' failed [{}]: {}",
            domain,
            error.category,
            error.message
        );
        error
    }

    async fn run(&self, domain: &str, candidate: Url) -> Result<ScanReport, ScanFailure> {
        let start_time = Instant::now();
        tracing::info!("Scanning {} ({})", domain, candidate);

        let page = self.fetch_page(&candidate).await?;

        if !page.is_success() {
            return Err(ScanFailure::from_status(page.status, &page.status_text));
        }
        if page.body.trim().is_empty() {
            return Err(ScanFailure::EmptyContent);
        }

        let base = base_url(&page.final_url)?;
        tracing::debug!("Final URL {}, base {}", page.final_url, base);

        let network = probe_network(&self.fetcher, &base, self.auxiliary_timeout).await;

        let response = ResponseFacts {
            status: page.status,
            headers: page.headers,
            final_url: page.final_url,
        };
        let metrics = {
            let document = Document::parse(&page.body);
            let context = PageContext {
                document: &document,
                base_url: &base,
                response: &response,
            };
            evaluate_all(&context, &network)
        };

        let overall_score = aggregate(&metrics);
        tracing::info!(
            "Scanned {} in {:.2}s: overall score {}",
            domain,
            start_time.elapsed().as_secs_f64(),
            overall_score
        );

        Ok(ScanReport {
            domain: domain.to_string(),
            requested_url: candidate.to_string(),
            final_url: response.final_url.to_string(),
            base_url: display_base(&base),
            overall_score,
            metrics,
            scanned_at: Utc::now(),
        })
    }

    /// Fetches the main page, falling back from HTTPS to HTTP once
    ///
    /// When both attempts fail the first failure is reported.
    async fn fetch_page(&self, candidate: &Url) -> Result<FetchedPage, ScanFailure> {
        let first = match self.fetcher.fetch(candidate, self.page_timeout).await {
            Ok(page) => return Ok(page),
            Err(e) => e,
        };

        let Some(fallback) = http_fallback(candidate) else {
            return Err(ScanFailure::Unreachable(first));
        };

        tracing::warn!("{}; retrying over HTTP", first);

        match self.fetcher.fetch(&fallback, self.page_timeout).await {
            Ok(page) => Ok(page),
            Err(second) => {
                tracing::debug!("HTTP fallback failed as well: {}", second);
                Err(ScanFailure::Unreachable(first))
            }
        }
    }
}
