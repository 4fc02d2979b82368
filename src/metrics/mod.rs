//! Metric evaluation engine
//!
//! Each metric is a pure function of the parsed [`Document`] and/or facts
//! about the response, except the two network metrics (robots.txt and XML
//! sitemap) which fetch their own resources and never fail the scan.
//!
//! Metrics run from a static, ordered [`REGISTRY`]. Every record names the
//! inputs the metric needs, so dispatch is a plain `match` over
//! [`Capability`].

mod content;
mod links;
mod meta_tags;
mod scoring;
mod social;
mod technical;

pub use content::{content_length, heading_structure, image_alt_text, meta_description, title_tag};
pub use links::{external_links, internal_links};
pub use meta_tags::{analytics_tracking, canonical_url, favicon, lang_attribute, meta_keywords, meta_robots, viewport};
pub use scoring::{Advice, Finding, Grading, Metric, Penalty};
pub use social::{open_graph, schema_markup, twitter_cards};
pub use technical::{page_speed, robots_txt, ssl_https, xml_sitemap, SITEMAP_PATHS};

use crate::scanner::{Document, Fetcher};
use reqwest::header::HeaderMap;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Summary verdict of a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Pass,
    Warning,
    Fail,
}

impl MetricStatus {
    /// Returns the lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warning => "warning",
            Self::Fail => "fail",
        }
    }
}

impl fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricResult {
    pub name: &'static str,
    pub description: &'static str,
    /// Always within 0..=100
    pub score: u8,
    pub status: MetricStatus,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    /// Human-readable observed value
    pub value: String,
}

/// Facts about the main page response
#[derive(Debug, Clone)]
pub struct ResponseFacts {
    pub status: u16,
    pub headers: HeaderMap,
    pub final_url: Url,
}

impl ResponseFacts {
    /// Returns a header value if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Everything page-local metrics may read
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub document: &'a Document,
    pub base_url: &'a Url,
    pub response: &'a ResponseFacts,
}

/// Metrics that issue their own requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkProbe {
    RobotsTxt,
    Sitemap,
}

/// Inputs a metric requires, with the function that scores it
#[derive(Clone, Copy)]
pub enum Capability {
    Document(fn(&Document) -> MetricResult),
    DocumentAndBase(fn(&Document, &Url) -> MetricResult),
    BaseUrl(fn(&Url) -> MetricResult),
    Response(fn(&ResponseFacts) -> MetricResult),
    Network(NetworkProbe),
}

/// One entry of the registry
#[derive(Clone, Copy)]
pub struct Evaluator {
    pub id: &'static str,
    pub capability: Capability,
}

/// All metrics, in report order
pub const REGISTRY: &[Evaluator] = &[
    // Core content
    Evaluator { id: "title_tag", capability: Capability::Document(title_tag) },
    Evaluator { id: "meta_description", capability: Capability::Document(meta_description) },
    Evaluator { id: "heading_structure", capability: Capability::Document(heading_structure) },
    Evaluator { id: "image_alt_text", capability: Capability::Document(image_alt_text) },
    Evaluator { id: "internal_links", capability: Capability::DocumentAndBase(internal_links) },
    // Meta tags
    Evaluator { id: "meta_keywords", capability: Capability::Document(meta_keywords) },
    Evaluator { id: "canonical_url", capability: Capability::Document(canonical_url) },
    Evaluator { id: "meta_robots", capability: Capability::Document(meta_robots) },
    Evaluator { id: "viewport", capability: Capability::Document(viewport) },
    Evaluator { id: "lang_attribute", capability: Capability::Document(lang_attribute) },
    // Social and structured data
    Evaluator { id: "open_graph", capability: Capability::Document(open_graph) },
    Evaluator { id: "twitter_cards", capability: Capability::Document(twitter_cards) },
    Evaluator { id: "schema_markup", capability: Capability::Document(schema_markup) },
    // Infrastructure
    Evaluator { id: "robots_txt", capability: Capability::Network(NetworkProbe::RobotsTxt) },
    Evaluator { id: "xml_sitemap", capability: Capability::Network(NetworkProbe::Sitemap) },
    Evaluator { id: "ssl_https", capability: Capability::BaseUrl(ssl_https) },
    Evaluator { id: "page_speed", capability: Capability::Response(page_speed) },
    // Content quality
    Evaluator { id: "content_length", capability: Capability::Document(content_length) },
    Evaluator { id: "external_links", capability: Capability::DocumentAndBase(external_links) },
    // Extras
    Evaluator { id: "favicon", capability: Capability::Document(favicon) },
    Evaluator { id: "analytics_tracking", capability: Capability::Document(analytics_tracking) },
];

/// Results of the metrics that fetch their own resources
#[derive(Debug, Clone)]
pub struct NetworkResults {
    pub robots_txt: MetricResult,
    pub sitemap: MetricResult,
}

impl NetworkResults {
    fn get(&self, probe: NetworkProbe) -> &MetricResult {
        match probe {
            NetworkProbe::RobotsTxt => &self.robots_txt,
            NetworkProbe::Sitemap => &self.sitemap,
        }
    }
}

/// Runs the network metrics against a base URL
///
/// Fetch failures are folded into the metric results; this never fails.
pub async fn probe_network<F>(fetcher: &F, base_url: &Url, timeout: Duration) -> NetworkResults
where
    F: Fetcher + ?Sized,
{
    let robots_txt = robots_txt(fetcher, base_url, timeout).await;
    let sitemap = xml_sitemap(fetcher, base_url, timeout).await;

    NetworkResults {
        robots_txt,
        sitemap,
    }
}

/// Evaluates every registry entry in order
pub fn evaluate_all(page: &PageContext<'_>, network: &NetworkResults) -> Vec<MetricResult> {
    REGISTRY
        .iter()
        .map(|evaluator| {
            let result = evaluate(evaluator, page, network);
            tracing::debug!(
                "{}: {} ({})",
                evaluator.id,
                result.score,
                result.status
            );
            result
        })
        .collect()
}

/// Evaluates a single registry entry
pub fn evaluate(
    evaluator: &Evaluator,
    page: &PageContext<'_>,
    network: &NetworkResults,
) -> MetricResult {
    match evaluator.capability {
        Capability::Document(f) => f(page.document),
        Capability::DocumentAndBase(f) => f(page.document, page.base_url),
        Capability::BaseUrl(f) => f(page.base_url),
        Capability::Response(f) => f(page.response),
        Capability::Network(probe) => network.get(probe).clone(),
    }
}

/// Computes the overall score: the mean of all metric scores, rounded half up
///
/// # Examples
///
/// ```
/// use seo_scan::metrics::aggregate;
///
/// assert_eq!(aggregate(&[]), 0);
/// ```
pub fn aggregate(results: &[MetricResult]) -> u8 {
    if results.is_empty() {
        return 0;
    }

    let count = results.len() as u64;
    let total: u64 = results.iter().map(|r| u64::from(r.score)).sum();

    ((2 * total + count) / (2 * count)) as u8
}
