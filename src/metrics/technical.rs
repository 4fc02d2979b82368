//! Infrastructure metrics: robots.txt, XML sitemap, HTTPS and page speed.
//!
//! robots.txt and the sitemap are fetched here, relative to the base URL,
//! each request bounded by the auxiliary timeout. A failed fetch only lowers
//! the metric's own score.

use crate::metrics::scoring::{Advice, Finding, Grading, Metric};
use crate::metrics::{MetricResult, MetricStatus, ResponseFacts};
use crate::scanner::{FetchOutcome, Fetcher};
use std::time::Duration;
use url::Url;

/// Sitemap locations probed, in order
pub const SITEMAP_PATHS: [&str; 4] = [
    "/sitemap.xml",
    "/sitemap_index.xml",
    "/sitemaps.xml",
    "/sitemap1.xml",
];

const ROBOTS_TXT: Metric = Metric {
    name: "Robots.txt",
    description: "Search engine crawling instructions",
    grading: Grading::PerRule,
    advice: Advice::WhenPenalized(&[
        "Create a robots.txt file in your root directory",
        "Include sitemap location in robots.txt",
        "Specify crawling rules for search engines",
        "Test robots.txt with Google Search Console",
    ]),
};

const XML_SITEMAP: Metric = Metric {
    name: "XML Sitemap",
    description: "XML sitemap for search engine discovery",
    grading: Grading::PerRule,
    advice: Advice::WhenPenalized(&[
        "Create an XML sitemap for your website",
        "Submit sitemap to Google Search Console",
        "Include sitemap URL in robots.txt",
        "Keep sitemap updated with new content",
        "Consider creating separate sitemaps for different content types",
    ]),
};

const SSL_HTTPS: Metric = Metric {
    name: "SSL/HTTPS",
    description: "Secure connection and encryption",
    grading: Grading::PerRule,
    advice: Advice::WhenPenalized(&[
        "Enable HTTPS/SSL certificate",
        "Redirect HTTP traffic to HTTPS",
        "Update internal links to use HTTPS",
        "Use HSTS headers for security",
    ]),
};

const PAGE_SPEED: Metric = Metric {
    name: "Page Speed",
    description: "Page loading performance optimization",
    grading: Grading::PerRule,
    advice: Advice::Always(&[
        "Optimize images and compress files",
        "Enable browser caching",
        "Minimize HTTP requests",
        "Use a CDN for static assets",
        "Minify CSS and JavaScript",
    ]),
};

async fn fetch_relative<F>(fetcher: &F, base_url: &Url, path: &str, timeout: Duration) -> Option<FetchOutcome>
where
    F: Fetcher + ?Sized,
{
    match base_url.join(path) {
        Ok(url) => Some(fetcher.fetch(&url, timeout).await),
        Err(e) => {
            tracing::debug!("Cannot build {} from {}: {}", path, base_url, e);
            None
        }
    }
}

/// Fetches and checks `<base>/robots.txt`
///
/// | Outcome | Effect |
/// |---------|--------|
/// | Fetch failed or non-2xx | 60, warning |
/// | Blank body | 70, warning |
/// | No `User-agent:` | -20, warning |
/// | No `Sitemap:` | -10, warning |
pub async fn robots_txt<F>(fetcher: &F, base_url: &Url, timeout: Duration) -> MetricResult
where
    F: Fetcher + ?Sized,
{
    let mut content = String::new();
    let mut findings = Vec::new();

    match fetch_relative(fetcher, base_url, "/robots.txt", timeout).await {
        Some(Ok(page)) if page.is_success() => {
            content = page.body;
            if content.trim().is_empty() {
                findings.push(Finding::set(70, MetricStatus::Warning, "robots.txt file is empty"));
            } else {
                if !content.contains("User-agent:") {
                    findings.push(Finding::deduct(
                        20,
                        MetricStatus::Warning,
                        "robots.txt missing User-agent directive",
                    ));
                }
                if !content.contains("Sitemap:") {
                    findings.push(Finding::deduct(
                        10,
                        MetricStatus::Warning,
                        "robots.txt missing Sitemap directive",
                    ));
                }
            }
        }
        Some(Ok(page)) => {
            tracing::debug!("robots.txt returned HTTP {}", page.status);
            findings.push(Finding::set(60, MetricStatus::Warning, "robots.txt file not found"));
        }
        Some(Err(e)) => {
            tracing::debug!("robots.txt fetch failed: {}", e);
            findings.push(Finding::set(60, MetricStatus::Warning, "Unable to fetch robots.txt"));
        }
        None => {
            findings.push(Finding::set(60, MetricStatus::Warning, "Unable to fetch robots.txt"));
        }
    }

    let value = if content.is_empty() {
        "Not found"
    } else {
        "Found and accessible"
    };
    ROBOTS_TXT.score(findings, value)
}

/// Probes [`SITEMAP_PATHS`] in order for an XML sitemap
///
/// The first 2xx response whose body contains `<urlset` or `<sitemapindex`
/// ends the probe. Later paths are not requested.
pub async fn xml_sitemap<F>(fetcher: &F, base_url: &Url, timeout: Duration) -> MetricResult
where
    F: Fetcher + ?Sized,
{
    let mut found = None;

    for path in SITEMAP_PATHS {
        match fetch_relative(fetcher, base_url, path, timeout).await {
            Some(Ok(page)) if page.is_success() && is_sitemap(&page.body) => {
                found = Some(path);
                break;
            }
            Some(Ok(page)) => {
                tracing::debug!("{} is not a sitemap (HTTP {})", path, page.status);
            }
            Some(Err(e)) => {
                tracing::debug!("{} fetch failed: {}", path, e);
            }
            None => {}
        }
    }

    let mut findings = Vec::new();
    if found.is_none() {
        findings.push(Finding::set(40, MetricStatus::Fail, "No XML sitemap found"));
    }

    let value = match found {
        Some(path) => format!("Found: {}", path),
        None => "Not found".to_string(),
    };
    XML_SITEMAP.score(findings, value)
}

fn is_sitemap(body: &str) -> bool {
    body.contains("<urlset") || body.contains("<sitemapindex")
}

/// Checks that the final page is served over HTTPS
pub fn ssl_https(base_url: &Url) -> MetricResult {
    let is_https = base_url.scheme() == "https";

    let mut findings = Vec::new();
    if !is_https {
        findings.push(Finding::set(0, MetricStatus::Fail, "Website not using HTTPS"));
    }

    let value = if is_https {
        "HTTPS enabled"
    } else {
        "HTTP only (insecure)"
    };
    SSL_HTTPS.score(findings, value)
}

/// Static page-speed placeholder
///
/// Always passes and always carries the general performance advice. When the
/// server reports an `x-response-time` header it is echoed in the value.
pub fn page_speed(response: &ResponseFacts) -> MetricResult {
    let value = match response.header("x-response-time") {
        Some(time) => format!("Basic check completed (server reported {})", time),
        None => "Basic check completed".to_string(),
    };
    PAGE_SPEED.score(Vec::new(), value)
}
