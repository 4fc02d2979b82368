//! Link metrics: internal linking and external link hygiene.

use crate::metrics::scoring::{Advice, Finding, Grading, Metric};
use crate::metrics::{MetricResult, MetricStatus};
use crate::scanner::Document;
use url::Url;

const INTERNAL_LINKS: Metric = Metric {
    name: "Internal Links",
    description: "Internal linking structure for navigation and SEO",
    grading: Grading::PerRule,
    advice: Advice::WhenPenalized(&[
        "Add more internal links to relevant pages",
        "Use descriptive anchor text",
        "Link to important pages from homepage",
    ]),
};

const EXTERNAL_LINKS: Metric = Metric {
    name: "External Links",
    description: "External link management and authority",
    grading: Grading::PerRule,
    advice: Advice::WhenPenalized(&["Consider adding rel=\"nofollow\" to external links"]),
};

/// Scores the number of links pointing back into the site
///
/// A link is internal when its `href` starts with `/` or mentions the base
/// hostname anywhere. Fewer than three is a warning; none at all is a failure.
pub fn internal_links(document: &Document, base_url: &Url) -> MetricResult {
    let hostname = base_url.host_str().unwrap_or_default();

    let count = document
        .select("a[href]")
        .iter()
        .filter_map(|link| link.value().attr("href"))
        .filter(|href| !href.is_empty())
        .filter(|href| href.starts_with('/') || (!hostname.is_empty() && href.contains(hostname)))
        .count();

    let mut findings = Vec::new();
    if count < 3 {
        findings.push(Finding::set(60, MetricStatus::Warning, "Very few internal links found"));
    }
    if count == 0 {
        findings.push(Finding::set(0, MetricStatus::Fail, "No internal links found"));
    }

    INTERNAL_LINKS.score(findings, format!("{} internal links found", count))
}

/// Scores how many outbound links pass authority
///
/// A link is external when it resolves against the base URL to a different
/// hostname. Links that do not resolve at all are ignored. When more than
/// half of the external links lack `rel="nofollow"` the metric warns.
pub fn external_links(document: &Document, base_url: &Url) -> MetricResult {
    let hostname = base_url.host_str().unwrap_or_default();

    let mut external = 0usize;
    let mut followed = 0usize;
    for link in document.select("a[href]") {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let Ok(resolved) = base_url.join(href) else {
            continue;
        };
        if resolved.host_str().unwrap_or_default() == hostname {
            continue;
        }

        external += 1;
        let rel = link.value().attr("rel").unwrap_or_default();
        if !rel.contains("nofollow") {
            followed += 1;
        }
    }

    let mut findings = Vec::new();
    if followed * 2 > external {
        findings.push(Finding::set(
            80,
            MetricStatus::Warning,
            "Many external links without nofollow attribute",
        ));
    }

    EXTERNAL_LINKS.score(findings, format!("{} external links found", external))
}
