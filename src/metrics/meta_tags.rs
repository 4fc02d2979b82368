//! Head-level metadata metrics.

use crate::metrics::scoring::{Advice, Finding, Grading, Metric};
use crate::metrics::{MetricResult, MetricStatus};
use crate::scanner::Document;

const META_KEYWORDS: Metric = Metric {
    name: "Meta Keywords",
    description: "Outdated meta keywords tag check",
    grading: Grading::PerRule,
    advice: Advice::WhenPenalized(&[
        "Remove meta keywords tag - it's not used by search engines",
    ]),
};

const CANONICAL_URL: Metric = Metric {
    name: "Canonical URL",
    description: "Canonical URL specification for duplicate content prevention",
    grading: Grading::PerRule,
    advice: Advice::WhenPenalized(&["Add canonical URL to prevent duplicate content issues"]),
};

const META_ROBOTS: Metric = Metric {
    name: "Meta Robots",
    description: "Page-level crawling and indexing directives",
    grading: Grading::PerRule,
    advice: Advice::WhenPenalized(&[]),
};

const VIEWPORT: Metric = Metric {
    name: "Mobile Viewport",
    description: "Mobile optimization and responsive design",
    grading: Grading::PerRule,
    advice: Advice::WhenPenalized(&[
        "Add viewport meta tag for mobile optimization",
        "Use width=device-width for responsive design",
        "Test mobile-friendliness",
    ]),
};

const LANG_ATTRIBUTE: Metric = Metric {
    name: "Language Declaration",
    description: "HTML language attribute for accessibility and SEO",
    grading: Grading::PerRule,
    advice: Advice::WhenPenalized(&[
        "Add lang attribute to html element",
        "Specify the primary language of your content",
        "Use proper language codes (e.g., en, en-US)",
    ]),
};

const FAVICON: Metric = Metric {
    name: "Favicon",
    description: "Website icon for browsers and bookmarks",
    grading: Grading::PerRule,
    advice: Advice::WhenPenalized(&[
        "Add a favicon to improve brand recognition",
        "Include multiple sizes for different devices",
        "Use modern formats like PNG or SVG",
    ]),
};

const ANALYTICS_TRACKING: Metric = Metric {
    name: "Analytics Tracking",
    description: "Website analytics and tracking setup",
    grading: Grading::PerRule,
    advice: Advice::WhenPenalized(&[
        "Install Google Analytics 4 for website tracking",
        "Consider using Google Tag Manager for easier tag management",
    ]),
};

fn meta_content(document: &Document, name: &str) -> String {
    document
        .first_attr(&format!("meta[name=\"{}\"]", name), "content")
        .unwrap_or_default()
}

fn or_placeholder(value: String, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}

/// Penalizes the legacy `<meta name="keywords">` tag
pub fn meta_keywords(document: &Document) -> MetricResult {
    let keywords = meta_content(document, "keywords");

    let mut findings = Vec::new();
    if !keywords.is_empty() {
        findings.push(Finding::deduct(
            20,
            MetricStatus::Warning,
            "Meta keywords tag is present (outdated)",
        ));
    }

    META_KEYWORDS.score(findings, or_placeholder(keywords, "Not found (good)"))
}

/// Checks for `<link rel="canonical">`
pub fn canonical_url(document: &Document) -> MetricResult {
    let canonical = document
        .first_attr("link[rel=\"canonical\"]", "href")
        .unwrap_or_default();

    let mut findings = Vec::new();
    if canonical.is_empty() {
        findings.push(Finding::deduct(30, MetricStatus::Warning, "No canonical URL specified"));
    }

    CANONICAL_URL.score(findings, or_placeholder(canonical, "Not found"))
}

/// Checks `<meta name="robots">` for directives that hide the page
///
/// `noindex` and `nofollow` are checked independently and stack.
pub fn meta_robots(document: &Document) -> MetricResult {
    let directives = meta_content(document, "robots");

    let mut findings = Vec::new();
    if directives.contains("noindex") {
        findings.push(Finding::set(
            20,
            MetricStatus::Warning,
            "Page set to noindex - won't appear in search results",
        ));
    }
    if directives.contains("nofollow") {
        findings.push(Finding::deduct(
            30,
            MetricStatus::Warning,
            "Page set to nofollow - links won't pass authority",
        ));
    }

    META_ROBOTS.score(
        findings,
        or_placeholder(directives, "Not specified (default: index,follow)"),
    )
}

/// Checks the mobile viewport declaration
pub fn viewport(document: &Document) -> MetricResult {
    let viewport = meta_content(document, "viewport");

    let mut findings = Vec::new();
    if viewport.is_empty() {
        findings.push(Finding::set(0, MetricStatus::Fail, "No viewport meta tag found"));
    } else if !viewport.contains("width=device-width") {
        findings.push(Finding::set(
            60,
            MetricStatus::Warning,
            "Viewport not optimized for mobile devices",
        ));
    }

    VIEWPORT.score(findings, or_placeholder(viewport, "Not found"))
}

/// Checks for a `lang` attribute on the root element
pub fn lang_attribute(document: &Document) -> MetricResult {
    let lang = document.root_attr("lang").unwrap_or_default().to_string();

    let mut findings = Vec::new();
    if lang.is_empty() {
        findings.push(Finding::set(70, MetricStatus::Warning, "No language attribute specified"));
    }

    LANG_ATTRIBUTE.score(findings, or_placeholder(lang, "Not specified"))
}

/// Checks for an icon link element
pub fn favicon(document: &Document) -> MetricResult {
    let icons = document.count(
        "link[rel=\"icon\"], link[rel=\"shortcut icon\"], link[rel=\"apple-touch-icon\"]",
    );

    let mut findings = Vec::new();
    if icons == 0 {
        findings.push(Finding::set(70, MetricStatus::Warning, "No favicon found"));
    }

    let value = if icons > 0 { "Found" } else { "Not found" };
    FAVICON.score(findings, value)
}

/// Looks for a Google Analytics 4 or Google Tag Manager snippet
pub fn analytics_tracking(document: &Document) -> MetricResult {
    let inline = document.text_of_all("script");

    let has_ga4 = inline.contains("gtag")
        || document.count("script[src*=\"googletagmanager.com/gtag\"]") > 0;
    let has_gtm = inline.contains("GTM-")
        || document.count("script[src*=\"googletagmanager.com/gtm\"]") > 0;

    let mut findings = Vec::new();
    if !has_ga4 && !has_gtm {
        findings.push(Finding::set(
            60,
            MetricStatus::Warning,
            "No Google Analytics or Google Tag Manager detected",
        ));
    }

    let value = if has_ga4 {
        "GA4 detected"
    } else if has_gtm {
        "GTM detected"
    } else {
        "Not detected"
    };
    ANALYTICS_TRACKING.score(findings, value)
}
