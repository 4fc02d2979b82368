//! Social sharing and structured data metrics.

use crate::metrics::scoring::{Advice, Finding, Grading, Metric};
use crate::metrics::{MetricResult, MetricStatus};
use crate::scanner::Document;

const OPEN_GRAPH: Metric = Metric {
    name: "Open Graph Tags",
    description: "Open Graph meta tags for social media sharing",
    grading: Grading::ByScore { warning_above: 60 },
    advice: Advice::WhenPenalized(&[
        "Add Open Graph tags for better social media sharing",
        "Include og:title, og:description, og:image, og:type, and og:url",
        "Test with Facebook Sharing Debugger",
    ]),
};

const TWITTER_CARDS: Metric = Metric {
    name: "Twitter Cards",
    description: "Twitter social media optimization",
    grading: Grading::ByScore { warning_above: 60 },
    advice: Advice::WhenPenalized(&[
        "Add Twitter Card meta tags for better social sharing",
        "Include twitter:card, twitter:title, twitter:description, and twitter:image",
        "Test with Twitter Card Validator",
    ]),
};

const SCHEMA_MARKUP: Metric = Metric {
    name: "Schema Markup",
    description: "Structured data for rich search results",
    grading: Grading::PerRule,
    advice: Advice::WhenPenalized(&[
        "Add structured data markup for better search results",
        "Consider adding Schema.org markup for your content type",
        "Test with Google Rich Results Test",
    ]),
};

/// A social tag, its penalty when missing and its label in the value summary
struct SocialTag {
    key: &'static str,
    penalty: i32,
    label: &'static str,
}

const OPEN_GRAPH_TAGS: &[SocialTag] = &[
    SocialTag { key: "og:title", penalty: 25, label: "Title" },
    SocialTag { key: "og:description", penalty: 25, label: "Description" },
    SocialTag { key: "og:image", penalty: 30, label: "Image" },
    SocialTag { key: "og:type", penalty: 10, label: "Type" },
    SocialTag { key: "og:url", penalty: 10, label: "URL" },
];

const TWITTER_TAGS: &[SocialTag] = &[
    SocialTag { key: "twitter:card", penalty: 40, label: "Card" },
    SocialTag { key: "twitter:title", penalty: 20, label: "Title" },
    SocialTag { key: "twitter:description", penalty: 20, label: "Description" },
    SocialTag { key: "twitter:image", penalty: 20, label: "Image" },
];

/// Checks each tag's `content` via `meta[<attribute>="<key>"]`
fn check_tags(
    document: &Document,
    attribute: &str,
    tags: &[SocialTag],
) -> (Vec<Finding>, String) {
    let mut findings = Vec::new();
    let mut summary = Vec::with_capacity(tags.len());

    for tag in tags {
        let present = document
            .first_attr(&format!("meta[{}=\"{}\"]", attribute, tag.key), "content")
            .is_some_and(|content| !content.is_empty());

        if !present {
            findings.push(Finding::penalty(tag.penalty, format!("Missing {}", tag.key)));
        }
        summary.push(format!("{}: {}", tag.label, if present { "Yes" } else { "No" }));
    }

    (findings, summary.join(", "))
}

/// Scores Open Graph coverage (`meta[property="og:*"]`)
pub fn open_graph(document: &Document) -> MetricResult {
    let (findings, value) = check_tags(document, "property", OPEN_GRAPH_TAGS);
    OPEN_GRAPH.score(findings, value)
}

/// Scores Twitter Card coverage (`meta[name="twitter:*"]`)
pub fn twitter_cards(document: &Document) -> MetricResult {
    let (findings, value) = check_tags(document, "name", TWITTER_TAGS);
    TWITTER_CARDS.score(findings, value)
}

/// Checks for JSON-LD blocks or microdata
pub fn schema_markup(document: &Document) -> MetricResult {
    let json_ld = document.count("script[type=\"application/ld+json\"]");
    let microdata = document.count("[itemscope]");

    let mut findings = Vec::new();
    if json_ld == 0 && microdata == 0 {
        findings.push(Finding::set(60, MetricStatus::Warning, "No structured data found"));
    }

    SCHEMA_MARKUP.score(
        findings,
        format!("JSON-LD: {}, Microdata: {}", json_ld, microdata),
    )
}
