//! Core on-page content metrics: title, description, headings, image alt
//! text and content length.

use crate::metrics::scoring::{Advice, Finding, Grading, Metric};
use crate::metrics::{MetricResult, MetricStatus};
use crate::scanner::Document;

const TITLE_TAG: Metric = Metric {
    name: "Title Tag",
    description: "Page title optimization for search engines and users",
    grading: Grading::PerRule,
    advice: Advice::WhenPenalized(&[
        "Keep title between 30-60 characters",
        "Include primary keywords near the beginning",
        "Make it descriptive and compelling",
        "Each page should have a unique title",
    ]),
};

const META_DESCRIPTION: Metric = Metric {
    name: "Meta Description",
    description: "Meta description tag for search result snippets",
    grading: Grading::PerRule,
    advice: Advice::WhenPenalized(&[
        "Keep meta description between 120-160 characters",
        "Include relevant keywords naturally",
        "Write compelling copy that encourages clicks",
        "Make each page description unique",
    ]),
};

const HEADING_STRUCTURE: Metric = Metric {
    name: "Heading Structure",
    description: "Proper heading hierarchy (H1, H2, H3, etc.)",
    grading: Grading::PerRule,
    advice: Advice::WhenPenalized(&[
        "Use exactly one H1 tag per page",
        "Structure content with H2, H3 tags hierarchically",
        "Include keywords in heading tags naturally",
        "Use headings to break up content logically",
    ]),
};

const IMAGE_ALT_TEXT: Metric = Metric {
    name: "Image Alt Text",
    description: "Alt text for accessibility and SEO",
    grading: Grading::PerRule,
    advice: Advice::WhenPenalized(&[
        "Add descriptive alt text to all images",
        "Include relevant keywords in alt text naturally",
        "Keep alt text concise but descriptive",
    ]),
};

const CONTENT_LENGTH: Metric = Metric {
    name: "Content Length",
    description: "Page content depth and comprehensiveness",
    grading: Grading::PerRule,
    advice: Advice::WhenPenalized(&[
        "Add more comprehensive content (aim for 500+ words)",
        "Create valuable, in-depth content",
        "Use headings to structure longer content",
    ]),
};

/// Scores the `<title>` element
///
/// | Rule | Effect |
/// |------|--------|
/// | No `<title>` | 0, fail |
/// | Shorter than 30 characters | -30, warning |
/// | Longer than 60 characters | -20, warning |
/// | Blank after trimming | 0, fail |
///
/// The text of every `<title>` is joined, inline `<svg><title>` included.
/// Length is measured in UTF-16 code units.
pub fn title_tag(document: &Document) -> MetricResult {
    let title = (document.count("title") > 0).then(|| document.text_of_all("title"));

    let mut findings = Vec::new();
    match &title {
        None => findings.push(Finding::set(0, MetricStatus::Fail, "No title tag found")),
        Some(title) => {
            let length = title.encode_utf16().count();
            if length < 30 {
                findings.push(Finding::deduct(
                    30,
                    MetricStatus::Warning,
                    format!(
                        "Title is too short ({} characters, minimum 30 recommended)",
                        length
                    ),
                ));
            }
            if length > 60 {
                findings.push(Finding::deduct(
                    20,
                    MetricStatus::Warning,
                    format!(
                        "Title is too long ({} characters, maximum 60 recommended)",
                        length
                    ),
                ));
            }
            if title.trim().is_empty() {
                findings.push(Finding::set(0, MetricStatus::Fail, "Title tag is empty"));
            }
        }
    }

    let value = title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Not found".to_string());

    TITLE_TAG.score(findings, value)
}

/// Scores `<meta name="description">`
pub fn meta_description(document: &Document) -> MetricResult {
    let description = document
        .first_attr("meta[name=\"description\"]", "content")
        .unwrap_or_default();

    let mut findings = Vec::new();
    if description.is_empty() {
        findings.push(Finding::set(0, MetricStatus::Fail, "No meta description found"));
    } else {
        let length = description.chars().count();
        if length < 120 {
            findings.push(Finding::deduct(
                20,
                MetricStatus::Warning,
                format!(
                    "Meta description is too short ({} characters, minimum 120 recommended)",
                    length
                ),
            ));
        }
        if length > 160 {
            findings.push(Finding::deduct(
                20,
                MetricStatus::Warning,
                format!(
                    "Meta description is too long ({} characters, maximum 160 recommended)",
                    length
                ),
            ));
        }
    }

    let value = if description.is_empty() {
        "Not found".to_string()
    } else {
        description
    };

    META_DESCRIPTION.score(findings, value)
}

/// Scores the H1/H2 outline
///
/// The H2 rule is checked after the H1 rules, so a page with no headings at
/// all ends up with status `warning` despite the H1 failure.
pub fn heading_structure(document: &Document) -> MetricResult {
    let counts: Vec<usize> = ["h1", "h2", "h3", "h4", "h5", "h6"]
        .iter()
        .map(|tag| document.count(tag))
        .collect();
    let (h1, h2) = (counts[0], counts[1]);

    let mut findings = Vec::new();
    if h1 == 0 {
        findings.push(Finding::deduct(40, MetricStatus::Fail, "No H1 tag found"));
    } else if h1 > 1 {
        findings.push(Finding::deduct(
            20,
            MetricStatus::Warning,
            format!("Multiple H1 tags found ({})", h1),
        ));
    }
    if h2 == 0 {
        findings.push(Finding::deduct(
            15,
            MetricStatus::Warning,
            "No H2 tags found - consider adding subheadings",
        ));
    }

    let value = counts
        .iter()
        .enumerate()
        .map(|(i, count)| format!("H{}: {}", i + 1, count))
        .collect::<Vec<_>>()
        .join(", ");

    HEADING_STRUCTURE.score(findings, value)
}

/// Scores alt-text coverage of `<img>` elements
///
/// An empty `alt` counts as missing. The score is the rounded coverage
/// percentage; coverage above 80% is a warning, anything else a failure.
pub fn image_alt_text(document: &Document) -> MetricResult {
    let images = document.select("img");
    let total = images.len();
    let with_alt = images
        .iter()
        .filter(|img| img.value().attr("alt").is_some_and(|alt| !alt.is_empty()))
        .count();
    let missing = total - with_alt;

    let mut findings = Vec::new();
    if total > 0 && missing > 0 {
        let coverage = with_alt as f64 / total as f64 * 100.0;
        let status = if coverage > 80.0 {
            MetricStatus::Warning
        } else {
            MetricStatus::Fail
        };
        findings.push(Finding::set(
            coverage.round() as i32,
            status,
            format!("{} images missing alt text", missing),
        ));
    }

    IMAGE_ALT_TEXT.score(findings, format!("{} images, {} with alt text", total, with_alt))
}

/// Scores the amount of text in `<body>`
pub fn content_length(document: &Document) -> MetricResult {
    let words = word_count(&document.text_of_all("body"));

    let mut findings = Vec::new();
    if words < 300 {
        findings.push(Finding::set(
            40,
            MetricStatus::Fail,
            format!("Content is very short ({} words)", words),
        ));
    } else if words < 500 {
        findings.push(Finding::set(
            70,
            MetricStatus::Warning,
            format!("Content is short ({} words)", words),
        ));
    }

    CONTENT_LENGTH.score(findings, format!("{} words", words))
}

/// Collapses whitespace runs to single spaces, trims, and counts the pieces
/// between spaces. Blank text still counts as one (empty) word.
///
/// Whitespace is Unicode `White_Space`: U+0085 separates words and U+FEFF
/// does not.
fn word_count(text: &str) -> usize {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .split(' ')
        .count()
}
