//! Plain-text terminal output

use crate::output::suggestions;
use crate::output::traits::{OutputResult, Renderer};
use crate::scanner::{ScanError, ScanReport};

/// Renders reports for reading in a terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render_report(&self, report: &ScanReport) -> OutputResult<String> {
        Ok(format_text_report(report))
    }

    fn render_error(&self, error: &ScanError) -> OutputResult<String> {
        Ok(format_text_error(error))
    }
}

/// Formats a report as indented plain text
pub fn format_text_report(report: &ScanReport) -> String {
    let mut out = String::new();
    let counts = report.status_counts();

    out.push_str(&format!("=== SEO Report: {} ===\n\n", report.domain));
    out.push_str(&format!("URL: {}\n", report.final_url));
    out.push_str(&format!("Scanned: {}\n", report.scanned_at.to_rfc3339()));
    out.push_str(&format!(
        "Overall score: {}/100 ({})\n",
        report.overall_score,
        report.band()
    ));
    out.push_str(&format!(
        "Pass: {}  Warning: {}  Fail: {}\n\n",
        counts.pass, counts.warning, counts.fail
    ));

    for metric in &report.metrics {
        out.push_str(&format!(
            "{:<22} {:>3}/100  {}\n",
            metric.name,
            metric.score,
            metric.status.as_str().to_uppercase()
        ));
        out.push_str(&format!("  Value: {}\n", metric.value));

        if !metric.issues.is_empty() {
            out.push_str("  Issues:\n");
            for issue in &metric.issues {
                out.push_str(&format!("    - {}\n", issue));
            }
        }
        if !metric.recommendations.is_empty() {
            out.push_str("  Recommendations:\n");
            for recommendation in &metric.recommendations {
                out.push_str(&format!("    * {}\n", recommendation));
            }
        }
        out.push('\n');
    }

    out
}

/// Formats a failure with its suggestions
pub fn format_text_error(error: &ScanError) -> String {
    let mut out = String::new();

    out.push_str(&format!("Scan failed: {}\n", error.message));
    out.push_str(&format!("  Domain: {}\n", error.domain));
    out.push_str(&format!("  Category: {}\n", error.category));
    out.push_str(&format!("  Time: {}\n", error.timestamp.to_rfc3339()));
    out.push_str("\nSuggestions:\n");
    for tip in suggestions(error.category) {
        out.push_str(&format!("  - {}\n", tip));
    }

    out
}
