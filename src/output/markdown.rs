//! Markdown report generation
//!
//! Produces a summary table of all metrics followed by one section per metric
//! that has issues or recommendations.

use crate::output::suggestions;
use crate::output::traits::{OutputResult, Renderer};
use crate::scanner::{ScanError, ScanReport};

/// Renders reports as GitHub-flavored markdown
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render_report(&self, report: &ScanReport) -> OutputResult<String> {
        Ok(format_markdown_report(report))
    }

    fn render_error(&self, error: &ScanError) -> OutputResult<String> {
        Ok(format_markdown_error(error))
    }
}

/// Escapes characters that would break a table cell
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

/// Formats a scan report as markdown
///
/// # Arguments
///
/// * `report` - The completed scan
///
/// # Returns
///
/// A formatted markdown string
pub fn format_markdown_report(report: &ScanReport) -> String {
    let mut md = String::new();
    let counts = report.status_counts();

    // Title
    md.push_str(&format!("# SEO Report: {}\n\n", report.domain));

    // Scan metadata
    md.push_str("## Summary\n\n");
    md.push_str(&format!("- **URL**: {}\n", report.final_url));
    md.push_str(&format!("- **Base URL**: {}\n", report.base_url));
    md.push_str(&format!("- **Scanned**: {}\n", report.scanned_at.to_rfc3339()));
    md.push_str(&format!(
        "- **Overall Score**: {}/100 ({})\n",
        report.overall_score,
        report.band()
    ));
    md.push_str(&format!(
        "- **Passed**: {} | **Warnings**: {} | **Failed**: {}\n\n",
        counts.pass, counts.warning, counts.fail
    ));

    // Metric table
    md.push_str("## Metrics\n\n");
    md.push_str("| Metric | Score | Status | Value |\n");
    md.push_str("|--------|-------|--------|-------|\n");
    for metric in &report.metrics {
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            metric.name,
            metric.score,
            metric.status,
            cell(&metric.value)
        ));
    }
    md.push('\n');

    // Details for anything that needs attention
    let flagged: Vec<_> = report
        .metrics
        .iter()
        .filter(|m| !m.issues.is_empty() || !m.recommendations.is_empty())
        .collect();

    if !flagged.is_empty() {
        md.push_str("## Details\n\n");
        for metric in flagged {
            md.push_str(&format!("### {}\n\n", metric.name));
            md.push_str(&format!("_{}_\n\n", metric.description));

            if !metric.issues.is_empty() {
                md.push_str("**Issues**\n\n");
                for issue in &metric.issues {
                    md.push_str(&format!("- {}\n", issue));
                }
                md.push('\n');
            }

            if !metric.recommendations.is_empty() {
                md.push_str("**Recommendations**\n\n");
                for recommendation in &metric.recommendations {
                    md.push_str(&format!("- {}\n", recommendation));
                }
                md.push('\n');
            }
        }
    }

    md
}

/// Formats a failed scan as markdown
pub fn format_markdown_error(error: &ScanError) -> String {
    let mut md = String::new();

    md.push_str("# SEO Scan Failed\n\n");
    md.push_str(&format!("- **Domain**: {}\n", error.domain));
    md.push_str(&format!("- **Error**: {}\n", error.message));
    md.push_str(&format!("- **Category**: {}\n", error.category));
    md.push_str(&format!("- **Time**: {}\n\n", error.timestamp.to_rfc3339()));

    md.push_str("## Suggestions\n\n");
    for tip in suggestions(error.category) {
        md.push_str(&format!("- {}\n", tip));
    }

    md
}
