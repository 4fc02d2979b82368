//! JSON envelopes
//!
//! Success: `{ domain, url, baseUrl, overallScore, metrics, scanDate, success: true }`
//! Failure: `{ error, category, timestamp, success: false }`

use crate::metrics::MetricResult;
use crate::output::traits::{OutputResult, Renderer};
use crate::scanner::{ErrorCategory, ScanError, ScanReport};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Renders pretty-printed JSON envelopes
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SuccessEnvelope<'a> {
    domain: &'a str,
    url: &'a str,
    base_url: &'a str,
    overall_score: u8,
    metrics: &'a [MetricResult],
    scan_date: DateTime<Utc>,
    success: bool,
}

#[derive(Serialize)]
struct FailureEnvelope<'a> {
    error: &'a str,
    category: ErrorCategory,
    timestamp: DateTime<Utc>,
    success: bool,
}

impl Renderer for JsonRenderer {
    fn render_report(&self, report: &ScanReport) -> OutputResult<String> {
        let envelope = SuccessEnvelope {
            domain: &report.domain,
            url: &report.final_url,
            base_url: &report.base_url,
            overall_score: report.overall_score,
            metrics: &report.metrics,
            scan_date: report.scanned_at,
            success: true,
        };

        let mut json = serde_json::to_string_pretty(&envelope)?;
        json.push('\n');
        Ok(json)
    }

    fn render_error(&self, error: &ScanError) -> OutputResult<String> {
        let envelope = FailureEnvelope {
            error: &error.message,
            category: error.category,
            timestamp: error.timestamp,
            success: false,
        };

        let mut json = serde_json::to_string_pretty(&envelope)?;
        json.push('\n');
        Ok(json)
    }
}
