//! Scan report types

use crate::metrics::{MetricResult, MetricStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The outcome of a successful scan
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    /// Domain as entered by the user (trimmed)
    pub domain: String,

    /// First URL requested for the page
    pub requested_url: String,

    /// URL the page was finally served from, after redirects and fallback
    pub final_url: String,

    /// Origin of the final URL, without a trailing slash
    pub base_url: String,

    /// Rounded mean of all metric scores
    pub overall_score: u8,

    /// One result per registered metric, in registry order
    pub metrics: Vec<MetricResult>,

    pub scanned_at: DateTime<Utc>,
}

/// Number of metrics per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pass: usize,
    pub warning: usize,
    pub fail: usize,
}

impl ScanReport {
    /// Counts metrics by status
    pub fn status_counts(&self) -> StatusCounts {
        self.metrics
            .iter()
            .fold(StatusCounts::default(), |mut counts, metric| {
                match metric.status {
                    MetricStatus::Pass => counts.pass += 1,
                    MetricStatus::Warning => counts.warning += 1,
                    MetricStatus::Fail => counts.fail += 1,
                }
                counts
            })
    }

    /// Returns the label for the overall score
    pub fn band(&self) -> &'static str {
        score_band(self.overall_score)
    }
}

/// Labels a score: 80 and above is "Good", 60 and above "Needs Improvement"
pub fn score_band(score: u8) -> &'static str {
    match score {
        80.. => "Good",
        60..=79 => "Needs Improvement",
        _ => "Poor",
    }
}
