//! Rule-fold scoring shared by every metric
//!
//! A metric produces an ordered list of [`Finding`]s. Folding starts from a
//! perfect score with status `pass`; each finding applies its penalty and, if
//! it carries one, overwrites the status. The last status written wins.

use crate::metrics::{MetricResult, MetricStatus};

/// How a finding changes the running score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Penalty {
    /// Subtract points from the running score
    Deduct(i32),
    /// Replace the running score
    SetTo(i32),
}

/// One violated rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub penalty: Penalty,
    pub status: Option<MetricStatus>,
    pub issue: String,
}

impl Finding {
    /// Subtracts `points` and sets the status
    pub fn deduct(points: i32, status: MetricStatus, issue: impl Into<String>) -> Self {
        Self {
            penalty: Penalty::Deduct(points),
            status: Some(status),
            issue: issue.into(),
        }
    }

    /// Replaces the score and sets the status
    pub fn set(score: i32, status: MetricStatus, issue: impl Into<String>) -> Self {
        Self {
            penalty: Penalty::SetTo(score),
            status: Some(status),
            issue: issue.into(),
        }
    }

    /// Subtracts `points` without touching the status
    ///
    /// Used by metrics graded on their final score.
    pub fn penalty(points: i32, issue: impl Into<String>) -> Self {
        Self {
            penalty: Penalty::Deduct(points),
            status: None,
            issue: issue.into(),
        }
    }
}

/// How the final status is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grading {
    /// The status written by the last finding stands
    PerRule,
    /// Below 100, the score alone decides: warning above the threshold,
    /// fail at or below it
    ByScore { warning_above: i32 },
}

/// When recommendations are attached to a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    WhenPenalized(&'static [&'static str]),
    Always(&'static [&'static str]),
}

/// Static definition of a metric: identity plus scoring policy
#[derive(Debug, Clone, Copy)]
pub struct Metric {
    pub name: &'static str,
    pub description: &'static str,
    pub grading: Grading,
    pub advice: Advice,
}

impl Metric {
    /// Folds findings into a finished result
    pub fn score(&self, findings: Vec<Finding>, value: impl Into<String>) -> MetricResult {
        let mut score = 100;
        let mut status = MetricStatus::Pass;
        let mut issues = Vec::with_capacity(findings.len());

        for finding in findings {
            score = match finding.penalty {
                Penalty::Deduct(points) => score - points,
                Penalty::SetTo(value) => value,
            };
            if let Some(next) = finding.status {
                status = next;
            }
            issues.push(finding.issue);
        }

        let score = score.clamp(0, 100);

        if let Grading::ByScore { warning_above } = self.grading {
            if score < 100 {
                status = if score > warning_above {
                    MetricStatus::Warning
                } else {
                    MetricStatus::Fail
                };
            }
        }

        let recommendations = match self.advice {
            Advice::Always(list) => to_strings(list),
            Advice::WhenPenalized(list) if score < 100 => to_strings(list),
            Advice::WhenPenalized(_) => Vec::new(),
        };

        MetricResult {
            name: self.name,
            description: self.description,
            score: score as u8,
            status,
            issues,
            recommendations,
            value: value.into(),
        }
    }
}

fn to_strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
