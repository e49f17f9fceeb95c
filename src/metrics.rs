//! Repository-level aggregation over an issue and contributor snapshot.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::AnalyticsConfig;
use crate::model::{Contributor, Issue, IssueState};
use crate::signals::is_stale;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Aggregate health metrics for one repository snapshot.
///
/// Rates are percentages in `0.0..=100.0`. Every numeric field is defined for
/// every input, including the empty snapshot; none is ever NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryMetrics {
    /// Total issues in the snapshot.
    pub total_issues: usize,
    /// Issues with state `open`.
    pub open_issues: usize,
    /// Issues with state `closed`.
    pub closed_issues: usize,
    /// Open, assigned, PR-less issues past the staleness threshold.
    pub stale_issues: usize,
    /// Issues with a linked pull request.
    pub pr_linked_issues: usize,
    /// Contributors in the snapshot.
    pub contributors: usize,
    /// Closed issues as a percentage of all issues.
    pub closure_rate: f64,
    /// Mean days from creation to close over closed issues.
    pub avg_days_to_close: f64,
    /// Stale issues as a percentage of open issues.
    pub stale_rate: f64,
    /// PR-linked issues as a percentage of open issues.
    pub pr_link_rate: f64,
    /// Contributors whose contribution count exceeds the configured cutoff.
    pub highly_active_contributors: usize,
}

#[allow(clippy::cast_precision_loss)]
fn percentage(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64 * 100.0
    }
}

/// Reduces an issue and contributor snapshot to repository-level metrics.
///
/// Pure and synchronous: the result is deterministic for identical inputs and
/// an identical `now` (only the staleness count is time-sensitive). Rates
/// with a zero denominator are 0, not NaN. The average-days-to-close
/// denominator is floored at 1, so a snapshot with no closed issues reports
/// an average of 0 rather than failing.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_repository_metrics(
    issues: &[Issue],
    contributors: &[Contributor],
    now: DateTime<Utc>,
    config: &AnalyticsConfig,
) -> RepositoryMetrics {
    let open = issues.iter().filter(|issue| issue.state == IssueState::Open).count();
    let closed = issues.iter().filter(|issue| issue.state == IssueState::Closed).count();
    let stale = issues
        .iter()
        .filter(|issue| is_stale(issue, config.stale_threshold_days, now))
        .count();
    let pr_linked = issues.iter().filter(|issue| issue.pull_request.is_some()).count();

    let total_close_days: f64 = issues
        .iter()
        .filter(|issue| issue.state == IssueState::Closed)
        .filter_map(|issue| issue.closed_at.map(|closed_at| closed_at - issue.created_at))
        .map(|span| span.num_milliseconds() as f64 / MILLIS_PER_DAY)
        .sum();
    let avg_days_to_close = total_close_days / closed.max(1) as f64;

    let highly_active = contributors
        .iter()
        .filter(|contributor| contributor.contributions > config.highly_active_cutoff)
        .count();

    RepositoryMetrics {
        total_issues: issues.len(),
        open_issues: open,
        closed_issues: closed,
        stale_issues: stale,
        pr_linked_issues: pr_linked,
        contributors: contributors.len(),
        closure_rate: percentage(closed, issues.len()),
        avg_days_to_close,
        stale_rate: percentage(stale, open),
        pr_link_rate: percentage(pr_linked, open),
        highly_active_contributors: highly_active,
    }
}
