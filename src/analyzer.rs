//! The completion analyzer: estimator calls, fallback, and memoization.
//!
//! [`IssueAnalyzer`] is the facade the presentation layer talks to. It owns
//! the clock and estimator ports plus the analysis cache, and exposes the
//! signal extractors and aggregator with the configured thresholds already
//! applied.

use std::sync::Arc;

use crate::analysis::{AssigneeActivity, CompletionAnalysis, EstimateRequest, IssueSummary, RepoStats};
use crate::cache::AnalysisCache;
use crate::config::AnalyticsConfig;
use crate::metrics::{compute_repository_metrics, RepositoryMetrics};
use crate::model::{Contributor, Issue};
use crate::ports::{Clock, CompletionEstimator};
use crate::signals::{activity_tier, is_stale, ActivityTier};

/// A completion analysis together with its provenance.
///
/// Analysis never fails: an estimator error degrades to the fixed neutral
/// fallback. Carrying the provenance in the type makes the always-succeeds
/// contract explicit instead of hiding it behind swallowed errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// The remote estimator produced this analysis.
    Estimated(CompletionAnalysis),
    /// The estimator failed; this is the fixed neutral estimate.
    Fallback(CompletionAnalysis),
}

impl AnalysisOutcome {
    /// The analysis, regardless of provenance.
    #[must_use]
    pub fn analysis(&self) -> &CompletionAnalysis {
        match self {
            Self::Estimated(analysis) | Self::Fallback(analysis) => analysis,
        }
    }

    /// Consumes the outcome, returning the analysis.
    #[must_use]
    pub fn into_analysis(self) -> CompletionAnalysis {
        match self {
            Self::Estimated(analysis) | Self::Fallback(analysis) => analysis,
        }
    }

    /// True when this outcome is the neutral fallback.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Derives per-issue and repository-level health signals from a tracker
/// snapshot.
pub struct IssueAnalyzer {
    estimator: Arc<dyn CompletionEstimator>,
    clock: Arc<dyn Clock>,
    cache: AnalysisCache,
    config: AnalyticsConfig,
}

impl IssueAnalyzer {
    /// Creates an analyzer over the given ports and configuration.
    #[must_use]
    pub fn new(
        estimator: Arc<dyn CompletionEstimator>,
        clock: Arc<dyn Clock>,
        config: AnalyticsConfig,
    ) -> Self {
        let cache = AnalysisCache::new(config.cache_ttl);
        Self { estimator, clock, cache, config }
    }

    /// Whether the issue is claimed but abandoned, judged at the current
    /// instant with the configured threshold.
    #[must_use]
    pub fn is_stale(&self, issue: &Issue) -> bool {
        is_stale(issue, self.config.stale_threshold_days, self.clock.now())
    }

    /// The assignee's activity tier, or `None` when the issue has no
    /// assignee (the tier is undefined without one).
    #[must_use]
    pub fn assignee_activity_tier(&self, issue: &Issue) -> Option<ActivityTier> {
        issue.has_assignee().then(|| activity_tier(issue.updated_at, self.clock.now()))
    }

    /// Aggregates the snapshot into repository-level metrics.
    #[must_use]
    pub fn repository_metrics(
        &self,
        issues: &[Issue],
        contributors: &[Contributor],
    ) -> RepositoryMetrics {
        compute_repository_metrics(issues, contributors, self.clock.now(), &self.config)
    }

    /// Produces a completion analysis for an open, assigned issue.
    ///
    /// Callers are expected to skip unassigned or closed issues; estimation
    /// for those is not part of this contract. Results are memoized per issue
    /// id for the configured freshness window, and concurrent calls for the
    /// same issue collapse to one estimator invocation. Estimator failures of
    /// any kind are logged and degrade to [`AnalysisOutcome::Fallback`]; this
    /// method never fails.
    pub async fn analyze(
        &self,
        issue: &Issue,
        assignee_activity: AssigneeActivity,
        repo_stats: RepoStats,
    ) -> AnalysisOutcome {
        let request = EstimateRequest {
            issue: IssueSummary::from_issue(issue),
            assignee_activity,
            repo_stats,
        };
        let now = self.clock.now();
        let issue_number = issue.number;

        self.cache
            .get_or_compute(issue.id, now, async {
                match self.estimator.estimate(&request).await {
                    Ok(analysis) => AnalysisOutcome::Estimated(analysis),
                    Err(error) => {
                        tracing::warn!(issue = issue_number, %error, "estimator failed, serving fallback analysis");
                        AnalysisOutcome::Fallback(CompletionAnalysis::fallback())
                    }
                }
            })
            .await
    }
}
