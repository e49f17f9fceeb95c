//! Tunable thresholds and windows for the analytics core.

use std::time::Duration;

/// Configuration for staleness, aggregation, caching, and the estimator call.
///
/// Every time-dependent constant lives here rather than inline so tests can
/// inject tight windows alongside a fixed clock.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsConfig {
    /// Days of inactivity after which an open, assigned, PR-less issue is
    /// considered stale. Strictly greater-than comparison.
    pub stale_threshold_days: f64,
    /// Contribution count above which a contributor counts as highly active.
    /// Strictly greater-than comparison.
    pub highly_active_cutoff: u64,
    /// How long a computed analysis stays valid for the same issue.
    pub cache_ttl: Duration,
    /// Upper bound on a single estimator call; a hung remote service must
    /// not stall the fallback path.
    pub estimator_timeout: Duration,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            stale_threshold_days: 7.0,
            highly_active_cutoff: 10,
            cache_ttl: Duration::from_secs(5 * 60),
            estimator_timeout: Duration::from_secs(30),
        }
    }
}
