//! Signal extractors: pure functions from an issue record and a point in
//! time to derived health signals.
//!
//! Nothing here stores state or performs I/O. Every result is a function of
//! the inputs and the supplied `now`, so callers thread a [`Clock`] value
//! through and tests pass a fixed instant.
//!
//! [`Clock`]: crate::ports::Clock

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Issue, IssueState};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Coarse recency classification of an assignee based on last update time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityTier {
    /// Last update under one day ago.
    Active,
    /// Last update under seven days ago.
    Away,
    /// Last update seven or more days ago.
    Offline,
}

/// Fractional days elapsed between `since` and `now`.
#[allow(clippy::cast_precision_loss)]
fn elapsed_days(since: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - since).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Whether an issue is claimed but abandoned.
///
/// True only when the issue is open, has an assignee (primary or in the
/// assignee set), has no linked pull request, and its last update is more
/// than `threshold_days` before `now`. A linked pull request is treated as
/// proof of activity regardless of elapsed time. The boundary is strict:
/// exactly `threshold_days` of inactivity is not stale.
#[must_use]
pub fn is_stale(issue: &Issue, threshold_days: f64, now: DateTime<Utc>) -> bool {
    if !issue.has_assignee() {
        return false;
    }
    if issue.state == IssueState::Closed {
        return false;
    }
    if issue.pull_request.is_some() {
        return false;
    }
    elapsed_days(issue.updated_at, now) > threshold_days
}

/// Classifies an assignee's recency from the issue's last update time.
///
/// Boundaries are strict `<`: exactly 1.0 days resolves to [`ActivityTier::Away`]
/// and exactly 7.0 days to [`ActivityTier::Offline`]. Only meaningful when an
/// assignee exists; callers guard on [`Issue::has_assignee`].
#[must_use]
pub fn activity_tier(last_update: DateTime<Utc>, now: DateTime<Utc>) -> ActivityTier {
    let days = elapsed_days(last_update, now);
    if days < 1.0 {
        ActivityTier::Active
    } else if days < 7.0 {
        ActivityTier::Away
    } else {
        ActivityTier::Offline
    }
}
