//! Per-issue memoization of completion analyses.
//!
//! A plain time-bounded map: each issue id holds at most one outcome plus the
//! instant it was computed, valid for a fixed freshness window. Entries are
//! keyed by issue identity only, so upstream signal changes within the window
//! still serve the memoized outcome. Bounding call volume to the external
//! estimator is worth the loss of perfect freshness.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::analyzer::AnalysisOutcome;

struct Entry {
    computed_at: DateTime<Utc>,
    outcome: AnalysisOutcome,
}

/// Time-bounded memo of analysis outcomes keyed by issue id.
///
/// Each issue gets its own async slot, so concurrent requests for the same
/// issue collapse to a single in-flight computation while distinct issues
/// proceed in parallel.
pub struct AnalysisCache {
    ttl: Duration,
    slots: Mutex<HashMap<u64, Arc<tokio::sync::Mutex<Option<Entry>>>>>,
}

impl AnalysisCache {
    /// Creates a cache whose entries stay fresh for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, slots: Mutex::new(HashMap::new()) }
    }

    fn slot(&self, issue_id: u64) -> Arc<tokio::sync::Mutex<Option<Entry>>> {
        let mut slots = self.slots.lock().expect("cache slot map lock poisoned");
        Arc::clone(slots.entry(issue_id).or_default())
    }

    fn is_fresh(&self, computed_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        // A negative span (entry computed after `now`, e.g. under a rewound
        // test clock) counts as expired.
        (now - computed_at).to_std().is_ok_and(|elapsed| elapsed < self.ttl)
    }

    /// Returns the memoized outcome for `issue_id` if still fresh at `now`,
    /// otherwise awaits `compute`, stores its result, and returns it.
    ///
    /// Holding the per-issue slot lock across `compute` is what coalesces
    /// racing callers: late arrivals block on the lock and then hit the entry
    /// the winner stored.
    pub async fn get_or_compute<F>(
        &self,
        issue_id: u64,
        now: DateTime<Utc>,
        compute: F,
    ) -> AnalysisOutcome
    where
        F: Future<Output = AnalysisOutcome>,
    {
        let slot = self.slot(issue_id);
        let mut guard = slot.lock().await;

        if let Some(entry) = guard.as_ref() {
            if self.is_fresh(entry.computed_at, now) {
                tracing::debug!(issue_id, "serving memoized analysis");
                return entry.outcome.clone();
            }
        }

        let outcome = compute.await;
        *guard = Some(Entry { computed_at: now, outcome: outcome.clone() });
        outcome
    }
}
