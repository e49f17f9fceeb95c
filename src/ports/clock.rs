//! Clock port for obtaining the current time.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// Staleness and activity classification are functions of *when* they are
/// evaluated, not stored facts. Abstracting time access lets tests and
/// consumers substitute a fixed clock and get deterministic verdicts.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
