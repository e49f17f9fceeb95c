//! Live adapters backed by the system clock and the HTTP estimation service.

pub mod clock;
pub mod estimator;

pub use clock::LiveClock;
pub use estimator::HttpEstimator;
