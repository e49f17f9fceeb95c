//! Deterministic adapters for tests and reproducible runs.

pub mod clock;
pub mod estimator;

pub use clock::FixedClock;
pub use estimator::ScriptedEstimator;
