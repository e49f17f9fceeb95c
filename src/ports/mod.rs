//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the analytics core and an
//! external system: time, and the remote completion estimator. Implementations
//! live in `src/adapters/`.

pub mod clock;
pub mod estimator;

pub use clock::Clock;
pub use estimator::{BoxError, CompletionEstimator, EstimateFuture};
