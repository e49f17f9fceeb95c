//! Completion estimator port for remote issue-outcome predictions.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use crate::analysis::{CompletionAnalysis, EstimateRequest};

/// Boxed error type carried across the estimator boundary.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Boxed future type alias used by [`CompletionEstimator`] to keep the trait
/// dyn-compatible.
pub type EstimateFuture<'a> =
    Pin<Box<dyn Future<Output = Result<CompletionAnalysis, BoxError>> + Send + 'a>>;

/// Predicts whether and when an assigned issue will be completed.
///
/// The core treats this as an opaque function from signals to analysis. Any
/// failure (network, timeout, missing credentials, malformed response) is
/// reported as an error; the caller degrades to a neutral fallback rather
/// than surfacing it.
pub trait CompletionEstimator: Send + Sync {
    /// Produces a completion analysis for the given request.
    ///
    /// # Errors
    ///
    /// Returns an error if the estimation service cannot be reached, times
    /// out, or returns a response that does not parse as a
    /// [`CompletionAnalysis`].
    fn estimate(&self, request: &EstimateRequest) -> EstimateFuture<'_>;
}
