//! Scripted estimator serving queued results.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::analysis::CompletionAnalysis;
use crate::ports::estimator::{CompletionEstimator, EstimateFuture};

/// Estimator that pops pre-scripted results from a queue.
///
/// Each call consumes the front of the queue; an empty queue produces an
/// error, which exercises the caller's fallback path. The call counter lets
/// tests assert how often the "remote" was actually invoked (cache hits and
/// coalesced calls never reach it).
#[derive(Default)]
pub struct ScriptedEstimator {
    responses: Mutex<VecDeque<Result<CompletionAnalysis, String>>>,
    calls: AtomicUsize,
}

impl ScriptedEstimator {
    /// Creates an estimator with an empty script; every call fails until a
    /// response is pushed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful analysis.
    pub fn push_ok(&self, analysis: CompletionAnalysis) {
        self.responses
            .lock()
            .expect("scripted estimator lock poisoned")
            .push_back(Ok(analysis));
    }

    /// Queues a failure with the given message.
    pub fn push_err(&self, message: impl Into<String>) {
        self.responses
            .lock()
            .expect("scripted estimator lock poisoned")
            .push_back(Err(message.into()));
    }

    /// How many times `estimate` has been invoked.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CompletionEstimator for ScriptedEstimator {
    fn estimate(&self, _request: &crate::analysis::EstimateRequest) -> EstimateFuture<'_> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .responses
            .lock()
            .expect("scripted estimator lock poisoned")
            .pop_front();

        Box::pin(async move {
            match next {
                Some(Ok(analysis)) => Ok(analysis),
                Some(Err(message)) => Err(message.into()),
                None => Err("scripted estimator has no queued response".into()),
            }
        })
    }
}
