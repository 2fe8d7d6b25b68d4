//! Fail handler that records failures instead of panicking.

use errxpect::{FailHandler, Failure};
use std::cell::RefCell;
use std::fmt;
use tracing::debug;

/// Collects every failure reported to it.
///
/// Single-threaded by construction: each test builds its own recorder.
#[derive(Default)]
pub struct FailureRecorder {
    failures: RefCell<Vec<Failure>>,
}

impl fmt::Debug for FailureRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailureRecorder")
            .field("failure_count", &self.failures.borrow().len())
            .finish()
    }
}

impl FailureRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded failures, oldest first.
    pub fn failures(&self) -> Vec<Failure> {
        self.failures.borrow().clone()
    }

    /// Messages of the recorded failures, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.failures
            .borrow()
            .iter()
            .map(|failure| failure.message.clone())
            .collect()
    }

    /// Number of recorded failures.
    pub fn len(&self) -> usize {
        self.failures.borrow().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.failures.borrow().is_empty()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<Failure> {
        self.failures.take()
    }
}

impl FailHandler for FailureRecorder {
    fn fail(&self, failure: Failure) {
        debug!(
            location = %failure.location,
            offset = failure.offset,
            "recording failure"
        );
        self.failures.borrow_mut().push(failure);
    }
}

/// Runs `body` against a fresh recorder and returns the failure messages it
/// collected.
///
/// ```
/// use errxpect::{errxpect_with, predicate};
/// use errxpect_test_utils::intercept_failures;
///
/// let messages = intercept_failures(|recorder| {
///     errxpect_with(recorder, ("", None::<std::io::Error>))
///         .to(predicate("fail", |status: &Option<std::io::Error>| status.is_some()));
/// });
/// assert_eq!(messages.len(), 1);
/// ```
pub fn intercept_failures<F>(body: F) -> Vec<String>
where
    F: FnOnce(&FailureRecorder),
{
    let recorder = FailureRecorder::new();
    body(&recorder);
    recorder.messages()
}
