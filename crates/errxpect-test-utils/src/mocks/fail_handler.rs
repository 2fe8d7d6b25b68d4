//! Mock implementation of the FailHandler trait.

use errxpect::{FailHandler, Failure};
use mockall::mock;

// Generate the mock implementation
mock! {
    pub FailHandler {}

    impl FailHandler for FailHandler {
        fn fail(&self, failure: Failure);
    }
}

/// Creates a mock handler that must never be called.
pub fn create_silent_fail_handler() -> MockFailHandler {
    let mut mock = MockFailHandler::new();
    mock.expect_fail().never();
    mock
}

/// Creates a mock handler expecting exactly one failure whose message starts
/// with `prefix`.
pub fn create_single_failure_handler(prefix: &str) -> MockFailHandler {
    let prefix = prefix.to_string();
    let mut mock = MockFailHandler::new();
    mock.expect_fail()
        .withf(move |failure: &Failure| failure.message.starts_with(&prefix))
        .times(1)
        .return_const(());
    mock
}
