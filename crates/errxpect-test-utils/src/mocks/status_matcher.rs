//! Mock implementation of a Matcher over fixture status slots.

use crate::error::FixtureError;
use errxpect::{MatchError, Matcher};
use mockall::mock;

// Generate the mock implementation
mock! {
    pub StatusMatcher {}

    impl Matcher<Option<FixtureError>> for StatusMatcher {
        fn matches(&self, actual: &Option<FixtureError>) -> Result<bool, MatchError>;
        fn failure_message(&self, actual: &Option<FixtureError>) -> String;
        fn negated_failure_message(&self, actual: &Option<FixtureError>) -> String;
    }
}

/// Creates a mock matcher that must never be evaluated.
pub fn create_unreachable_matcher() -> MockStatusMatcher {
    let mut mock = MockStatusMatcher::new();
    mock.expect_matches().never();
    mock.expect_failure_message().never();
    mock.expect_negated_failure_message().never();
    mock
}

/// Creates a mock matcher returning `verdict` once, with fixed messages.
pub fn create_mock_status_matcher(verdict: bool) -> MockStatusMatcher {
    let mut mock = MockStatusMatcher::new();
    mock.expect_matches().times(1).returning(move |_| Ok(verdict));
    mock.expect_failure_message()
        .returning(|_| "mock matcher rejected".to_string());
    mock.expect_negated_failure_message()
        .returning(|_| "mock matcher accepted".to_string());
    mock
}
