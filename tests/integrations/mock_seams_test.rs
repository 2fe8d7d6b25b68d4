//! Integration tests for the handler and matcher seams using mocks
//!
//! Tests components: ResultAssertion, FailHandler, Matcher
//! Tests features: matcher short-circuiting, single reporting, negation

use errxpect::{errxpect_with, Failure, BASE_OFFSET};
use errxpect_test_utils::fixtures::{returns_err, returns_inconsistent, returns_ok};
use errxpect_test_utils::init_test_tracing;
use errxpect_test_utils::mocks::{
    create_mock_status_matcher, create_silent_fail_handler, create_single_failure_handler,
    create_unreachable_matcher, MockFailHandler,
};

#[test]
fn inconsistent_result_never_reaches_the_matcher() {
    init_test_tracing();

    let handler = create_single_failure_handler("Unexpected non-nil/non-zero");
    let ok = errxpect_with(&handler, returns_inconsistent(42u64, "boom"))
        .to(create_unreachable_matcher());
    assert!(!ok);

    let handler = create_single_failure_handler("Unexpected non-nil/non-zero");
    let ok = errxpect_with(&handler, returns_inconsistent(vec![1u8], "boom"))
        .should_not(create_unreachable_matcher());
    assert!(!ok);
}

#[test]
fn accepted_status_reports_nothing() {
    init_test_tracing();

    let handler = create_silent_fail_handler();
    assert!(errxpect_with(&handler, returns_ok(42u64)).to(create_mock_status_matcher(true)));
    assert!(errxpect_with(&handler, returns_err::<u64>("42")).not_to(create_mock_status_matcher(false)));
}

#[test]
fn rejection_is_reported_once() {
    init_test_tracing();

    let handler = create_single_failure_handler("mock matcher rejected");
    assert!(!errxpect_with(&handler, returns_ok(0u8)).to(create_mock_status_matcher(false)));
}

#[test]
fn negated_rejection_uses_the_negated_message() {
    init_test_tracing();

    let handler = create_single_failure_handler("DOH!\nmock matcher accepted");
    let ok = errxpect_with(&handler, returns_ok(0u8))
        .with_description("DOH!")
        .to_not(create_mock_status_matcher(true));
    assert!(!ok);
}

#[test]
fn failure_carries_the_offset() {
    init_test_tracing();

    let mut handler = MockFailHandler::new();
    handler
        .expect_fail()
        .withf(|failure: &Failure| failure.offset == BASE_OFFSET + 5)
        .times(1)
        .return_const(());

    errxpect_with(&handler, returns_err::<u8>("42"))
        .with_offset(5)
        .to(create_mock_status_matcher(false));
}
