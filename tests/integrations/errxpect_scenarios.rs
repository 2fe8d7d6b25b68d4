//! Integration tests for assertions on error-shaped multi-value results
//!
//! Tests components: ResultAssertion, TrailingValidityCheck
//! Tests APIs: errxpect_with, with_offset, with_description, to, not_to,
//!             to_not, should, should_not
//! Tests features: consistency checking, negation, descriptions, offsets

use errxpect::{check_result, errxpect_with, ValidityError, BASE_OFFSET};
use errxpect_integration_tests::utils::expect_success;
use errxpect_test_utils::assertions::{
    assert_all_failures_contain, assert_no_failures, assert_single_failure_with_prefix,
};
use errxpect_test_utils::fixtures::{
    equal, have_occurred, lookup, returns_err, returns_inconsistent, returns_ok, succeed,
    Undecidable,
};
use errxpect_test_utils::{init_test_tracing, intercept_failures, FailureRecorder, FixtureError};
use pretty_assertions::assert_eq;

#[test]
fn succeeds_with_empty_status() {
    init_test_tracing();

    let messages = intercept_failures(|recorder| {
        // Zero payloads...
        assert!(errxpect_with(recorder, returns_ok(String::new())).to(succeed()));
        assert!(errxpect_with(recorder, returns_ok(String::new())).should(succeed()));
        assert!(errxpect_with(recorder, returns_ok(""))
            .with_description("DOH!")
            .to(succeed()));
        // ...and non-zero payloads next to an empty status.
        assert!(errxpect_with(recorder, returns_ok("true"))
            .with_description("DOH!")
            .to(succeed()));
        assert!(errxpect_with(recorder, lookup("answer")).to(succeed()));
    });

    assert_no_failures(&messages).unwrap();
}

#[test]
fn single_status_slot_is_always_consistent() {
    init_test_tracing();

    assert_eq!(check_result(&(None::<FixtureError>,)), Ok(()));
    assert_eq!(check_result(&(FixtureError::status("42"),)), Ok(()));
}

#[test]
fn have_occurred_and_not_succeed_with_failure_status() {
    init_test_tracing();

    let messages = intercept_failures(|recorder| {
        assert!(errxpect_with(recorder, returns_err::<String>("42")).to(have_occurred()));
        assert!(errxpect_with(recorder, returns_err::<String>("42")).to_not(succeed()));
        assert!(errxpect_with(recorder, returns_err::<String>("42")).not_to(succeed()));
        assert!(errxpect_with(recorder, returns_err::<String>("42")).should_not(succeed()));
        assert!(errxpect_with(recorder, lookup("")).to(have_occurred()));
    });

    assert_no_failures(&messages).unwrap();
}

#[test]
fn passes_on_an_additional_description() {
    init_test_tracing();

    let messages = intercept_failures(|recorder| {
        errxpect_with(recorder, returns_ok(""))
            .with_description("DOH!")
            .to(have_occurred());
    });

    assert_single_failure_with_prefix(&messages, "DOH!\nExpected an error to have occurred.")
        .unwrap();
}

#[test]
fn rejects_non_zero_values_next_to_a_failure() {
    init_test_tracing();

    let messages = intercept_failures(|recorder| {
        let ok = errxpect_with(recorder, returns_inconsistent("foobar", "dOH! "))
            .with_description("DOH!")
            .to(succeed());
        assert!(!ok);
    });

    assert_single_failure_with_prefix(
        &messages,
        "DOH!\nUnexpected non-nil/non-zero actual non-error argument at index 1:",
    )
    .unwrap();
    assert_all_failures_contain(&messages, "<&str>: \"foobar\"").unwrap();
}

#[test]
fn inconsistent_result_fails_even_for_accepting_matchers() {
    init_test_tracing();

    // Both matchers would accept the status on its own.
    let messages = intercept_failures(|recorder| {
        assert!(!errxpect_with(recorder, lookup("missing")).to(have_occurred()));
        assert!(!errxpect_with(recorder, lookup("missing")).not_to(succeed()));
    });

    assert_eq!(messages.len(), 2);
    assert_all_failures_contain(&messages, "at index 1:").unwrap();
    assert_all_failures_contain(&messages, "String>: \"missing\"").unwrap();
}

#[test]
fn first_offending_slot_is_reported() {
    init_test_tracing();

    let result = (String::new(), 7u32, "second", FixtureError::status("boom"));
    match check_result(&result) {
        Err(ValidityError::NonZeroPreceding { position, repr, .. }) => {
            assert_eq!(position, 1);
            assert_eq!(repr, "7");
        }
        other => panic!("unexpected check outcome: {other:?}"),
    }
}

#[test]
fn empty_result_is_a_caller_error() {
    init_test_tracing();

    let messages = intercept_failures(|recorder| {
        assert!(!errxpect_with(recorder, ()).to(equal(())));
        assert!(!errxpect_with(recorder, ()).not_to(equal(())));
    });

    assert_eq!(messages, vec!["no return values".to_string(); 2]);
}

#[test]
fn negation_is_a_true_complement() {
    init_test_tracing();

    let recorder = FailureRecorder::new();
    let results = [
        returns_ok(String::new()),
        returns_ok("payload".to_string()),
        returns_err::<String>("42"),
    ];
    for result in results {
        let affirmative = errxpect_with(&recorder, result.clone()).to(succeed());
        let negated = errxpect_with(&recorder, result).not_to(succeed());
        assert_eq!(affirmative, !negated);
    }
    assert_eq!(recorder.len(), 3);
}

#[test]
fn matcher_errors_are_reported_in_both_directions() {
    init_test_tracing();

    let messages = intercept_failures(|recorder| {
        assert!(!errxpect_with(recorder, returns_ok(1u8)).to(Undecidable));
        assert!(!errxpect_with(recorder, returns_ok(1u8)).not_to(Undecidable));
    });

    assert_eq!(messages.len(), 2);
    assert_all_failures_contain(&messages, "cannot judge").unwrap();
}

#[test]
fn offset_from_helper_is_added_to_base() {
    init_test_tracing();

    let recorder = FailureRecorder::new();
    let line = line!() + 1;
    assert!(!expect_success(&recorder, returns_err::<u8>("42")));

    let failures = recorder.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].offset, BASE_OFFSET + 1);
    assert_eq!(failures[0].location.line(), line);
    assert!(failures[0].location.file().ends_with("errxpect_scenarios.rs"));
}

#[test]
fn equal_matches_the_status_slot() {
    init_test_tracing();

    let messages = intercept_failures(|recorder| {
        assert!(errxpect_with(recorder, returns_err::<Vec<u8>>("42"))
            .to(equal(FixtureError::status("42"))));
        assert!(errxpect_with(recorder, returns_err::<Vec<u8>>("42"))
            .not_to(equal(FixtureError::status("43"))));
    });

    assert_no_failures(&messages).unwrap();
}
