//! Integration tests for the default panicking handler
//!
//! Tests components: PanicHandler, HandlerConfig
//! Tests APIs: errxpect, errxpect_with_offset, errxpect_with

use errxpect::{errxpect, errxpect_with, errxpect_with_offset, HandlerConfig, PanicHandler};
use errxpect_test_utils::fixtures::{have_occurred, returns_err, returns_inconsistent, returns_ok, succeed};
use errxpect_test_utils::init_test_tracing;

fn quiet_handler() -> PanicHandler {
    PanicHandler::new(HandlerConfig {
        show_location: true,
        log_failures: false,
    })
}

#[test]
fn passing_assertions_do_not_panic() {
    init_test_tracing();

    assert!(errxpect(returns_ok("true")).to(succeed()));
    assert!(errxpect(returns_err::<String>("42")).to(have_occurred()));
    assert!(errxpect_with_offset(1, returns_ok(String::new())).should(succeed()));
}

#[test]
#[should_panic(expected = "DOH!\nExpected an error to have occurred.")]
fn rejection_panics_with_description() {
    init_test_tracing();

    errxpect_with(quiet_handler(), returns_ok(""))
        .with_description("DOH!")
        .to(have_occurred());
}

#[test]
#[should_panic(expected = "Unexpected non-nil/non-zero actual non-error argument at index 1")]
fn inconsistent_result_panics() {
    init_test_tracing();

    errxpect_with(quiet_handler(), returns_inconsistent("foobar", "dOH!")).to(have_occurred());
}

#[test]
#[should_panic(expected = "panic_handler_test.rs")]
fn panic_message_names_the_calling_test() {
    init_test_tracing();

    errxpect_with(quiet_handler(), returns_err::<u8>("42")).to(succeed());
}

#[test]
#[should_panic(expected = "no return values")]
fn empty_result_panics() {
    init_test_tracing();

    errxpect_with(quiet_handler(), ()).to(errxpect::predicate("be anything", |_: &()| true));
}
