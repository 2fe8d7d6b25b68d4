// errxpect Integration Tests
//
// This crate contains integration tests for the errxpect workspace

/// Shared helpers for the integration tests
pub mod utils {
    use errxpect::{errxpect_with, FailHandler, MultiValue};
    use errxpect_test_utils::fixtures::succeed;
    use errxpect_test_utils::FixtureError;

    /// Asserts on behalf of a test that `values` succeeded.
    ///
    /// Uses an offset of 1 so that handlers walking the stack blame the
    /// test that called this helper.
    #[track_caller]
    pub fn expect_success<V, H>(handler: H, values: V) -> bool
    where
        V: MultiValue<Status = Option<FixtureError>>,
        H: FailHandler,
    {
        tracing::debug!("asserting success from helper");
        errxpect_with(handler, values).with_offset(1).to(succeed())
    }
}
