//! Testing utilities for errxpect.
//!
//! This crate provides the pieces the errxpect test suites share: a fake
//! fail handler that records failures instead of panicking, mockall mocks of
//! the handler and matcher seams, fixture matchers and results, assertion
//! helpers over recorded failures, and tracing setup.

pub mod assertions;
pub mod error;
pub mod fixtures;
pub mod implementations;
pub mod mocks;
pub mod util;

/// Re-export commonly used types for convenience
pub use mockall;

pub use error::FixtureError;
pub use implementations::{intercept_failures, FailureRecorder};
pub use util::init_test_tracing;
