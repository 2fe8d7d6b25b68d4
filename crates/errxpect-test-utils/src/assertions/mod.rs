//! Assertion utilities for validating recorded failures.
//!
//! This module provides helper functions for checking what a
//! [`FailureRecorder`](crate::FailureRecorder) collected, making tests more
//! concise and readable.

mod failures;

// Re-export all assertion helpers for easy access
pub use failures::*;
