//! Mock implementations of the errxpect seams.
//!
//! These allow tests to set expectations on how often, and with what, the
//! library calls into fail handlers and matchers.

pub mod fail_handler;
pub mod status_matcher;

// Re-export all mocks and their creator functions for easy access
pub use fail_handler::*;
pub use status_matcher::*;
