//! Fixture matchers and results for the errxpect test suites.
//!
//! The library itself ships no matchers; these exist so the suites can
//! exercise it the way a caller would.

mod matchers;
mod results;

// Re-export all fixtures for easy access
pub use matchers::*;
pub use results::*;
