//! Test implementations (fakes) of the errxpect seams.
//!
//! These operate in-memory and record what the library reports, so tests
//! can assert on failures without unwinding.

pub mod failure_recorder;

pub use failure_recorder::*;
