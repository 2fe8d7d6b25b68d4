//!
//! errxpect - assertions on error-shaped multi-value results
//!
//! Functions that return a payload together with a trailing status slot,
//! such as `(String, u32, Option<io::Error>)`, can be asserted on in one go
//! without unpacking the tuple first:
//!
//! ```
//! use errxpect::{errxpect, predicate};
//! use std::io;
//!
//! fn multifoo() -> (String, u32, Option<io::Error>) {
//!     ("foo".to_string(), 42, None)
//! }
//!
//! let succeeded = predicate("succeed", |status: &Option<io::Error>| status.is_none());
//! errxpect(multifoo()).to(succeeded);
//! ```
//!
//! Before the matcher ever sees the status slot the whole result is checked
//! for consistency: when the status slot carries a failure, every other slot
//! must hold the zero value of its type. A result such as
//! `("foobar", Some(err))` fails the assertion no matter what the matcher
//! would have said.
//!
//! Helpers that assert on behalf of a test can shift the blamed call frame:
//!
//! ```
//! # use errxpect::{errxpect, predicate};
//! # use std::io;
//! # let succeeded = predicate("succeed", |status: &Option<io::Error>| status.is_none());
//! errxpect((0u8, None::<io::Error>)).with_offset(1).to(succeeded);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Assertion objects and their constructors
pub mod assertion;

/// Handler configuration
pub mod config;

/// Failure reporting
pub mod engine;

/// Error types
pub mod error;

/// Matcher seam and negation
pub mod matcher;

/// Multi-value results
pub mod multi_value;

/// Consistency check
pub mod validity;

/// Zero-value classification
pub mod zero;

pub use assertion::{errxpect, errxpect_with, errxpect_with_offset, ResultAssertion};
pub use config::HandlerConfig;
pub use engine::{
    report_assertion, report_failure, Description, FailHandler, Failure, PanicHandler, BASE_OFFSET,
};
pub use error::{ConfigError, MatchError};
pub use matcher::{not, predicate, Matcher, Not, Predicate};
pub use multi_value::MultiValue;
pub use validity::{check, check_result, checked_status, ValidityError};
pub use zero::{Value, ZeroValue};
