//! Errors raised by matchers and by configuration loading.

use thiserror::Error;

/// Raised by a matcher that cannot evaluate the value it was handed.
///
/// This is different from a rejection: the matcher has no verdict at all,
/// e.g. because the value has an unexpected shape. It is reported as an
/// assertion failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MatchError {
    message: String,
}

impl MatchError {
    /// Creates a match error carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error type for loading handler configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment flag holds something other than a boolean.
    #[error("Invalid value for {var}: {value:?} (expected true, false, 1 or 0)")]
    InvalidFlag {
        /// Environment variable name.
        var: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A JSON configuration document could not be parsed.
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
