use errxpect::ZeroValue;
use thiserror::Error;

/// Error type returned in the status slot of fixture results
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// Generic failure carrying a message
    #[error("{0}")]
    Message(String),

    /// Lookup failure
    #[error("Not found: {0}")]
    NotFound(String),
}

impl FixtureError {
    /// Status slot holding a [`FixtureError::Message`].
    pub fn status(message: &str) -> Option<FixtureError> {
        Some(FixtureError::Message(message.to_string()))
    }
}

impl ZeroValue for FixtureError {
    fn is_zero(&self) -> bool {
        false
    }
}
