//! Assertion utilities for validating recorded failure messages.

use thiserror::Error;

/// Error type for failure-message validation failures
#[derive(Debug, Error)]
pub enum FailureValidationError {
    #[error("Unexpected failure count: expected {expected}, got {actual}: {messages:?}")]
    Count {
        expected: usize,
        actual: usize,
        messages: Vec<String>,
    },

    #[error("Failure {index} does not start with {prefix:?}: {message:?}")]
    MissingPrefix {
        index: usize,
        prefix: String,
        message: String,
    },

    #[error("Failure {index} does not contain {needle:?}: {message:?}")]
    MissingText {
        index: usize,
        needle: String,
        message: String,
    },
}

/// Asserts that no failure was recorded.
///
/// # Returns
///
/// * `Ok(())` - If `messages` is empty
/// * `Err(FailureValidationError)` - Otherwise
pub fn assert_no_failures(messages: &[String]) -> Result<(), FailureValidationError> {
    assert_failure_count(messages, 0)
}

/// Asserts that exactly `expected` failures were recorded.
pub fn assert_failure_count(
    messages: &[String],
    expected: usize,
) -> Result<(), FailureValidationError> {
    if messages.len() != expected {
        return Err(FailureValidationError::Count {
            expected,
            actual: messages.len(),
            messages: messages.to_vec(),
        });
    }

    Ok(())
}

/// Asserts that exactly one failure was recorded and that it starts with
/// `prefix`.
///
/// # Arguments
///
/// * `messages` - The recorded failure messages
/// * `prefix` - The expected start of the single message
///
/// # Returns
///
/// * `Ok(())` - If there is one message and it starts with `prefix`
/// * `Err(FailureValidationError)` - If the count or the prefix is wrong
pub fn assert_single_failure_with_prefix(
    messages: &[String],
    prefix: &str,
) -> Result<(), FailureValidationError> {
    assert_failure_count(messages, 1)?;

    if !messages[0].starts_with(prefix) {
        return Err(FailureValidationError::MissingPrefix {
            index: 0,
            prefix: prefix.to_string(),
            message: messages[0].clone(),
        });
    }

    Ok(())
}

/// Asserts that every recorded failure contains `needle`.
pub fn assert_all_failures_contain(
    messages: &[String],
    needle: &str,
) -> Result<(), FailureValidationError> {
    for (index, message) in messages.iter().enumerate() {
        if !message.contains(needle) {
            return Err(FailureValidationError::MissingText {
                index,
                needle: needle.to_string(),
                message: message.clone(),
            });
        }
    }

    Ok(())
}
