//! Consistency check for error-shaped multi-value results.
//!
//! A result is consistent when its trailing status slot is empty, or when
//! the status slot carries a failure and every preceding slot is at its
//! zero value.

use crate::multi_value::MultiValue;
use crate::zero::Value;
use thiserror::Error;
use tracing::debug;

/// Reasons a multi-value result fails the consistency check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidityError {
    /// The result has no slots at all, so there is no status to inspect.
    #[error("no return values")]
    NoReturnValues,

    /// The status slot is non-empty but a preceding slot is not zero.
    #[error(
        "Unexpected non-nil/non-zero actual non-error argument at index {}:\n\t<{type_name}>: {repr}",
        .position + 1
    )]
    NonZeroPreceding {
        /// 0-based position of the first offending slot.
        position: usize,
        /// Type of the offending slot.
        type_name: &'static str,
        /// `Debug` rendition of the offending slot.
        repr: String,
    },
}

impl ValidityError {
    /// 1-based index of the offending slot, as shown in the diagnostic.
    pub fn index(&self) -> Option<usize> {
        match self {
            ValidityError::NonZeroPreceding { position, .. } => Some(position + 1),
            ValidityError::NoReturnValues => None,
        }
    }
}

/// Checks that `values` form a consistent error-shaped result.
///
/// Stops at the first preceding slot that violates the rule.
pub fn check(values: &[&dyn Value]) -> Result<(), ValidityError> {
    let Some((status, preceding)) = values.split_last() else {
        debug!("rejecting result without return values");
        return Err(ValidityError::NoReturnValues);
    };

    if status.is_zero_value() {
        debug!(slots = values.len(), "status slot is empty, result accepted");
        return Ok(());
    }

    for (position, value) in preceding.iter().enumerate() {
        if !value.is_zero_value() {
            let err = ValidityError::NonZeroPreceding {
                position,
                type_name: value.type_name(),
                repr: format!("{:?}", value),
            };
            debug!(position, status = ?status, "non-zero value next to a failure status");
            return Err(err);
        }
    }

    debug!(slots = values.len(), "failure status with zero payload, result accepted");
    Ok(())
}

/// Runs [`check`] over the slots of a captured result.
pub fn check_result<V: MultiValue + ?Sized>(values: &V) -> Result<(), ValidityError> {
    check(&values.slots())
}

/// Runs [`check_result`] and hands back the status slot of a consistent
/// result.
pub fn checked_status<V: MultiValue + ?Sized>(values: &V) -> Result<&V::Status, ValidityError> {
    check_result(values)?;
    values.status().ok_or(ValidityError::NoReturnValues)
}
