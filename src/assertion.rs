//! Assertions on the trailing status of a multi-value result.

use crate::engine::{report_assertion, report_failure, Description, FailHandler, PanicHandler, BASE_OFFSET};
use crate::matcher::{not, Matcher};
use crate::multi_value::MultiValue;
use crate::validity::checked_status;
use std::panic::Location;
use tracing::{debug, trace};

/// Wraps a multi-value result so that assertions can be made on its status
/// slot.
///
/// ```
/// use errxpect::{errxpect, predicate};
/// use std::io;
///
/// fn lookup() -> (String, u32, Option<io::Error>) {
///     (String::new(), 0, Some(io::Error::new(io::ErrorKind::NotFound, "gone")))
/// }
///
/// let failed = predicate("be an error", |status: &Option<io::Error>| status.is_some());
/// errxpect(lookup()).to(failed);
/// ```
pub fn errxpect<V: MultiValue>(values: V) -> ResultAssertion<V> {
    errxpect_with_offset(0, values)
}

/// Like [`errxpect`], with an extra call-frame offset for diagnostics.
///
/// Useful in helper functions that make assertions on behalf of a test, so
/// that a failure blames the test's line rather than the helper's.
pub fn errxpect_with_offset<V: MultiValue>(offset: usize, values: V) -> ResultAssertion<V> {
    ResultAssertion::new(PanicHandler::default(), values).with_offset(offset)
}

/// Like [`errxpect`], reporting failures to `handler` instead of panicking.
pub fn errxpect_with<V, H>(handler: H, values: V) -> ResultAssertion<V, H>
where
    V: MultiValue,
    H: FailHandler,
{
    ResultAssertion::new(handler, values)
}

/// A single-use assertion over one captured multi-value result.
///
/// Every terminal verb first checks that the result is consistent: if the
/// status slot is non-empty, all preceding slots must be zero. Only then
/// is the matcher applied to the status slot.
#[derive(Debug)]
pub struct ResultAssertion<V, H = PanicHandler> {
    offset: usize,
    values: V,
    handler: H,
    description: Description,
}

impl<V, H> ResultAssertion<V, H>
where
    V: MultiValue,
    H: FailHandler,
{
    /// Captures `values`, reporting to `handler`, with offset 0.
    pub fn new(handler: H, values: V) -> Self {
        trace!(slots = values.slots().len(), "capturing result");
        Self {
            offset: 0,
            values,
            handler,
            description: Description::Empty,
        }
    }

    /// Sets the call-frame offset used when blaming a caller.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the text prefixed to any failure message.
    pub fn with_description(mut self, description: impl Into<Description>) -> Self {
        self.description = description.into();
        self
    }

    /// The caller-supplied offset, without [`BASE_OFFSET`].
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Asserts that the status slot satisfies `matcher`.
    #[track_caller]
    pub fn to<M: Matcher<V::Status>>(self, matcher: M) -> bool {
        self.evaluate(matcher, false, Location::caller())
    }

    /// Asserts that the status slot does not satisfy `matcher`.
    #[track_caller]
    pub fn not_to<M: Matcher<V::Status>>(self, matcher: M) -> bool {
        self.evaluate(matcher, true, Location::caller())
    }

    /// Same as [`not_to`](Self::not_to).
    #[track_caller]
    pub fn to_not<M: Matcher<V::Status>>(self, matcher: M) -> bool {
        self.evaluate(matcher, true, Location::caller())
    }

    /// Same as [`to`](Self::to).
    #[track_caller]
    pub fn should<M: Matcher<V::Status>>(self, matcher: M) -> bool {
        self.evaluate(matcher, false, Location::caller())
    }

    /// Same as [`not_to`](Self::not_to).
    #[track_caller]
    pub fn should_not<M: Matcher<V::Status>>(self, matcher: M) -> bool {
        self.evaluate(matcher, true, Location::caller())
    }

    fn evaluate<M>(self, matcher: M, invert: bool, location: &'static Location<'static>) -> bool
    where
        M: Matcher<V::Status>,
    {
        let offset = BASE_OFFSET + self.offset;
        trace!(%location, offset, invert, "evaluating result assertion");

        let status = match checked_status(&self.values) {
            Ok(status) => status,
            Err(err) => {
                debug!(%location, %err, "inconsistent result, matcher skipped");
                report_failure(&self.handler, offset, location, err, &self.description);
                return false;
            }
        };

        if invert {
            report_assertion(&self.handler, offset, location, status, &not(&matcher), &self.description)
        } else {
            report_assertion(&self.handler, offset, location, status, &matcher, &self.description)
        }
    }
}
