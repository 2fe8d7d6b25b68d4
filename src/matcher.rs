//! The predicate seam: anything that can accept or reject a single value.

use crate::error::MatchError;
use std::fmt::{self, Debug};
use std::marker::PhantomData;

/// Inspects a single value and accepts or rejects it.
///
/// The library ships no matchers of its own; callers bring theirs, or wrap
/// a closure with [`predicate`].
pub trait Matcher<T: ?Sized> {
    /// Returns the verdict for `actual`, or an error if no verdict can be
    /// reached.
    fn matches(&self, actual: &T) -> Result<bool, MatchError>;

    /// Message reported when `actual` was expected to match but did not.
    fn failure_message(&self, actual: &T) -> String;

    /// Message reported when `actual` was expected not to match but did.
    fn negated_failure_message(&self, actual: &T) -> String;
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    fn matches(&self, actual: &T) -> Result<bool, MatchError> {
        (**self).matches(actual)
    }

    fn failure_message(&self, actual: &T) -> String {
        (**self).failure_message(actual)
    }

    fn negated_failure_message(&self, actual: &T) -> String {
        (**self).negated_failure_message(actual)
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for Box<M> {
    fn matches(&self, actual: &T) -> Result<bool, MatchError> {
        (**self).matches(actual)
    }

    fn failure_message(&self, actual: &T) -> String {
        (**self).failure_message(actual)
    }

    fn negated_failure_message(&self, actual: &T) -> String {
        (**self).negated_failure_message(actual)
    }
}

/// Logical complement of another matcher, see [`not`].
#[derive(Debug, Clone, Copy)]
pub struct Not<M> {
    inner: M,
}

/// Wraps `matcher` so that it accepts exactly the values it rejects.
///
/// Errors raised by the inner matcher pass through untouched, and the
/// affirmative and negated failure messages trade places.
pub fn not<M>(matcher: M) -> Not<M> {
    Not { inner: matcher }
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for Not<M> {
    fn matches(&self, actual: &T) -> Result<bool, MatchError> {
        self.inner.matches(actual).map(|accepted| !accepted)
    }

    fn failure_message(&self, actual: &T) -> String {
        self.inner.negated_failure_message(actual)
    }

    fn negated_failure_message(&self, actual: &T) -> String {
        self.inner.failure_message(actual)
    }
}

/// A closure-backed matcher, see [`predicate`].
pub struct Predicate<T: ?Sized, F> {
    description: String,
    check: F,
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> Debug for Predicate<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Turns a closure into a [`Matcher`].
///
/// `description` completes the sentence "Expected ... to ...", e.g.
/// `"be an error"`. The closure argument usually needs a type annotation:
///
/// ```
/// use errxpect::{predicate, Matcher};
///
/// let is_nil = predicate("be nil", |status: &Option<std::io::Error>| status.is_none());
/// assert_eq!(is_nil.matches(&None), Ok(true));
/// ```
pub fn predicate<T, F>(description: impl Into<String>, check: F) -> Predicate<T, F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    Predicate {
        description: description.into(),
        check,
        _marker: PhantomData,
    }
}

impl<T, F> Matcher<T> for Predicate<T, F>
where
    T: Debug + ?Sized,
    F: Fn(&T) -> bool,
{
    fn matches(&self, actual: &T) -> Result<bool, MatchError> {
        Ok((self.check)(actual))
    }

    fn failure_message(&self, actual: &T) -> String {
        format!("Expected\n    {:?}\nto {}", actual, self.description)
    }

    fn negated_failure_message(&self, actual: &T) -> String {
        format!("Expected\n    {:?}\nnot to {}", actual, self.description)
    }
}
