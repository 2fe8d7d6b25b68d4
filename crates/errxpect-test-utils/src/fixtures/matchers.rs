use errxpect::{MatchError, Matcher, ZeroValue};
use std::fmt::Debug;

/// Accepts an empty status slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Succeed;

/// Matcher accepting an empty status slot.
pub fn succeed() -> Succeed {
    Succeed
}

impl<T: ZeroValue + Debug + ?Sized> Matcher<T> for Succeed {
    fn matches(&self, actual: &T) -> Result<bool, MatchError> {
        Ok(actual.is_zero())
    }

    fn failure_message(&self, actual: &T) -> String {
        format!("Expected success, but got an error:\n    {:?}", actual)
    }

    fn negated_failure_message(&self, _actual: &T) -> String {
        "Expected failure, but got no error.".to_string()
    }
}

/// Accepts a non-empty status slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaveOccurred;

/// Matcher accepting a non-empty status slot.
pub fn have_occurred() -> HaveOccurred {
    HaveOccurred
}

impl<T: ZeroValue + Debug + ?Sized> Matcher<T> for HaveOccurred {
    fn matches(&self, actual: &T) -> Result<bool, MatchError> {
        Ok(!actual.is_zero())
    }

    fn failure_message(&self, actual: &T) -> String {
        format!("Expected an error to have occurred.  Got:\n    {:?}", actual)
    }

    fn negated_failure_message(&self, actual: &T) -> String {
        format!("Unexpected error:\n    {:?}", actual)
    }
}

/// Accepts a status slot equal to the expected value.
#[derive(Debug, Clone)]
pub struct Equal<E> {
    expected: E,
}

/// Matcher accepting values equal to `expected`.
pub fn equal<E>(expected: E) -> Equal<E> {
    Equal { expected }
}

impl<T, E> Matcher<T> for Equal<E>
where
    T: PartialEq<E> + Debug,
    E: Debug,
{
    fn matches(&self, actual: &T) -> Result<bool, MatchError> {
        Ok(*actual == self.expected)
    }

    fn failure_message(&self, actual: &T) -> String {
        format!("Expected\n    {:?}\nto equal\n    {:?}", actual, self.expected)
    }

    fn negated_failure_message(&self, actual: &T) -> String {
        format!("Expected\n    {:?}\nnot to equal\n    {:?}", actual, self.expected)
    }
}

/// Refuses to judge anything; models a matcher handed the wrong input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Undecidable;

impl<T: ?Sized> Matcher<T> for Undecidable {
    fn matches(&self, _actual: &T) -> Result<bool, MatchError> {
        Err(MatchError::new("Undecidable matcher cannot judge its input"))
    }

    fn failure_message(&self, _actual: &T) -> String {
        String::new()
    }

    fn negated_failure_message(&self, _actual: &T) -> String {
        String::new()
    }
}
