use crate::error::FixtureError;

/// A multi-value result with a payload and an empty status slot.
pub fn returns_ok<T>(payload: T) -> (T, Option<FixtureError>) {
    (payload, None)
}

/// A consistent failure: zero payload, status slot carrying `message`.
pub fn returns_err<T: Default>(message: &str) -> (T, Option<FixtureError>) {
    (T::default(), FixtureError::status(message))
}

/// An inconsistent failure: non-zero payload next to a failure status.
pub fn returns_inconsistent<T>(payload: T, message: &str) -> (T, Option<FixtureError>) {
    (payload, FixtureError::status(message))
}

/// Three-slot result as returned by a lookup.
pub fn lookup(name: &str) -> (String, u32, Option<FixtureError>) {
    match name {
        "" => (String::new(), 0, Some(FixtureError::NotFound("<empty>".to_string()))),
        "answer" => ("answer".to_string(), 42, None),
        // Buggy branch: reports an error but still hands out data.
        other => (other.to_string(), 0, Some(FixtureError::NotFound(other.to_string()))),
    }
}
