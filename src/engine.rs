//! Failure reporting.
//!
//! Assertions never unwind on their own: they evaluate, hand any failure to
//! a [`FailHandler`] and return the verdict as a `bool`. What a failure
//! *does* is up to the handler. The default [`PanicHandler`] turns it into a
//! test panic; a recording handler can collect failures instead.

use crate::config::HandlerConfig;
use crate::matcher::Matcher;
use std::fmt::{self, Debug, Display};
use std::panic::Location;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Frames added on top of the caller's offset, covering the assertion's own
/// call layers.
pub const BASE_OFFSET: usize = 2;

/// One reported assertion failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Full failure text, description prefix included.
    pub message: String,
    /// Source location of the terminal assertion call.
    pub location: &'static Location<'static>,
    /// Number of call frames to skip when blaming a caller, base included.
    pub offset: usize,
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Receives assertion failures.
pub trait FailHandler {
    /// Records or acts upon `failure`.
    fn fail(&self, failure: Failure);
}

impl<H: FailHandler + ?Sized> FailHandler for &H {
    fn fail(&self, failure: Failure) {
        (**self).fail(failure)
    }
}

impl<H: FailHandler + ?Sized> FailHandler for Box<H> {
    fn fail(&self, failure: Failure) {
        (**self).fail(failure)
    }
}

impl<H: FailHandler + ?Sized> FailHandler for Rc<H> {
    fn fail(&self, failure: Failure) {
        (**self).fail(failure)
    }
}

impl<H: FailHandler + ?Sized> FailHandler for Arc<H> {
    fn fail(&self, failure: Failure) {
        (**self).fail(failure)
    }
}

/// Optional text prefixed to a failure message.
#[derive(Default)]
pub enum Description {
    /// No description.
    #[default]
    Empty,
    /// A fixed description.
    Text(String),
    /// A description built only when a failure is reported.
    Lazy(Box<dyn Fn() -> String>),
}

impl Description {
    /// Wraps a closure that renders the description on demand.
    pub fn lazy(render: impl Fn() -> String + 'static) -> Self {
        Description::Lazy(Box::new(render))
    }

    /// Renders the description, `None` when there is nothing to show.
    pub fn render(&self) -> Option<String> {
        let text = match self {
            Description::Empty => return None,
            Description::Text(text) => text.clone(),
            Description::Lazy(render) => render(),
        };
        (!text.is_empty()).then_some(text)
    }

    /// Prefixes `message` with the rendered description, if any.
    pub fn decorate(&self, message: impl Display) -> String {
        match self.render() {
            Some(description) => format!("{}\n{}", description, message),
            None => message.to_string(),
        }
    }
}

impl Debug for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Description::Empty => f.write_str("Empty"),
            Description::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Description::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Description::Text(text.to_string())
    }
}

impl From<String> for Description {
    fn from(text: String) -> Self {
        Description::Text(text)
    }
}

impl From<fmt::Arguments<'_>> for Description {
    fn from(args: fmt::Arguments<'_>) -> Self {
        Description::Text(args.to_string())
    }
}

impl<D: Into<Description>> From<Option<D>> for Description {
    fn from(description: Option<D>) -> Self {
        description.map_or(Description::Empty, Into::into)
    }
}

/// Reports a failure that did not come from a matcher verdict.
pub fn report_failure<H>(
    handler: &H,
    offset: usize,
    location: &'static Location<'static>,
    message: impl Display,
    description: &Description,
) where
    H: FailHandler + ?Sized,
{
    handler.fail(Failure {
        message: description.decorate(message),
        location,
        offset,
    });
}

/// Evaluates `matcher` against `subject` and reports a rejection.
///
/// A matcher error counts as a failure. Returns whether the matcher
/// accepted.
pub fn report_assertion<H, T, M>(
    handler: &H,
    offset: usize,
    location: &'static Location<'static>,
    subject: &T,
    matcher: &M,
    description: &Description,
) -> bool
where
    H: FailHandler + ?Sized,
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    match matcher.matches(subject) {
        Ok(true) => {
            debug!(%location, "matcher accepted");
            true
        }
        Ok(false) => {
            debug!(%location, "matcher rejected");
            report_failure(
                handler,
                offset,
                location,
                matcher.failure_message(subject),
                description,
            );
            false
        }
        Err(err) => {
            debug!(%location, %err, "matcher failed to evaluate");
            report_failure(handler, offset, location, err, description);
            false
        }
    }
}

/// Turns failures into panics, for use under the standard test harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanicHandler {
    config: HandlerConfig,
}

impl PanicHandler {
    /// Creates a handler with an explicit configuration.
    pub fn new(config: HandlerConfig) -> Self {
        Self { config }
    }
}

impl Default for PanicHandler {
    /// Reads the configuration from the environment, falling back to the
    /// defaults when it cannot be parsed.
    fn default() -> Self {
        let config = HandlerConfig::from_env().unwrap_or_else(|err| {
            warn!(%err, "ignoring handler configuration from environment");
            HandlerConfig::default()
        });
        Self::new(config)
    }
}

impl FailHandler for PanicHandler {
    fn fail(&self, failure: Failure) {
        if self.config.log_failures {
            error!(
                location = %failure.location,
                offset = failure.offset,
                "{}",
                failure.message
            );
        }
        if self.config.show_location {
            panic!("{}\n  at {}", failure.message, failure.location);
        }
        panic!("{}", failure.message);
    }
}
