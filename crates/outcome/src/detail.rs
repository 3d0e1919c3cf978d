//! Explanation attached to an outcome that is not plainly valid.

use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::content::DisplayContent;

/// Owned snapshot of the error that caused a failure.
///
/// Arbitrary `dyn Error` values are neither `Clone` nor serializable, so the
/// error chain is captured as messages when the detail is created. The
/// snapshot is itself an [`Error`] whose [`source`](Error::source) chain
/// mirrors the original one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutcomeCause {
    message: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    source: Option<Box<OutcomeCause>>,
}

impl OutcomeCause {
    /// A cause with a single message and no further source.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Capture `error` and its whole `source()` chain.
    pub fn from_error(error: &(dyn Error + 'static)) -> Self {
        Self {
            message: error.to_string(),
            source: error.source().map(|inner| Box::new(Self::from_error(inner))),
        }
    }

    /// Wrap an existing cause, so that `self` becomes its parent.
    pub fn with_source(mut self, source: OutcomeCause) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Message of the outermost error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Messages of the whole chain, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &str> {
        std::iter::successors(Some(self), |cause| cause.source.as_deref()).map(Self::message)
    }
}

impl fmt::Display for OutcomeCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for OutcomeCause {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

/// User-visible explanation of an outcome plus the error behind it, if any.
///
/// Equality, hashing, `Debug` and `Display` only look at the content: two
/// details that show the user the same thing are the same detail, whatever
/// caused them.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutcomeDetail {
    content: DisplayContent,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    cause: Option<OutcomeCause>,
}

impl OutcomeDetail {
    /// Detail without a cause.
    pub fn new(content: impl Into<DisplayContent>) -> Self {
        Self {
            content: content.into(),
            cause: None,
        }
    }

    /// Detail caused by `error`; the error chain is captured immediately.
    pub fn caused_by(content: impl Into<DisplayContent>, error: &(dyn Error + 'static)) -> Self {
        Self {
            content: content.into(),
            cause: Some(OutcomeCause::from_error(error)),
        }
    }

    /// Attach or replace the cause.
    pub fn with_cause(mut self, cause: OutcomeCause) -> Self {
        self.cause = Some(cause);
        self
    }

    pub fn content(&self) -> &DisplayContent {
        &self.content
    }

    pub fn cause(&self) -> Option<&OutcomeCause> {
        self.cause.as_ref()
    }
}

impl PartialEq for OutcomeDetail {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
    }
}

impl Eq for OutcomeDetail {}

impl Hash for OutcomeDetail {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.content.hash(state);
    }
}

impl fmt::Debug for OutcomeDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutcomeDetail")
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for OutcomeDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.content, f)
    }
}
