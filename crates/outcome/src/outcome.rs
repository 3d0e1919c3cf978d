//! The outcome container.
//!
//! A service call returns an [`Outcome`] instead of failing: the payload is
//! always present, and the state says whether it can be trusted. For
//! [`OutcomeState::Error`] the payload is a placeholder, so the gated
//! accessor [`Outcome::result`] refuses to hand it out until the consumer
//! has looked at [`Outcome::result_detail`] or [`Outcome::error_code`].
//!
//! ```
//! use ui_outcome::{Outcome, OutcomeDetail, OutcomeErrorCode};
//!
//! let outcome: Outcome<Vec<u32>> = Outcome::error(Vec::new(), OutcomeDetail::new("Search failed"))
//!     .with_error_code(OutcomeErrorCode::ServiceUnavailable);
//!
//! assert!(outcome.result().is_err());
//! assert!(outcome.result_detail().is_some());
//! assert!(outcome.result().is_ok());
//! ```
//!
//! Consumers that prefer the type system to runtime flags use
//! [`Outcome::into_checked`] and match on [`Checked`].

use std::any::type_name;
use std::error::Error;
use std::fmt;

use crate::code::OutcomeErrorCode;
use crate::detail::OutcomeDetail;
use crate::error::OutcomeError;
use crate::logger::{DetailLogger, TracingLogger};
use crate::state::OutcomeState;
use crate::status::{AsStatus, OutcomeStatus};

/// Payload plus state, detail and error code of a service call.
///
/// Equality compares payload, state, detail and error code. Inspection
/// flags are neither compared nor serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome<T, C = OutcomeErrorCode> {
    result: T,
    #[cfg_attr(feature = "serde", serde(flatten))]
    status: OutcomeStatus<C>,
}

// ── Construction ────────────────────────────────────────────────────────────

impl<T, C> Outcome<T, C> {
    /// Validate and create an outcome.
    ///
    /// Fails with [`OutcomeError::MissingDetail`] if `state` is not valid and
    /// `detail` is `None`.
    pub fn new(
        result: T,
        state: OutcomeState,
        detail: Option<OutcomeDetail>,
        error_code: Option<C>,
    ) -> Result<Self, OutcomeError> {
        let status = OutcomeStatus::new(state, detail, error_code)?;
        Ok(Self { result, status })
    }

    /// Attach a payload to an already validated status.
    pub fn from_status(result: T, status: OutcomeStatus<C>) -> Self {
        Self { result, status }
    }

    /// Valid outcome without detail.
    pub fn valid(result: T) -> Self {
        Self::from_status(result, OutcomeStatus::valid())
    }

    /// Usable payload with a notice for the user.
    pub fn info(result: T, detail: OutcomeDetail) -> Self {
        Self::from_status(result, OutcomeStatus::flagged(OutcomeState::Info, detail))
    }

    /// Usable payload with a warning for the user.
    pub fn warning(result: T, detail: OutcomeDetail) -> Self {
        Self::from_status(result, OutcomeStatus::flagged(OutcomeState::Warning, detail))
    }

    /// Failed call. `placeholder` is returned by [`result`](Self::result) once
    /// the failure has been inspected.
    pub fn error(placeholder: T, detail: OutcomeDetail) -> Self {
        Self::from_status(placeholder, OutcomeStatus::flagged(OutcomeState::Error, detail))
    }

    /// Set the error code.
    pub fn with_error_code(mut self, code: C) -> Self {
        self.status = self.status.with_error_code(code);
        self
    }

    /// Adapt `previous` to another payload type without losing its failure
    /// context.
    ///
    /// If `previous` is valid the payload is `mapper(previous.result)`,
    /// otherwise it is `fallback`. State, detail and error code are copied.
    /// Reading `previous` here does not count as an inspection of it.
    pub fn mapped<R>(previous: &Outcome<R, C>, mapper: impl FnOnce(&R) -> T, fallback: T) -> Self
    where
        C: Clone,
    {
        trace_mapping::<R, T>(previous.status.state);
        let result = if previous.is_valid() {
            mapper(&previous.result)
        } else {
            fallback
        };
        Self::from_status(result, previous.status.fresh_copy())
    }

    /// Owned form of [`mapped`](Self::mapped).
    pub fn map_or<U>(self, fallback: U, mapper: impl FnOnce(T) -> U) -> Outcome<U, C> {
        trace_mapping::<T, U>(self.status.state);
        let result = if self.is_valid() {
            mapper(self.result)
        } else {
            fallback
        };
        Outcome::from_status(result, self.status.into_fresh())
    }

    /// New payload, state, detail and error code copied from `copy_from`.
    pub fn with_result_of<R>(result: T, copy_from: &Outcome<R, C>) -> Self
    where
        C: Clone,
    {
        Self::from_status(result, copy_from.status.fresh_copy())
    }
}

pub(crate) fn trace_mapping<Src, Dst>(state: OutcomeState) {
    tracing::debug!(
        target: "ui_outcome",
        from = type_name::<Src>(),
        to = type_name::<Dst>(),
        %state,
        "outcome mapped"
    );
}

// ── Inspection ──────────────────────────────────────────────────────────────

impl<T, C> Outcome<T, C> {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }

    #[inline]
    pub fn state(&self) -> OutcomeState {
        self.status.state()
    }

    /// State, detail and error code without the payload.
    pub fn status(&self) -> &OutcomeStatus<C> {
        &self.status
    }

    /// The payload.
    ///
    /// For must-handle states (only [`OutcomeState::Error`]) this fails with
    /// [`OutcomeError::UninspectedResult`] until [`result_detail`](Self::result_detail)
    /// or [`error_code`](Self::error_code) has been called. The error's
    /// source is the cause recorded in the detail.
    pub fn result(&self) -> Result<&T, OutcomeError> {
        self.status.check_access()?;
        Ok(&self.result)
    }

    /// Consuming form of [`result`](Self::result), gated the same way.
    pub fn into_result(self) -> Result<T, OutcomeError> {
        self.status.check_access()?;
        Ok(self.result)
    }

    /// The detail, if any. Unlocks [`result`](Self::result).
    pub fn result_detail(&self) -> Option<&OutcomeDetail> {
        self.status.result_detail()
    }

    /// The error code, if any. Unlocks [`result`](Self::result).
    pub fn error_code(&self) -> Option<&C> {
        self.status.error_code()
    }

    /// Returns `true` if the error code equals any of `candidates`.
    pub fn contains_error_code(&self, candidates: &[C]) -> bool
    where
        C: PartialEq,
    {
        self.status.contains_error_code(candidates)
    }

    /// Returns `true` once the detail or the error code has been read.
    pub fn is_inspected(&self) -> bool {
        self.status.is_inspected()
    }

    /// Write `prefix` + detail content through `logger` at the level
    /// matching the state (`Valid` → debug … `Error` → error), with the
    /// cause attached. Unlocks [`result`](Self::result).
    pub fn log_detail(&self, prefix: &str, logger: &dyn DetailLogger) {
        self.status.log_detail(prefix, logger);
    }

    /// [`log_detail`](Self::log_detail) through [`TracingLogger`].
    pub fn trace_detail(&self, prefix: &str) {
        self.status.log_detail(prefix, &TracingLogger);
    }

    pub(crate) fn into_parts(self) -> (T, OutcomeStatus<C>) {
        (self.result, self.status)
    }

    /// Split into a variant that can only be matched, not misread.
    pub fn into_checked(self) -> Checked<T, C> {
        let (state, detail, error_code) = self.status.into_parts();
        let result = self.result;
        if state.is_valid() {
            return Checked::Valid { result, detail };
        }
        let detail = detail.unwrap_or_else(|| {
            OutcomeDetail::new(format!("{state} outcome without a result detail"))
        });
        if state.is_must_handle() {
            Checked::Failed {
                placeholder: result,
                detail,
                error_code,
            }
        } else {
            Checked::Flagged {
                state,
                result,
                detail,
                error_code,
            }
        }
    }
}

impl<T, C> AsStatus<C> for Outcome<T, C> {
    fn as_status(&self) -> &OutcomeStatus<C> {
        &self.status
    }
}

// ── Tagged view ─────────────────────────────────────────────────────────────

/// An [`Outcome`] taken apart by state.
///
/// There is no accessor here that can hand out a failed payload by accident:
/// the caller has to name the `Failed` arm to reach the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checked<T, C = OutcomeErrorCode> {
    /// The payload is usable as-is.
    Valid {
        result: T,
        detail: Option<OutcomeDetail>,
    },
    /// [`OutcomeState::Info`] or [`OutcomeState::Warning`]; the payload is usable.
    Flagged {
        state: OutcomeState,
        result: T,
        detail: OutcomeDetail,
        error_code: Option<C>,
    },
    /// [`OutcomeState::Error`].
    Failed {
        placeholder: T,
        detail: OutcomeDetail,
        error_code: Option<C>,
    },
}

impl<T, C> Checked<T, C> {
    pub fn state(&self) -> OutcomeState {
        match self {
            Self::Valid { .. } => OutcomeState::Valid,
            Self::Flagged { state, .. } => *state,
            Self::Failed { .. } => OutcomeState::Error,
        }
    }

    /// `Ok` with the payload unless the outcome failed.
    pub fn into_result(self) -> Result<T, Failure<C>> {
        match self {
            Self::Valid { result, .. } | Self::Flagged { result, .. } => Ok(result),
            Self::Failed {
                detail, error_code, ..
            } => Err(Failure { detail, error_code }),
        }
    }
}

/// The failure half of [`Checked::into_result`], usable with `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure<C = OutcomeErrorCode> {
    pub detail: OutcomeDetail,
    pub error_code: Option<C>,
}

impl<C: fmt::Debug> fmt::Display for Failure<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_code {
            Some(code) => write!(f, "{} ({code:?})", self.detail),
            None => fmt::Display::fmt(&self.detail, f),
        }
    }
}

impl<C: fmt::Debug> Error for Failure<C> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.detail.cause().map(|cause| cause as &(dyn Error + 'static))
    }
}
