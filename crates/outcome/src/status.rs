//! State, detail and error code shared by [`Outcome`](crate::Outcome) and
//! [`OptionalOutcome`](crate::OptionalOutcome).
//!
//! The status also owns the two inspection flags. They flip from `false` to
//! `true` the first time [`OutcomeStatus::result_detail`] or
//! [`OutcomeStatus::error_code`] is called and never flip back. Reading the
//! payload of a must-handle outcome requires at least one of them.
//!
//! The flags are [`Cell`]s, so a status is `Send` but not `Sync`: one
//! logical caller inspects an outcome, never several threads at once.

use std::cell::Cell;

use crate::code::OutcomeErrorCode;
use crate::detail::OutcomeDetail;
use crate::error::OutcomeError;
use crate::logger::{self, DetailLogger};
use crate::state::OutcomeState;

/// Everything an outcome reports about itself apart from the payload.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "StatusRepr<C>",
        bound(deserialize = "C: serde::Deserialize<'de>")
    )
)]
pub struct OutcomeStatus<C = OutcomeErrorCode> {
    pub(crate) state: OutcomeState,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub(crate) detail: Option<OutcomeDetail>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub(crate) error_code: Option<C>,
    #[cfg_attr(feature = "serde", serde(skip))]
    detail_inspected: Cell<bool>,
    #[cfg_attr(feature = "serde", serde(skip))]
    error_code_inspected: Cell<bool>,
}

impl<C> OutcomeStatus<C> {
    /// Validate and create a status without a payload.
    ///
    /// Fails with [`OutcomeError::MissingDetail`] if `state` is not valid and
    /// `detail` is `None`.
    pub fn new(
        state: OutcomeState,
        detail: Option<OutcomeDetail>,
        error_code: Option<C>,
    ) -> Result<Self, OutcomeError> {
        if !state.is_valid() && detail.is_none() {
            tracing::warn!(target: "ui_outcome", %state, "non-valid outcome constructed without a result detail");
            return Err(OutcomeError::MissingDetail { state });
        }
        Ok(Self::unchecked(state, detail, error_code))
    }

    /// Valid status with no detail and no error code.
    pub fn valid() -> Self {
        Self::unchecked(OutcomeState::Valid, None, None)
    }

    /// Non-valid status; the detail is required by the signature.
    pub fn flagged(state: OutcomeState, detail: OutcomeDetail) -> Self {
        Self::unchecked(state, Some(detail), None)
    }

    pub(crate) fn unchecked(
        state: OutcomeState,
        detail: Option<OutcomeDetail>,
        error_code: Option<C>,
    ) -> Self {
        tracing::trace!(target: "ui_outcome", %state, "outcome created");
        Self {
            state,
            detail,
            error_code,
            detail_inspected: Cell::new(false),
            error_code_inspected: Cell::new(false),
        }
    }

    /// Replace the error code.
    pub fn with_error_code(mut self, code: C) -> Self {
        self.error_code = Some(code);
        self
    }

    #[inline]
    pub fn state(&self) -> OutcomeState {
        self.state
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    /// The detail, if any. Marks the detail as inspected.
    pub fn result_detail(&self) -> Option<&OutcomeDetail> {
        self.detail_inspected.set(true);
        self.detail.as_ref()
    }

    /// The error code, if any. Marks the error code as inspected.
    pub fn error_code(&self) -> Option<&C> {
        self.error_code_inspected.set(true);
        self.error_code.as_ref()
    }

    /// Returns `true` if the stored error code equals any of `candidates`.
    ///
    /// Does not count as an inspection.
    pub fn contains_error_code(&self, candidates: &[C]) -> bool
    where
        C: PartialEq,
    {
        self.error_code
            .as_ref()
            .is_some_and(|code| candidates.contains(code))
    }

    /// Returns `true` once the detail or the error code has been read.
    pub fn is_inspected(&self) -> bool {
        self.detail_inspected.get() || self.error_code_inspected.get()
    }

    /// Write the detail through `logger` at the level matching the state.
    ///
    /// Marks the detail as inspected, even when there is none.
    pub fn log_detail(&self, prefix: &str, logger: &dyn DetailLogger) {
        match self.result_detail() {
            Some(detail) => {
                let message = format!("{prefix}{}", detail.content());
                logger::log_for_state(logger, self.state, &message, detail.cause());
            }
            None => {
                tracing::debug!(target: "ui_outcome", state = %self.state, "no result detail to log");
            }
        }
    }

    /// Gate for payload access: must-handle states require a prior inspection.
    pub(crate) fn check_access(&self) -> Result<(), OutcomeError> {
        if self.state.is_must_handle() && !self.is_inspected() {
            tracing::warn!(
                target: "ui_outcome",
                state = %self.state,
                "result accessed before the failure was inspected"
            );
            return Err(OutcomeError::UninspectedResult {
                state: self.state,
                cause: self.detail.as_ref().and_then(|d| d.cause().cloned()),
            });
        }
        Ok(())
    }

    /// Same state, detail and error code; inspection flags start over.
    pub(crate) fn fresh_copy(&self) -> Self
    where
        C: Clone,
    {
        Self::unchecked(self.state, self.detail.clone(), self.error_code.clone())
    }

    /// Move out state, detail and error code; inspection flags start over.
    pub(crate) fn into_fresh(self) -> Self {
        Self::unchecked(self.state, self.detail, self.error_code)
    }

    pub(crate) fn into_parts(self) -> (OutcomeState, Option<OutcomeDetail>, Option<C>) {
        (self.state, self.detail, self.error_code)
    }
}

/// Anything that carries an [`OutcomeStatus`].
pub trait AsStatus<C> {
    fn as_status(&self) -> &OutcomeStatus<C>;
}

impl<C> AsStatus<C> for OutcomeStatus<C> {
    fn as_status(&self) -> &OutcomeStatus<C> {
        self
    }
}

impl<C: PartialEq> PartialEq for OutcomeStatus<C> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && self.detail == other.detail
            && self.error_code == other.error_code
    }
}

impl<C: Eq> Eq for OutcomeStatus<C> {}

/// Wire shape of [`OutcomeStatus`]; validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct StatusRepr<C> {
    state: OutcomeState,
    detail: Option<OutcomeDetail>,
    error_code: Option<C>,
}

#[cfg(feature = "serde")]
impl<C> TryFrom<StatusRepr<C>> for OutcomeStatus<C> {
    type Error = OutcomeError;

    fn try_from(repr: StatusRepr<C>) -> Result<Self, Self::Error> {
        Self::new(repr.state, repr.detail, repr.error_code)
    }
}
