//! Outcome whose payload may legitimately be absent.
//!
//! A lookup that finds nothing is not a failure: [`OptionalOutcome`] is
//! valid with no payload. State, detail and error code behave exactly as in
//! [`Outcome`], but the payload accessor is never gated, since an `Option`
//! already forces the caller to handle absence.

use crate::builder::{extract, replace_detail};
use crate::code::OutcomeErrorCode;
use crate::detail::OutcomeDetail;
use crate::error::{BuildRejection, OutcomeError};
use crate::logger::{DetailLogger, TracingLogger};
use crate::outcome::{Outcome, trace_mapping};
use crate::state::OutcomeState;
use crate::status::{AsStatus, OutcomeStatus};

/// Possibly absent payload plus state, detail and error code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionalOutcome<T, C = OutcomeErrorCode> {
    #[cfg_attr(feature = "serde", serde(default))]
    result: Option<T>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    status: OutcomeStatus<C>,
}

impl<T, C> OptionalOutcome<T, C> {
    /// Validate and create an outcome.
    ///
    /// Fails with [`OutcomeError::MissingDetail`] if `state` is not valid and
    /// `detail` is `None`. A missing `result` is never an error.
    pub fn new(
        result: Option<T>,
        state: OutcomeState,
        detail: Option<OutcomeDetail>,
        error_code: Option<C>,
    ) -> Result<Self, OutcomeError> {
        let status = OutcomeStatus::new(state, detail, error_code)?;
        Ok(Self { result, status })
    }

    pub fn from_status(result: Option<T>, status: OutcomeStatus<C>) -> Self {
        Self { result, status }
    }

    /// Valid outcome with a payload.
    pub fn found(result: T) -> Self {
        Self::from_status(Some(result), OutcomeStatus::valid())
    }

    /// Valid outcome without a payload.
    pub fn empty() -> Self {
        Self::from_status(None, OutcomeStatus::valid())
    }

    pub fn info(result: Option<T>, detail: OutcomeDetail) -> Self {
        Self::from_status(result, OutcomeStatus::flagged(OutcomeState::Info, detail))
    }

    pub fn warning(result: Option<T>, detail: OutcomeDetail) -> Self {
        Self::from_status(result, OutcomeStatus::flagged(OutcomeState::Warning, detail))
    }

    /// Failed call; there is no payload.
    pub fn error(detail: OutcomeDetail) -> Self {
        Self::from_status(None, OutcomeStatus::flagged(OutcomeState::Error, detail))
    }

    pub fn with_error_code(mut self, code: C) -> Self {
        self.status = self.status.with_error_code(code);
        self
    }

    /// Adapt `previous` to another payload type.
    ///
    /// `mapper` runs only if `previous` is valid and has a payload; otherwise
    /// the new payload is absent. State, detail and error code are copied.
    pub fn mapped<R>(previous: &OptionalOutcome<R, C>, mapper: impl FnOnce(&R) -> T) -> Self
    where
        C: Clone,
    {
        trace_mapping::<R, T>(previous.state());
        let result = if previous.is_valid() {
            previous.result.as_ref().map(mapper)
        } else {
            None
        };
        Self::from_status(result, previous.status.fresh_copy())
    }

    /// Owned form of [`mapped`](Self::mapped).
    pub fn map<U>(self, mapper: impl FnOnce(T) -> U) -> OptionalOutcome<U, C> {
        trace_mapping::<T, U>(self.state());
        let result = if self.is_valid() {
            self.result.map(mapper)
        } else {
            None
        };
        OptionalOutcome::from_status(result, self.status.into_fresh())
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }

    #[inline]
    pub fn state(&self) -> OutcomeState {
        self.status.state()
    }

    pub fn status(&self) -> &OutcomeStatus<C> {
        &self.status
    }

    /// The payload, if any. Not gated by the state.
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn into_result(self) -> Option<T> {
        self.result
    }

    /// The detail, if any. Marks the detail as inspected.
    pub fn result_detail(&self) -> Option<&OutcomeDetail> {
        self.status.result_detail()
    }

    /// The error code, if any. Marks the error code as inspected.
    pub fn error_code(&self) -> Option<&C> {
        self.status.error_code()
    }

    pub fn contains_error_code(&self, candidates: &[C]) -> bool
    where
        C: PartialEq,
    {
        self.status.contains_error_code(candidates)
    }

    pub fn is_inspected(&self) -> bool {
        self.status.is_inspected()
    }

    /// See [`Outcome::log_detail`].
    pub fn log_detail(&self, prefix: &str, logger: &dyn DetailLogger) {
        self.status.log_detail(prefix, logger);
    }

    pub fn trace_detail(&self, prefix: &str) {
        self.status.log_detail(prefix, &TracingLogger);
    }

    /// Convert into an [`Outcome`], substituting `default` for an absent payload.
    pub fn into_outcome_or(self, default: T) -> Outcome<T, C> {
        Outcome::from_status(self.result.unwrap_or(default), self.status.into_fresh())
    }
}

impl<T, C> From<Outcome<T, C>> for OptionalOutcome<T, C> {
    /// Keeps state, detail and error code. Inspection flags start over.
    fn from(outcome: Outcome<T, C>) -> Self {
        let (result, status) = outcome.into_parts();
        Self::from_status(Some(result), status.into_fresh())
    }
}

impl<T, C> AsStatus<C> for OptionalOutcome<T, C> {
    fn as_status(&self) -> &OutcomeStatus<C> {
        &self.status
    }
}

/// Builder for [`OptionalOutcome`].
///
/// Same rules as [`OutcomeBuilder`](crate::OutcomeBuilder), except that a
/// result is never required.
#[derive(Debug, Clone)]
pub struct OptionalOutcomeBuilder<T, C = OutcomeErrorCode> {
    result: Option<T>,
    state: Option<OutcomeState>,
    detail: Option<OutcomeDetail>,
    error_code: Option<C>,
}

impl<T, C> Default for OptionalOutcomeBuilder<T, C> {
    fn default() -> Self {
        Self {
            result: None,
            state: None,
            detail: None,
            error_code: None,
        }
    }
}

impl<T, C> OptionalOutcomeBuilder<T, C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(mut self, result: T) -> Self {
        self.result = Some(result);
        self
    }

    pub fn state(mut self, state: OutcomeState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set the detail. Last write wins; overwriting emits a `warn` diagnostic.
    pub fn result_detail(mut self, detail: OutcomeDetail) -> Self {
        replace_detail(&mut self.detail, detail);
        self
    }

    pub fn error_code(mut self, code: C) -> Self {
        self.error_code = Some(code);
        self
    }

    /// Returns `true` if a detail has been set.
    pub fn has_result_detail(&self) -> bool {
        self.detail.is_some()
    }

    /// Take state, detail and error code from `previous`. Counts as
    /// inspecting `previous`.
    pub fn extract_status_from(mut self, previous: &impl AsStatus<C>) -> Self
    where
        C: Clone,
    {
        let (state, detail, error_code) = extract(previous.as_status());
        self.state = Some(state);
        self.detail = detail;
        self.error_code = error_code;
        self
    }

    /// Validate and build: a state is set, and a non-valid state has a detail.
    pub fn build(self) -> Result<OptionalOutcome<T, C>, OutcomeError> {
        let cause = self.detail.as_ref().and_then(|detail| detail.cause().cloned());
        let Some(state) = self.state else {
            return Err(OutcomeError::BuildRejected {
                reason: BuildRejection::NoState,
                cause,
            });
        };
        if !state.is_valid() && self.detail.is_none() {
            return Err(OutcomeError::BuildRejected {
                reason: BuildRejection::MissingDetail(state),
                cause,
            });
        }

        let status = OutcomeStatus::new(state, self.detail, self.error_code)?;
        Ok(OptionalOutcome::from_status(self.result, status))
    }
}
