//! Fluent, validated construction of [`Outcome`].
//!
//! Producers that accumulate the outcome over several steps (try a call,
//! downgrade to a warning, attach an error code) fill a builder and call
//! [`OutcomeBuilder::build`] once at the end.

use crate::code::OutcomeErrorCode;
use crate::detail::OutcomeDetail;
use crate::error::{BuildRejection, OutcomeError};
use crate::outcome::Outcome;
use crate::state::OutcomeState;
use crate::status::{AsStatus, OutcomeStatus};

/// Builder for [`Outcome`].
///
/// Besides the result, a *valid-default result* can be registered up front;
/// it is used when the producer never got as far as setting a result, which
/// is the usual situation on the error path.
#[derive(Debug, Clone)]
pub struct OutcomeBuilder<T, C = OutcomeErrorCode> {
    result: Option<T>,
    valid_default_result: Option<T>,
    state: Option<OutcomeState>,
    detail: Option<OutcomeDetail>,
    error_code: Option<C>,
}

impl<T, C> Default for OutcomeBuilder<T, C> {
    fn default() -> Self {
        Self {
            result: None,
            valid_default_result: None,
            state: None,
            detail: None,
            error_code: None,
        }
    }
}

impl<T, C> OutcomeBuilder<T, C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(mut self, result: T) -> Self {
        self.result = Some(result);
        self
    }

    /// Payload to use when no [`result`](Self::result) is set.
    pub fn valid_default_result(mut self, fallback: T) -> Self {
        self.valid_default_result = Some(fallback);
        self
    }

    pub fn state(mut self, state: OutcomeState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set the detail. Last write wins.
    ///
    /// A builder that already holds a detail has already failed once;
    /// overwriting it emits a `warn` diagnostic naming both details, and the
    /// earlier one is dropped.
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

    /// Take state, detail and error code from `previous`, replacing whatever
    /// the builder held.
    ///
    /// Reads `previous` through its inspecting accessors: its failure is
    /// considered handled once it has been handed on.
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

    /// Validate and build.
    ///
    /// Checks, in order: some result or valid-default result is set; a state
    /// is set; a non-valid state has a detail. Every rejection is an
    /// [`OutcomeError::BuildRejected`] carrying the cause of the detail
    /// recorded so far.
    pub fn build(self) -> Result<Outcome<T, C>, OutcomeError> {
        let cause = self.detail.as_ref().and_then(|detail| detail.cause().cloned());
        let reject = |reason: BuildRejection| OutcomeError::BuildRejected {
            reason,
            cause: cause.clone(),
        };

        let (result, from_fallback) = match (self.result, self.valid_default_result) {
            (Some(result), _) => (result, false),
            (None, Some(fallback)) => (fallback, true),
            (None, None) => return Err(reject(BuildRejection::NoResult)),
        };
        let Some(state) = self.state else {
            return Err(reject(BuildRejection::NoState));
        };
        if !state.is_valid() && self.detail.is_none() {
            return Err(reject(BuildRejection::MissingDetail(state)));
        }
        if from_fallback && state.is_valid() {
            tracing::debug!(
                target: "ui_outcome",
                %state,
                "valid outcome built from its valid-default result"
            );
        }

        let status = OutcomeStatus::new(state, self.detail, self.error_code)?;
        Ok(Outcome::from_status(result, status))
    }
}

/// Store `detail`, warning if the slot already held one.
pub(crate) fn replace_detail(slot: &mut Option<OutcomeDetail>, detail: OutcomeDetail) {
    if let Some(previous) = slot.as_ref() {
        tracing::warn!(
            target: "ui_outcome",
            previous = %previous,
            replacement = %detail,
            "outcome builder already failed, replacing its result detail"
        );
    }
    *slot = Some(detail);
}

pub(crate) fn extract<C: Clone>(
    previous: &OutcomeStatus<C>,
) -> (OutcomeState, Option<OutcomeDetail>, Option<C>) {
    (
        previous.state(),
        previous.result_detail().cloned(),
        previous.error_code().cloned(),
    )
}
