use std::fmt;

use crate::detail::OutcomeCause;
use crate::state::OutcomeState;

/// Contract violation raised while building or reading an outcome.
///
/// These are caller bugs, never domain failures: domain failures travel
/// inside the [`Outcome`](crate::Outcome) itself. Nothing here is retryable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum OutcomeError {
    /// A non-valid outcome was constructed without explaining itself.
    #[error("an outcome in state {state} requires a result detail")]
    MissingDetail {
        /// State the outcome was constructed with.
        state: OutcomeState,
    },

    /// The payload of a must-handle outcome was read before its detail or
    /// error code.
    #[error("result of an {state} outcome read before its detail or error code was inspected")]
    UninspectedResult {
        /// State of the outcome that was read.
        state: OutcomeState,
        /// Cause recorded in the outcome's detail.
        #[source]
        cause: Option<OutcomeCause>,
    },

    /// The builder was asked for an outcome it cannot produce.
    #[error("outcome build rejected: {reason}{}", caused_by(.cause))]
    BuildRejected {
        /// What was missing.
        reason: BuildRejection,
        /// Cause of the detail recorded so far, if any.
        #[source]
        cause: Option<OutcomeCause>,
    },
}

/// Why a builder refused to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildRejection {
    /// Neither a result nor a valid-default result was given.
    NoResult,
    /// No state was given.
    NoState,
    /// The state is not valid and no detail was given.
    MissingDetail(OutcomeState),
}

impl fmt::Display for BuildRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoResult => f.write_str("no result and no valid-default result"),
            Self::NoState => f.write_str("no state"),
            Self::MissingDetail(state) => write!(f, "state {state} without a result detail"),
        }
    }
}

fn caused_by(cause: &Option<OutcomeCause>) -> String {
    match cause {
        Some(cause) => format!(" (caused by: {})", cause.chain().collect::<Vec<_>>().join(": ")),
        None => String::new(),
    }
}

impl OutcomeError {
    /// Returns `true` for violations of the construction arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::MissingDetail { .. })
    }

    /// Returns `true` for operations refused in the current state.
    pub fn is_not_permitted(&self) -> bool {
        matches!(self, Self::UninspectedResult { .. } | Self::BuildRejected { .. })
    }

    /// Machine-readable error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingDetail { .. } => "OUTCOME_MISSING_DETAIL",
            Self::UninspectedResult { .. } => "OUTCOME_UNINSPECTED_RESULT",
            Self::BuildRejected { .. } => "OUTCOME_BUILD_REJECTED",
        }
    }
}
