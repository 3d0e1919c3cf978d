//! Sink for [`Outcome::log_detail`](crate::Outcome::log_detail).
//!
//! The outcome decides the severity; the logger decides where the line goes.

use crate::detail::OutcomeCause;
use crate::state::OutcomeState;

/// Port trait for writing an outcome's detail to a log.
///
/// Implemented by whatever logging infrastructure the caller uses.
/// [`TracingLogger`] forwards to `tracing`.
pub trait DetailLogger {
    /// Log a debug message.
    fn debug(&self, message: &str, cause: Option<&OutcomeCause>);
    /// Log an info message.
    fn info(&self, message: &str, cause: Option<&OutcomeCause>);
    /// Log a warning.
    fn warn(&self, message: &str, cause: Option<&OutcomeCause>);
    /// Log an error.
    fn error(&self, message: &str, cause: Option<&OutcomeCause>);
}

/// [`DetailLogger`] that emits `tracing` events under the `ui_outcome` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl DetailLogger for TracingLogger {
    fn debug(&self, message: &str, cause: Option<&OutcomeCause>) {
        tracing::debug!(target: "ui_outcome", cause = cause.map(tracing::field::display), "{message}");
    }

    fn info(&self, message: &str, cause: Option<&OutcomeCause>) {
        tracing::info!(target: "ui_outcome", cause = cause.map(tracing::field::display), "{message}");
    }

    fn warn(&self, message: &str, cause: Option<&OutcomeCause>) {
        tracing::warn!(target: "ui_outcome", cause = cause.map(tracing::field::display), "{message}");
    }

    fn error(&self, message: &str, cause: Option<&OutcomeCause>) {
        tracing::error!(target: "ui_outcome", cause = cause.map(tracing::field::display), "{message}");
    }
}

/// Route `message` to the level matching `state`.
pub(crate) fn log_for_state(
    logger: &dyn DetailLogger,
    state: OutcomeState,
    message: &str,
    cause: Option<&OutcomeCause>,
) {
    match state {
        OutcomeState::Valid => logger.debug(message, cause),
        OutcomeState::Info => logger.info(message, cause),
        OutcomeState::Warning => logger.warn(message, cause),
        OutcomeState::Error => logger.error(message, cause),
    }
}
