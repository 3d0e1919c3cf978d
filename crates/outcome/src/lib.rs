//! # UI Outcome
//!
//! Result wrapper returned by service calls to a presentation layer.
//!
//! A service never throws at its UI. It returns an [`Outcome`] that always
//! carries a payload together with a severity ([`OutcomeState`]), an optional
//! user-displayable [`OutcomeDetail`] and an optional machine-checkable
//! error code. When the state is [`OutcomeState::Error`] the payload is a
//! placeholder, and reading it before looking at the failure is refused.
//!
//! ## Core Types
//!
//! - [`Outcome`]: payload plus status, with the gated [`Outcome::result`]
//! - [`OptionalOutcome`]: same, for payloads that may be absent
//! - [`OutcomeBuilder`] / [`OptionalOutcomeBuilder`]: validated, step-wise construction
//! - [`Checked`]: an outcome split by state, for pattern matching
//! - [`OutcomeDetail`]: user-facing message with an attached [`OutcomeCause`]
//! - [`OutcomeErrorCode`]: default error-code tag, derived from HTTP statuses
//! - [`DetailLogger`]: port for [`Outcome::log_detail`]
//! - [`OutcomeError`]: misuse of the API itself
//!
//! ## Quick Start
//!
//! ```
//! use ui_outcome::prelude::*;
//!
//! fn find_customer(id: u32) -> Outcome<Option<String>> {
//!     if id == 0 {
//!         return Outcome::error(None, OutcomeDetail::new("Customer not found"))
//!             .with_error_code(OutcomeErrorCode::NotFound);
//!     }
//!     Outcome::valid(Some(format!("customer-{id}")))
//! }
//!
//! let outcome = find_customer(0);
//! if outcome.contains_error_code(&[OutcomeErrorCode::NotFound]) {
//!     assert_eq!(outcome.result_detail().unwrap().to_string(), "Customer not found");
//! }
//! assert_eq!(outcome.result(), Ok(&None));
//! ```
//!
//! ## Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for every data type.
//!   Deserializing a non-valid outcome without a detail fails.
//! - `http`: `From<http::StatusCode>` for [`OutcomeErrorCode`].

#![forbid(unsafe_code)]

/// Validated, step-wise construction of [`Outcome`].
pub mod builder;
/// Default error-code tag and its HTTP mapping.
pub mod code;
/// Localizable display text.
pub mod content;
/// User-facing detail and its technical cause.
pub mod detail;
/// Errors raised by misuse of the outcome API.
pub mod error;
/// Logging port for outcome details.
pub mod logger;
/// Outcomes with a possibly absent payload.
pub mod optional;
/// The outcome container and its tagged view.
pub mod outcome;
/// Convenience re-exports.
pub mod prelude;
/// Severity of an outcome.
pub mod state;
/// State, detail, error code and inspection flags.
pub mod status;

pub use builder::OutcomeBuilder;
pub use code::OutcomeErrorCode;
pub use content::DisplayContent;
pub use detail::{OutcomeCause, OutcomeDetail};
pub use error::{BuildRejection, OutcomeError};
pub use logger::{DetailLogger, TracingLogger};
pub use optional::{OptionalOutcome, OptionalOutcomeBuilder};
pub use outcome::{Checked, Failure, Outcome};
pub use state::OutcomeState;
pub use status::{AsStatus, OutcomeStatus};
