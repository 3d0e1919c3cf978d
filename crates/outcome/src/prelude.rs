//! Convenience re-exports for services and their consumers.
//!
//! ```
//! use ui_outcome::prelude::*;
//! ```

pub use crate::builder::OutcomeBuilder;
pub use crate::code::OutcomeErrorCode;
pub use crate::detail::{OutcomeCause, OutcomeDetail};
pub use crate::error::OutcomeError;
pub use crate::logger::DetailLogger;
pub use crate::optional::{OptionalOutcome, OptionalOutcomeBuilder};
pub use crate::outcome::{Checked, Outcome};
pub use crate::state::OutcomeState;
