//! Severity of an outcome and the states that lock its payload.

use std::fmt;

/// Discriminant of an [`Outcome`](crate::Outcome).
///
/// Variants are ordered by severity, so `OutcomeState::Warning < OutcomeState::Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum OutcomeState {
    /// The payload is usable as-is.
    Valid,
    /// The payload is usable; the detail carries a notice for the user.
    Info,
    /// The payload is usable; the detail carries a warning for the user.
    Warning,
    /// The call failed. The payload is a placeholder and must not be read
    /// before the failure has been inspected.
    Error,
}

impl OutcomeState {
    /// Every state, in severity order.
    pub const ALL: [OutcomeState; 4] = [Self::Valid, Self::Info, Self::Warning, Self::Error];

    /// States whose payload is locked until the failure has been inspected.
    pub const MUST_BE_HANDLED: [OutcomeState; 1] = [Self::Error];

    /// Returns `true` if this state is in [`MUST_BE_HANDLED`](Self::MUST_BE_HANDLED).
    #[inline]
    pub fn is_must_handle(self) -> bool {
        Self::MUST_BE_HANDLED.contains(&self)
    }

    /// Returns `true` for [`OutcomeState::Valid`].
    #[inline]
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Upper-case name, as used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "VALID",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for OutcomeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
