//! HTTP-inspired failure taxonomy.
//!
//! [`Outcome`](crate::Outcome) accepts any tag type as its error code; this
//! enum is the default for services that have no domain-specific codes.

use std::fmt;

/// Broad category of a failed call, modelled on HTTP status classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum OutcomeErrorCode {
    /// The requested entity does not exist.
    NotFound,
    /// The caller is known but lacks permission.
    NotAuthorized,
    /// The caller could not be identified.
    NotAuthenticated,
    /// The request itself was malformed.
    BadRequest,
    /// A downstream service is temporarily unavailable.
    ServiceUnavailable,
    /// Anything else.
    RuntimeError,
}

impl OutcomeErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [OutcomeErrorCode; 6] = [
        Self::NotFound,
        Self::NotAuthorized,
        Self::NotAuthenticated,
        Self::BadRequest,
        Self::ServiceUnavailable,
        Self::RuntimeError,
    ];

    /// Classify an HTTP-like status code.
    ///
    /// | status | code |
    /// |---|---|
    /// | 400 | `BadRequest` |
    /// | 401 | `NotAuthenticated` |
    /// | 403 | `NotAuthorized` |
    /// | 404 | `NotFound` |
    /// | 503 | `ServiceUnavailable` |
    /// | anything else | `RuntimeError` |
    pub fn from_http_status(status: i32) -> Self {
        tracing::trace!(target: "ui_outcome", status, "mapping http status to error code");
        match status {
            400 => Self::BadRequest,
            401 => Self::NotAuthenticated,
            403 => Self::NotAuthorized,
            404 => Self::NotFound,
            503 => Self::ServiceUnavailable,
            _ => Self::RuntimeError,
        }
    }

    /// Canonical status for this code. `RuntimeError` maps to 500.
    pub fn http_status(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotAuthenticated => 401,
            Self::NotAuthorized => 403,
            Self::NotFound => 404,
            Self::ServiceUnavailable => 503,
            Self::RuntimeError => 500,
        }
    }

    /// Returns `true` if the caller is at fault (4xx equivalent).
    pub fn is_client_error(self) -> bool {
        matches!(
            self,
            Self::NotFound | Self::NotAuthorized | Self::NotAuthenticated | Self::BadRequest
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::NotAuthorized => "NOT_AUTHORIZED",
            Self::NotAuthenticated => "NOT_AUTHENTICATED",
            Self::BadRequest => "BAD_REQUEST",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::RuntimeError => "RUNTIME_ERROR",
        }
    }
}

impl fmt::Display for OutcomeErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "http")]
impl From<http::StatusCode> for OutcomeErrorCode {
    fn from(status: http::StatusCode) -> Self {
        Self::from_http_status(i32::from(status.as_u16()))
    }
}
