//! User-visible content carried by an [`OutcomeDetail`](crate::OutcomeDetail).
//!
//! The content is opaque to this crate: it is stored, compared and
//! serialized, never resolved. Turning a message key into localized text
//! is the job of the display layer that renders the outcome.

use std::fmt;

/// Text shown to the user when an outcome is not plainly valid.
///
/// Either literal text, or a message key with a default text and named
/// arguments for the display layer to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayContent {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    key: Option<String>,
    text: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    args: Vec<(String, String)>,
}

impl DisplayContent {
    /// Literal text with no message key.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            key: None,
            text: text.into(),
            args: Vec::new(),
        }
    }

    /// Message key with the text to fall back on when the key is not resolved.
    pub fn keyed(key: impl Into<String>, default_text: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            text: default_text.into(),
            args: Vec::new(),
        }
    }

    /// Append a named argument. Order is preserved.
    pub fn with_arg(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.args.push((name.into(), value.to_string()));
        self
    }

    /// Message key, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Literal or default text.
    pub fn default_text(&self) -> &str {
        &self.text
    }

    /// Named arguments in insertion order.
    pub fn args(&self) -> impl Iterator<Item = (&str, &str)> {
        self.args.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for DisplayContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "[{key}] {}", self.text),
            None => f.write_str(&self.text),
        }
    }
}

impl From<&str> for DisplayContent {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for DisplayContent {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}
