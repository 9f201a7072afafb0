//! Error type shared by the locator, canonicalizer and facade.

use thiserror::Error;

/// Failure while parsing or interpreting a URL or path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// A required argument was absent.
    #[error("{0} must not be null")]
    NullArgument(&'static str),

    /// The input could not be parsed as a URL.
    #[error("malformed URL {input:?}: {reason}")]
    Malformed { input: String, reason: String },

    /// The scheme is syntactically valid but not recognised.
    #[error("unknown protocol: {scheme}")]
    UnknownScheme { scheme: String },

    /// The operation needs a URL that resolves on the local filesystem.
    #[error("not a local file URL: {url}")]
    NotLocal { url: String },
}

impl UrlError {
    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        UrlError::Malformed {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
