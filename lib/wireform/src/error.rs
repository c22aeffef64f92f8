//! Error types for wireform.

use derive_more::{Display, Error, From};

/// Main error type for wireform operations.
///
/// Encoding errors abort the whole encode call: no partial query string
/// or partial multipart body is ever produced.
///
/// HTTP error *statuses* (4xx/5xx) are not represented here — they are
/// data, classified by [`crate::ResponseStatus`] and surfaced through
/// [`crate::ResponseStatus::error`].
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Multipart build attempted with zero items.
    #[display("multipart form has no fields")]
    #[from(skip)]
    NoFormFields,

    /// Reading a file referenced by a multipart item failed.
    #[display("file read error: {_0}")]
    #[from]
    FileRead(std::io::Error),

    /// A query value that has no textual representation.
    #[display("unsupported query value at '{key}': {reason}")]
    #[from(skip)]
    UnsupportedQueryValue {
        /// Top-level key under which the value was found.
        key: String,
        /// Why the value cannot be encoded.
        reason: String,
    },

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "user.address.city").
        path: String,
        /// Error message.
        message: String,
    },

    /// Form URL-encoded serialization error.
    #[display("form serialization error: {_0}")]
    #[from]
    FormSerialization(serde_html_form::ser::Error),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unsupported-query-value error.
    #[must_use]
    pub fn unsupported_query_value(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedQueryValue {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns `true` if this is the empty-multipart error.
    #[must_use]
    pub const fn is_no_form_fields(&self) -> bool {
        matches!(self, Self::NoFormFields)
    }

    /// Returns `true` if this error comes from a failed file read.
    #[must_use]
    pub const fn is_file_read(&self) -> bool {
        matches!(self, Self::FileRead(_))
    }
}
