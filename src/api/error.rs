//! Error types for API client operations.

use thiserror::Error;

use crate::transport::HttpError;

/// Error type for [`Client`](super::Client) operations.
///
/// The client only classifies and reports failures. Nothing is retried or
/// logged on the way out.
#[derive(Debug, Error)]
pub enum Error {
    /// The request path could not be parsed as a URL reference.
    #[error("Invalid request path: {0}")]
    Parse(#[from] PathError),

    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The request could not be assembled from its parts
    /// (invalid method token, unsupported URL scheme, bad header value).
    #[error("Failed to build request: {0}")]
    RequestConstruction(String),

    /// The transport failed before a response was received.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The API answered with a status outside 200..300.
    #[error("http response status code {status}")]
    HttpStatus {
        /// Numeric status code of the response
        status: u16,
    },

    /// A successful response body could not be decoded as JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Why a request path was rejected.
#[derive(Debug, Error)]
pub enum PathError {
    /// The path contains an ASCII control character.
    #[error("invalid control character in URL")]
    ControlCharacter,

    /// A `%` is not followed by two hex digits.
    #[error("invalid URL escape {0:?}")]
    InvalidEscape(String),

    /// The URL parser rejected the resolved reference.
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Returns the HTTP status code for [`Error::HttpStatus`] errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status } => Some(*status),
            _ => None,
        }
    }
}
