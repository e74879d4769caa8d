//! Client error types.

use crate::domain::UnsupportedShape;
use crate::format::{DecodeError, FormatError, MappingError};

/// Errors from the iRail client.
///
/// Transport failures (`Http`, `Client`, `RateLimited`, `Server`,
/// `UnexpectedStatus`) are kept apart from response-format failures
/// (`Decode`, `Mapping`, `UnsupportedShape`); see [`IrailError::is_transport`].
#[derive(Debug, thiserror::Error)]
pub enum IrailError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API rejected the request (4xx)
    #[error("client error {status}: {message}")]
    Client { status: u16, message: String },

    /// Rate limited by the API (429)
    #[error("rate limited by iRail API")]
    RateLimited,

    /// API failed to serve the request (5xx)
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Neither success nor an error status
    #[error("unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16 },

    /// Response body could not be decoded
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Decoded response could not be mapped to domain types
    #[error("mapping error: {0}")]
    Mapping(#[from] MappingError),

    /// Weakly-typed conversion met an unsupported value
    #[error(transparent)]
    UnsupportedShape(#[from] UnsupportedShape),

    /// Configuration cannot be used (e.g. an invalid header value)
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Fixture data could not be loaded
    #[error("fixture error: {message}")]
    Fixture { message: String },
}

impl From<FormatError> for IrailError {
    fn from(err: FormatError) -> Self {
        match err {
            FormatError::Decode(e) => IrailError::Decode(e),
            FormatError::Mapping(e) => IrailError::Mapping(e),
            FormatError::UnsupportedShape(e) => IrailError::UnsupportedShape(e),
        }
    }
}

impl IrailError {
    /// Whether the failure happened in transport rather than in decoding or
    /// mapping the response.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            IrailError::Http(_)
                | IrailError::Client { .. }
                | IrailError::RateLimited
                | IrailError::Server { .. }
                | IrailError::UnexpectedStatus { .. }
        )
    }

    /// HTTP status code, for errors that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            IrailError::Client { status, .. }
            | IrailError::Server { status, .. }
            | IrailError::UnexpectedStatus { status } => Some(*status),
            IrailError::RateLimited => Some(429),
            IrailError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Map a non-success status and its body to an error.
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            429 => IrailError::RateLimited,
            400..=499 => IrailError::Client { status, message },
            500..=599 => IrailError::Server { status, message },
            _ => IrailError::UnexpectedStatus { status },
        }
    }
}
