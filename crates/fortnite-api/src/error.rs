//! Error types for fortnite-api client operations
//!
//! Every failure is a value returned to the immediate caller. Local failures
//! (validation, encoding) never reach the network; remote failures keep the
//! status code and message the service sent so callers can branch on them.

use reqwest::StatusCode;
use reqwest::header::InvalidHeaderValue;
use std::time::Duration;
use thiserror::Error;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Rejected locally before any I/O (empty identifier, missing API key)
    Validation,
    /// Query, body, URL or header could not be built
    Encoding,
    /// Connection failure, timeout or cancellation
    Network,
    /// Response body did not match the expected envelope or payload shape
    Decode,
    /// Service answered with a well-formed error envelope
    Api,
}

#[derive(Debug, Error)]
pub enum Error {
    // Validation errors
    #[error("{0} cannot be empty")]
    EmptyParameter(&'static str),

    #[error("an API key is required for this request")]
    MissingApiKey,

    #[error("unknown language tag: {0}")]
    InvalidLanguage(String),

    #[error("invalid timeout, expected whole seconds: {0}")]
    InvalidTimeout(String),

    // Encoding errors
    #[error("failed to encode query: {0}")]
    QueryEncoding(String),

    #[error("failed to serialize request body: {0}")]
    BodyEncoding(#[source] serde_json::Error),

    #[error("failed to build request URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("request cancelled")]
    Cancelled,

    // Decode errors
    #[error("failed to decode {context}: {source}")]
    Decode {
        /// Which part of the response failed to parse
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    // Remote errors
    #[error("api error: {status} - {message}")]
    Api { status: u16, message: String },
}

impl Error {
    /// Create a decode error for the named part of the response
    pub fn decode(context: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { context, source }
    }

    /// Create a query encoding error
    pub fn query_encoding(reason: impl Into<String>) -> Self {
        Self::QueryEncoding(reason.into())
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyParameter(_)
            | Self::MissingApiKey
            | Self::InvalidLanguage(_)
            | Self::InvalidTimeout(_) => ErrorKind::Validation,
            Self::QueryEncoding(_) | Self::BodyEncoding(_) | Self::Url(_) | Self::InvalidHeader(_) => {
                ErrorKind::Encoding
            }
            Self::Http(_) | Self::Timeout(_) | Self::Cancelled => ErrorKind::Network,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Api { .. } => ErrorKind::Api,
        }
    }

    /// Remote status code, for errors the service reported
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the service reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND.as_u16())
    }

    /// Check if the call was cancelled through its request context
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if the call ran out of time, either on the per-call deadline or
    /// on the transport's own timeout
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Timeout(_) => true,
            Self::Http(e) => e.is_timeout(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::EmptyParameter("id");
        assert_eq!(err.to_string(), "id cannot be empty");

        let err = Error::MissingApiKey;
        assert_eq!(err.to_string(), "an API key is required for this request");

        let err = Error::Api {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "api error: 404 - not found");

        let err = Error::Timeout(Duration::from_secs(5));
        assert_eq!(err.to_string(), "request timed out after 5s");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::EmptyParameter("name").kind(), ErrorKind::Validation);
        assert_eq!(Error::MissingApiKey.kind(), ErrorKind::Validation);
        assert_eq!(
            Error::InvalidTimeout("soon".to_string()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(Error::query_encoding("nested").kind(), ErrorKind::Encoding);
        assert_eq!(Error::Cancelled.kind(), ErrorKind::Network);
        assert_eq!(
            Error::Timeout(Duration::from_millis(10)).kind(),
            ErrorKind::Network
        );

        let source = serde_json::from_str::<u8>("x").unwrap_err();
        assert_eq!(Error::decode("response", source).kind(), ErrorKind::Decode);

        let err = Error::Api {
            status: 400,
            message: "bad".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Api);
    }

    #[test]
    fn test_not_found_is_distinct_from_validation() {
        let remote = Error::Api {
            status: 404,
            message: "not found".to_string(),
        };
        let local = Error::EmptyParameter("id");

        assert!(remote.is_not_found());
        assert!(!local.is_not_found());
        assert_ne!(remote.kind(), local.kind());
        assert_eq!(local.status(), None);
    }

    #[test]
    fn test_cancel_and_timeout_are_distinguishable() {
        assert!(Error::Cancelled.is_cancelled());
        assert!(!Error::Cancelled.is_timeout());

        let timeout = Error::Timeout(Duration::from_secs(1));
        assert!(timeout.is_timeout());
        assert!(!timeout.is_cancelled());
    }
}
