//! Error types for the RMU API client.
//!
//! Every public operation returns [`Result`]. The variants keep apart the
//! failure classes the remote API itself does not distinguish: the request
//! never completed, the body could not be decoded, or the remote reported
//! an error in its envelope.

use serde_json::Value;
use thiserror::Error;

use crate::models::Mode;

/// A specialized `Result` type for RMU operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all RMU API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed (connection refused, DNS, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Unexpected HTTP status: {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Response body was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response was valid JSON but not an envelope object
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// The remote reported an error in the envelope
    #[error("API error ({mode}): {message}")]
    Api {
        /// Operation that failed
        mode: Mode,
        /// Message from the envelope's `error` field
        message: String,
        /// Raw envelope for debugging
        body: Value,
    },

    /// Input rejected locally, before any request was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The authentication probe failed
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Local validation failures for registration input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// UDID has the wrong shape or contains `fffff`
    #[error("Invalid UDID")]
    InvalidUdid,
    /// Email address is malformed
    #[error("Invalid email")]
    InvalidEmail,
    /// Registration type is neither `CERT` nor `REG`
    #[error("Invalid registration type")]
    InvalidRegistrationType,
}

impl Error {
    /// Returns `true` if the remote could not be reached or answered with a
    /// non-success status.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Status { .. })
    }

    /// Returns `true` if the remote answered but the body was not a usable
    /// envelope.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Json(_) | Error::UnexpectedResponse(_))
    }

    /// Returns `true` if the remote reported an error.
    pub fn is_remote(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Returns `true` if the input was rejected locally.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication(_))
    }

    /// The reason to hand back to an end user.
    ///
    /// Remote and validation errors give their bare message; everything else
    /// uses the full display text.
    pub fn failure_message(&self) -> String {
        match self {
            Error::Api { message, .. } => message.clone(),
            Error::Validation(v) => v.to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_classes() {
        assert!(Error::Status { status: 502 }.is_transport());
        assert!(Error::UnexpectedResponse("null".into()).is_decode());
        assert!(Error::from(ValidationError::InvalidUdid).is_validation());
        assert!(Error::Authentication("denied".into()).is_auth_error());
        assert!(!Error::Config("x".into()).is_transport());
    }

    #[test]
    fn test_json_error_is_decode() {
        let err: Error = serde_json::from_str::<Value>("<html>").unwrap_err().into();
        assert!(err.is_decode());
        assert!(!err.is_remote());
    }

    #[test]
    fn test_failure_message() {
        let err = Error::Api {
            mode: Mode::Register,
            message: "UDID already registered".into(),
            body: json!({"error": "UDID already registered"}),
        };
        assert!(err.is_remote());
        assert_eq!(err.failure_message(), "UDID already registered");
        assert_eq!(err.to_string(), "API error (register): UDID already registered");

        let err = Error::from(ValidationError::InvalidRegistrationType);
        assert_eq!(err.failure_message(), "Invalid registration type");
        assert_eq!(err.to_string(), "Invalid registration type");
    }
}
