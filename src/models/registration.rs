//! Registration result shapes.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Structured failure returned for a rejected registration.
///
/// Mirrors the `{"success": false, "error": "..."}` object the RMU
/// integration guides describe, for callers that forward it unchanged.
///
/// # Example
///
/// ```
/// use rmu_rs::models::RegistrationFailure;
/// use rmu_rs::error::ValidationError;
///
/// let failure = RegistrationFailure::from(&rmu_rs::Error::from(ValidationError::InvalidEmail));
/// assert!(!failure.success);
/// assert_eq!(failure.error, "Invalid email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationFailure {
    /// Always `false`
    pub success: bool,
    /// Human-readable reason
    pub error: String,
}

impl RegistrationFailure {
    /// Create a failure with the given reason.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

impl From<&Error> for RegistrationFailure {
    fn from(err: &Error) -> Self {
        Self::new(err.failure_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mode;
    use serde_json::json;

    #[test]
    fn test_remote_error_keeps_message() {
        let err = Error::Api {
            mode: Mode::Register,
            message: "some message".to_string(),
            body: json!({"error": "some message"}),
        };
        let failure = RegistrationFailure::from(&err);
        assert_eq!(
            serde_json::to_value(&failure).unwrap(),
            json!({"success": false, "error": "some message"})
        );
    }
}
