//! Error type for Xendit API operations.
//!
//! Every failure that originates from a remote call (non-success HTTP status,
//! transport failure, undecodable response body) surfaces as one
//! [`XenditError`]. Callers match on this single type and inspect its message.

/// The single error kind returned by every Xendit operation.
///
/// The [`Display`](std::fmt::Display) output is exactly the message supplied
/// by the request client, e.g. `"Maximum amount is 50000000000"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct XenditError {
    /// Human-readable message.
    message: String,
    /// Machine-readable API error code (e.g. `"API_VALIDATION_ERROR"`), if known.
    error_code: Option<String>,
    /// HTTP status of the failed response, if one was received.
    status: Option<u16>,
}

impl XenditError {
    /// Creates a new error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error_code: None,
            status: None,
        }
    }

    /// Sets the API error code.
    #[must_use]
    pub fn with_error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = Some(code.into());
        self
    }

    /// Sets the HTTP status code.
    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the API error code, if any.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    /// Returns the HTTP status code, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }
}

impl From<serde_json::Error> for XenditError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let err = XenditError::new("Maximum amount is 50000000000")
            .with_error_code("API_VALIDATION_ERROR")
            .with_status(400);
        assert_eq!(err.to_string(), "Maximum amount is 50000000000");
        assert_eq!(err.error_code(), Some("API_VALIDATION_ERROR"));
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err = XenditError::from(json_err);
        assert!(err.message().starts_with("JSON error:"));
        assert_eq!(err.status(), None);
    }
}
