//! Error types for building the HTTP client.
//!
//! Request failures are reported as [`xendit::XenditError`]; this module only
//! covers configuration and client construction.

/// Errors that can occur while configuring an [`HttpRequestClient`](crate::HttpRequestClient).
#[derive(Debug, thiserror::Error)]
pub enum HttpClientError {
    /// A required environment variable is not set.
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),

    /// An environment variable has an unusable value.
    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Offending value.
        value: String,
    },

    /// The configured user agent is not a valid header value.
    #[error("invalid user agent: {0:?}")]
    InvalidUserAgent(String),

    /// The underlying reqwest client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}
