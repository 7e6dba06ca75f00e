//! Configuration for [`HttpRequestClient`](crate::HttpRequestClient).
//!
//! # Environment Variables
//!
//! - `XENDIT_API_KEY` - Secret API key (required by [`HttpClientConfig::from_env`])
//! - `XENDIT_BASE_URL` - Override the API base URL (default: `https://api.xendit.co`)
//! - `XENDIT_TIMEOUT_SECS` - Request timeout in seconds (default: `30`)

use std::fmt;
use std::time::Duration;

use crate::constants::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_TIMEOUT_SECS, TIMEOUT_SECS_ENV};
use crate::error::HttpClientError;

/// Configuration for [`HttpRequestClient`](crate::HttpRequestClient).
#[derive(Clone)]
pub struct HttpClientConfig {
    /// Secret API key, sent as the basic-auth username.
    pub api_key: String,

    /// API base URL. `None` keeps [`xendit::DEFAULT_BASE_URL`].
    pub base_url: Option<String>,

    /// HTTP request timeout.
    pub timeout: Duration,

    /// Optional `User-Agent` header value.
    pub user_agent: Option<String>,

    /// Optional pre-configured reqwest client. If `None`, a new client is
    /// created with the configured timeout.
    pub http_client: Option<reqwest::Client>,
}

impl HttpClientConfig {
    /// Creates a config for the given API key with default settings.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
            http_client: None,
        }
    }

    /// Loads the config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError`] if `XENDIT_API_KEY` is missing or
    /// `XENDIT_TIMEOUT_SECS` is not a whole number of seconds.
    pub fn from_env() -> Result<Self, HttpClientError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the config through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`HttpClientConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HttpClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .filter(|key| !key.is_empty())
            .ok_or(HttpClientError::MissingEnv(API_KEY_ENV))?;
        let mut config = Self::new(api_key);

        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            config.base_url = Some(base_url);
        }
        if let Some(value) = lookup(TIMEOUT_SECS_ENV) {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| HttpClientError::InvalidEnv {
                    name: TIMEOUT_SECS_ENV,
                    value: value.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a pre-configured reqwest client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl fmt::Debug for HttpClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("has_http_client", &self.http_client.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = HttpClientConfig::from_lookup(lookup(&[("XENDIT_API_KEY", "xnd_key")])).unwrap();
        assert_eq!(config.api_key, "xnd_key");
        assert_eq!(config.base_url, None);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = HttpClientConfig::from_lookup(lookup(&[
            ("XENDIT_API_KEY", "xnd_key"),
            ("XENDIT_BASE_URL", "http://localhost:8080"),
            ("XENDIT_TIMEOUT_SECS", " 5 "),
        ]))
        .unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_from_lookup_ignores_empty_base_url() {
        let config = HttpClientConfig::from_lookup(lookup(&[
            ("XENDIT_API_KEY", "xnd_key"),
            ("XENDIT_BASE_URL", ""),
        ]))
        .unwrap();
        assert_eq!(config.base_url, None);

        let config = HttpClientConfig::from_lookup(lookup(&[
            ("XENDIT_API_KEY", "xnd_key"),
            ("XENDIT_BASE_URL", "   "),
        ]))
        .unwrap();
        assert_eq!(config.base_url, None);
    }

    #[test]
    fn test_from_lookup_missing_key() {
        let err = HttpClientConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, HttpClientError::MissingEnv("XENDIT_API_KEY")));
    }

    #[test]
    fn test_from_lookup_invalid_timeout() {
        let err = HttpClientConfig::from_lookup(lookup(&[
            ("XENDIT_API_KEY", "xnd_key"),
            ("XENDIT_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, HttpClientError::InvalidEnv { name: "XENDIT_TIMEOUT_SECS", .. }));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = HttpClientConfig::new("xnd_secret");
        assert!(!format!("{config:?}").contains("xnd_secret"));
    }
}
