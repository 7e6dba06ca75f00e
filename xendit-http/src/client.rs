//! `reqwest`-based [`RequestClient`] for the Xendit API.
//!
//! Every request carries the API key as HTTP basic auth (key as username,
//! empty password) and `Content-Type: application/json`. Caller headers are
//! applied last and win on conflict.
//!
//! ## Error Handling
//!
//! All failures become a [`XenditError`]:
//! - transport failures keep the reqwest message
//! - non-2xx responses carry the HTTP status and, when the body is a Xendit
//!   error object, its `error_code` and `message`
//! - a 2xx body that is not valid JSON is reported with the HTTP status

use std::fmt::Display;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use xendit::{ApiRequest, BoxFuture, Headers, Method, RequestClient, Xendit, XenditError};

#[cfg(feature = "telemetry")]
use tracing::{Span, instrument};

use crate::config::HttpClientConfig;
use crate::error::HttpClientError;

/// Error object returned by the API on non-success responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Async HTTP client for the Xendit API.
///
/// # Example
///
/// ```no_run
/// use xendit_http::{HttpClientConfig, HttpRequestClient};
///
/// # fn main() -> Result<(), xendit_http::HttpClientError> {
/// let client = HttpRequestClient::new(HttpClientConfig::new("xnd_development_..."))?;
/// let xendit = client.into_xendit();
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HttpRequestClient {
    api_key: String,
    base_url: Option<String>,
    default_headers: HeaderMap,
    client: Client,
}

impl HttpRequestClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError`] if the reqwest client cannot be built or
    /// the configured user agent is not a valid header value.
    pub fn new(config: HttpClientConfig) -> Result<Self, HttpClientError> {
        let client = match config.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(config.timeout)
                .build()
                .map_err(HttpClientError::Build)?,
        };

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(agent) = &config.user_agent {
            let value = HeaderValue::from_str(agent)
                .map_err(|_| HttpClientError::InvalidUserAgent(agent.clone()))?;
            default_headers.insert(USER_AGENT, value);
        }

        Ok(Self {
            api_key: config.api_key,
            base_url: config.base_url,
            default_headers,
            client,
        })
    }

    /// Creates a client configured from the process environment.
    ///
    /// # Errors
    ///
    /// See [`HttpClientConfig::from_env`] and [`HttpRequestClient::new`].
    pub fn from_env() -> Result<Self, HttpClientError> {
        Self::new(HttpClientConfig::from_env()?)
    }

    /// Returns the configured base URL override, if any.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Wraps this client in a [`Xendit`] entry point, applying the
    /// configured base URL.
    #[must_use]
    pub fn into_xendit(self) -> Xendit {
        let base_url = self.base_url.clone();
        let xendit = Xendit::new(self);
        match base_url {
            Some(url) => xendit.with_base_url(url),
            None => xendit,
        }
    }

    /// Merges client defaults with the caller's headers; caller wins.
    fn headers_for(&self, headers: &Headers) -> Result<HeaderMap, XenditError> {
        let mut merged = self.default_headers.clone();
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| XenditError::new(format!("Invalid header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| XenditError::new(format!("Invalid value for header {name}: {e}")))?;
            merged.insert(name, value);
        }
        Ok(merged)
    }

    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "xendit.http",
            skip_all,
            fields(
                method = %request.method,
                url = %request.url,
                otel.status_code = tracing::field::Empty,
                error.message = tracing::field::Empty
            )
        )
    )]
    async fn execute(&self, request: ApiRequest) -> Result<Value, XenditError> {
        let result = self.send(request).await;
        record_result_on_span(&result);
        result
    }

    async fn send(&self, request: ApiRequest) -> Result<Value, XenditError> {
        let headers = self.headers_for(&request.headers)?;
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url)
            .basic_auth(&self.api_key, Some(""))
            .headers(headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| XenditError::new(format!("Request to {} failed: {e}", request.url)))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            XenditError::new(format!("Failed to read response body: {e}")).with_status(status.as_u16())
        })?;

        if !status.is_success() {
            return Err(api_error(status, &text));
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| {
            XenditError::new(format!("Failed to parse response body: {e}")).with_status(status.as_u16())
        })
    }
}

impl RequestClient for HttpRequestClient {
    fn request(&self, request: ApiRequest) -> BoxFuture<'_, Result<Value, XenditError>> {
        Box::pin(self.execute(request))
    }
}

impl std::fmt::Debug for HttpRequestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRequestClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
    }
}

/// Builds the error for a non-success response.
fn api_error(status: StatusCode, body: &str) -> XenditError {
    let parsed = serde_json::from_str::<ApiErrorBody>(body).ok();
    let (code, message) = match parsed {
        Some(ApiErrorBody {
            error_code,
            message: Some(message),
        }) => (error_code, message),
        Some(ApiErrorBody { error_code, .. }) => (error_code, fallback_message(status, body)),
        None => (None, fallback_message(status, body)),
    };

    let error = XenditError::new(message).with_status(status.as_u16());
    match code {
        Some(code) => error.with_error_code(code),
        None => error,
    }
}

fn fallback_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() || body.starts_with('{') {
        format!("HTTP {status}")
    } else {
        body.to_owned()
    }
}

/// Records the outcome of a request on the current span.
#[cfg(feature = "telemetry")]
fn record_result_on_span<R, E: Display>(result: &Result<R, E>) {
    let span = Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
            tracing::event!(tracing::Level::ERROR, error = %err, "Request to Xendit failed");
        }
    }
}

/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
fn record_result_on_span<R, E: Display>(_result: &Result<R, E>) {}
