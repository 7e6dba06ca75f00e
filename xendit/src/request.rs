//! The request-dispatch seam between resource operations and the transport.
//!
//! Resource operations never talk to the network directly. They assemble an
//! [`ApiRequest`] and hand it to a [`RequestClient`], which returns the raw
//! JSON response body or a [`XenditError`]. The production implementation
//! lives in the `xendit-http` crate; tests substitute a recording double.

use std::collections::BTreeMap;
use std::fmt;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use crate::error::XenditError;

/// A boxed, sendable future, as returned by [`RequestClient::request`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Caller-supplied request headers.
///
/// "No headers" is always represented by the empty map.
pub type Headers = BTreeMap<String, String>;

/// A JSON object used as a request body.
pub type Body = serde_json::Map<String, Value>;

/// HTTP method selected by operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read a resource.
    Get,
    /// Create a resource.
    Post,
    /// Partially update a resource.
    Patch,
}

impl Method {
    /// Returns the upper-case method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully assembled API request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL.
    pub url: String,
    /// Caller headers, merged by the client with its own defaults.
    pub headers: Headers,
    /// JSON body, absent for reads.
    pub body: Option<Body>,
}

impl ApiRequest {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// Sets the caller headers.
    #[must_use]
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }
}

/// Dispatches [`ApiRequest`]s to the remote API.
///
/// Implementations return the decoded JSON response body on a 2xx result and
/// a [`XenditError`] on any non-success status or transport failure. The
/// trait is object-safe so a client can be shared as `Arc<dyn RequestClient>`.
pub trait RequestClient: Send + Sync {
    /// Sends a request and returns the JSON response body.
    fn request(&self, request: ApiRequest) -> BoxFuture<'_, Result<Value, XenditError>>;
}

impl<T: RequestClient + ?Sized> RequestClient for Arc<T> {
    fn request(&self, request: ApiRequest) -> BoxFuture<'_, Result<Value, XenditError>> {
        (**self).request(request)
    }
}

impl<T: RequestClient + ?Sized> RequestClient for Box<T> {
    fn request(&self, request: ApiRequest) -> BoxFuture<'_, Result<Value, XenditError>> {
        (**self).request(request)
    }
}
