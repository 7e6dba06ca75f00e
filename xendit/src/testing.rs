//! Recording [`RequestClient`] double for unit tests.

use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

use crate::error::XenditError;
use crate::request::{ApiRequest, BoxFuture, RequestClient};

type Canned = Result<Value, XenditError>;

/// Answers requests that match a registered expectation and records every call.
///
/// Unmatched requests fail with a [`XenditError`] describing the request.
#[derive(Debug, Default)]
pub(crate) struct MockRequestClient {
    expectations: Mutex<Vec<(ApiRequest, Canned)>>,
    calls: Mutex<Vec<ApiRequest>>,
}

impl MockRequestClient {
    /// Answers `request` with the JSON form of `response`.
    pub(crate) fn returns<R: Serialize>(&self, request: ApiRequest, response: &R) {
        let value = serde_json::to_value(response).unwrap();
        self.expectations.lock().unwrap().push((request, Ok(value)));
    }

    /// Answers `request` with `error`.
    pub(crate) fn fails(&self, request: ApiRequest, error: XenditError) {
        self.expectations.lock().unwrap().push((request, Err(error)));
    }

    /// Returns every request seen so far.
    pub(crate) fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl RequestClient for MockRequestClient {
    fn request(&self, request: ApiRequest) -> BoxFuture<'_, Result<Value, XenditError>> {
        self.calls.lock().unwrap().push(request.clone());
        let answer = self
            .expectations
            .lock()
            .unwrap()
            .iter()
            .find(|(expected, _)| *expected == request)
            .map(|(_, canned)| canned.clone())
            .unwrap_or_else(|| Err(XenditError::new(format!("unexpected request: {request:?}"))));
        Box::pin(async move { answer })
    }
}
