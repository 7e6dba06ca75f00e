//! The [`Xendit`] entry point.
//!
//! A [`Xendit`] value owns the API base URL and the injected
//! [`RequestClient`]. Resource handles borrow it; nothing is global.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;

#[cfg(feature = "telemetry")]
use tracing::instrument;

use crate::error::XenditError;
use crate::request::{ApiRequest, Body, Headers, Method, RequestClient};
use crate::resources::{FixedVirtualAccounts, RetailOutlet};

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.xendit.co";

/// Access point for all Xendit resources.
///
/// # Example
///
/// ```no_run
/// # use xendit::{Xendit, RequestClient};
/// # async fn run(client: impl RequestClient + 'static) -> Result<(), xendit::XenditError> {
/// let xendit = Xendit::new(client);
/// let account = xendit.fixed_virtual_account().get_fixed_va("57f6fbf26b9f064272622aa6").await?;
/// println!("{:?}", account.account_number);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Xendit {
    base_url: String,
    client: Arc<dyn RequestClient>,
}

impl fmt::Debug for Xendit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Xendit")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Xendit {
    /// Creates an entry point using `client` against [`DEFAULT_BASE_URL`].
    pub fn new(client: impl RequestClient + 'static) -> Self {
        Self::from_shared(Arc::new(client))
    }

    /// Creates an entry point from an already shared client.
    pub fn from_shared(client: Arc<dyn RequestClient>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            client,
        }
    }

    /// Overrides the base URL (trailing slashes are dropped).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the base URL followed by `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Fixed payment codes for retail outlets.
    #[must_use]
    pub fn retail_outlet(&self) -> RetailOutlet<'_> {
        RetailOutlet::new(self)
    }

    /// Fixed virtual accounts, their payments, and available banks.
    #[must_use]
    pub fn fixed_virtual_account(&self) -> FixedVirtualAccounts<'_> {
        FixedVirtualAccounts::new(self)
    }

    /// Dispatches one request and decodes the response into `T`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(name = "xendit.request", skip_all, fields(method = %method, url = %url), err)
    )]
    pub(crate) async fn send<T>(
        &self,
        method: Method,
        url: String,
        headers: &Headers,
        body: Option<Body>,
    ) -> Result<T, XenditError>
    where
        T: DeserializeOwned,
    {
        let request = ApiRequest {
            method,
            url,
            headers: headers.clone(),
            body,
        };
        let value = self.client.request(request).await?;
        serde_json::from_value(value)
            .map_err(|e| XenditError::new(format!("Failed to deserialize response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockRequestClient;

    #[test]
    fn test_default_base_url() {
        let xendit = Xendit::new(MockRequestClient::default());
        assert_eq!(xendit.base_url(), "https://api.xendit.co");
        assert_eq!(
            xendit.url("/fixed_payment_code"),
            "https://api.xendit.co/fixed_payment_code"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_dropped() {
        let xendit = Xendit::new(MockRequestClient::default()).with_base_url("http://localhost:1234/");
        assert_eq!(xendit.url("/p"), "http://localhost:1234/p");
    }

    #[test]
    fn test_debug_hides_client() {
        let xendit = Xendit::new(MockRequestClient::default());
        let debug = format!("{xendit:?}");
        assert!(debug.contains("https://api.xendit.co"));
        assert!(!debug.contains("MockRequestClient"));
    }
}
