//! Fixed (callback) virtual accounts.
//!
//! - `POST /callback_virtual_accounts`
//! - `GET /callback_virtual_accounts/{id}`
//! - `PATCH /callback_virtual_accounts/{id}`
//! - `GET /available_virtual_account_banks`
//! - `GET /callback_virtual_account_payments/payment_id={id}`

use crate::client::Xendit;
use crate::error::XenditError;
use crate::model::{AvailableBank, FixedVirtualAccount, FixedVirtualAccountPayment};
use crate::params::IntoRequestBody;
use crate::request::{Headers, Method};

const VIRTUAL_ACCOUNTS_PATH: &str = "/callback_virtual_accounts";
const AVAILABLE_BANKS_PATH: &str = "/available_virtual_account_banks";
const PAYMENTS_PATH: &str = "/callback_virtual_account_payments";

/// Handle for the virtual account endpoints, obtained from
/// [`Xendit::fixed_virtual_account`].
#[derive(Debug, Clone)]
pub struct FixedVirtualAccounts<'a> {
    xendit: &'a Xendit,
    headers: Headers,
}

impl<'a> FixedVirtualAccounts<'a> {
    pub(crate) fn new(xendit: &'a Xendit) -> Self {
        Self {
            xendit,
            headers: Headers::new(),
        }
    }

    /// Sends `headers` with every request made through this handle.
    #[must_use]
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Creates a closed virtual account that accepts only its expected amount.
    ///
    /// `params` is either a
    /// [`CreateClosedVirtualAccountParams`](crate::model::CreateClosedVirtualAccountParams)
    /// or a raw JSON map, which is sent unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails or the API rejects it
    /// (e.g. `"Maximum amount is 50000000000"`).
    pub async fn create_closed(
        &self,
        params: impl IntoRequestBody + Send,
    ) -> Result<FixedVirtualAccount, XenditError> {
        self.create(params).await
    }

    /// Creates an open virtual account that accepts any amount.
    ///
    /// `params` is either a
    /// [`CreateOpenVirtualAccountParams`](crate::model::CreateOpenVirtualAccountParams)
    /// or a raw JSON map, which is sent unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails or the API rejects it.
    pub async fn create_open(
        &self,
        params: impl IntoRequestBody + Send,
    ) -> Result<FixedVirtualAccount, XenditError> {
        self.create(params).await
    }

    async fn create(
        &self,
        params: impl IntoRequestBody + Send,
    ) -> Result<FixedVirtualAccount, XenditError> {
        let body = params.into_body()?;
        let url = self.xendit.url(VIRTUAL_ACCOUNTS_PATH);
        self.xendit
            .send(Method::Post, url, &self.headers, Some(body))
            .await
    }

    /// Lists the banks that can issue virtual accounts.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails.
    pub async fn get_available_banks(&self) -> Result<Vec<AvailableBank>, XenditError> {
        let url = self.xendit.url(AVAILABLE_BANKS_PATH);
        self.xendit.send(Method::Get, url, &self.headers, None).await
    }

    /// Fetches a virtual account by ID.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails or the account does not exist.
    pub async fn get_fixed_va(&self, id: &str) -> Result<FixedVirtualAccount, XenditError> {
        let url = self.account_url(id);
        self.xendit.send(Method::Get, url, &self.headers, None).await
    }

    /// Updates a virtual account by ID.
    ///
    /// Only the fields present in `params` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails or the account does not exist.
    pub async fn update(
        &self,
        id: &str,
        params: impl IntoRequestBody + Send,
    ) -> Result<FixedVirtualAccount, XenditError> {
        let body = params.into_body()?;
        let url = self.account_url(id);
        self.xendit
            .send(Method::Patch, url, &self.headers, Some(body))
            .await
    }

    /// Fetches a payment made into a virtual account.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails or the payment does not exist.
    pub async fn get_payment(
        &self,
        payment_id: &str,
    ) -> Result<FixedVirtualAccountPayment, XenditError> {
        let url = format!("{}/payment_id={payment_id}", self.xendit.url(PAYMENTS_PATH));
        self.xendit.send(Method::Get, url, &self.headers, None).await
    }

    fn account_url(&self, id: &str) -> String {
        format!("{}/{id}", self.xendit.url(VIRTUAL_ACCOUNTS_PATH))
    }
}
