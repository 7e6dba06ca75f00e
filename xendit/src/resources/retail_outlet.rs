//! Fixed payment codes payable at retail outlets.
//!
//! - `POST /fixed_payment_code`
//! - `GET /fixed_payment_code/{id}`
//! - `PATCH /fixed_payment_code/{id}`

use crate::client::Xendit;
use crate::error::XenditError;
use crate::model::FixedPaymentCode;
use crate::params::IntoRequestBody;
use crate::request::{Headers, Method};

const FIXED_PAYMENT_CODE_PATH: &str = "/fixed_payment_code";

/// Handle for the retail outlet endpoints, obtained from [`Xendit::retail_outlet`].
#[derive(Debug, Clone)]
pub struct RetailOutlet<'a> {
    xendit: &'a Xendit,
    headers: Headers,
}

impl<'a> RetailOutlet<'a> {
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

    /// Creates a fixed payment code.
    ///
    /// `params` is either a [`CreateFixedPaymentCodeParams`](crate::model::CreateFixedPaymentCodeParams)
    /// or a raw JSON map.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails or the API rejects it.
    pub async fn create_fixed_payment_code(
        &self,
        params: impl IntoRequestBody + Send,
    ) -> Result<FixedPaymentCode, XenditError> {
        let body = params.into_body()?;
        let url = self.xendit.url(FIXED_PAYMENT_CODE_PATH);
        self.xendit
            .send(Method::Post, url, &self.headers, Some(body))
            .await
    }

    /// Fetches a fixed payment code by ID.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails or the code does not exist.
    pub async fn get_fixed_payment_code(&self, id: &str) -> Result<FixedPaymentCode, XenditError> {
        let url = self.code_url(id);
        self.xendit.send(Method::Get, url, &self.headers, None).await
    }

    /// Updates a fixed payment code by ID.
    ///
    /// Only the fields present in `params` are sent.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the request fails or the API rejects it.
    pub async fn update_fixed_payment_code(
        &self,
        id: &str,
        params: impl IntoRequestBody + Send,
    ) -> Result<FixedPaymentCode, XenditError> {
        let body = params.into_body()?;
        let url = self.code_url(id);
        self.xendit
            .send(Method::Patch, url, &self.headers, Some(body))
            .await
    }

    fn code_url(&self, id: &str) -> String {
        format!("{}/{id}", self.xendit.url(FIXED_PAYMENT_CODE_PATH))
    }
}
