//! Fixed payment codes for retail outlets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::error::XenditError;
use crate::params::{IntoRequestBody, to_body};
use crate::request::Body;

/// Retail outlet chain a fixed payment code is issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RetailOutletName {
    /// Alfamart and its Alfa group outlets.
    Alfamart,
    /// Indomaret.
    Indomaret,
}

impl RetailOutletName {
    /// Returns the wire name, e.g. `"ALFAMART"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alfamart => "ALFAMART",
            Self::Indomaret => "INDOMARET",
        }
    }
}

impl fmt::Display for RetailOutletName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RetailOutletName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALFAMART" => Ok(Self::Alfamart),
            "INDOMARET" => Ok(Self::Indomaret),
            other => Err(format!("unknown retail outlet '{other}'")),
        }
    }
}

/// A fixed payment code payable at a retail outlet.
///
/// # JSON Format
///
/// ```json
/// {
///   "id": "5b61881e6cc2770f00117f73",
///   "owner_id": "5b614aa8e79f9214007244d4",
///   "external_id": "123",
///   "retail_outlet_name": "ALFAMART",
///   "prefix": "TEST",
///   "name": "Rika Sutanto",
///   "payment_code": "TEST123456",
///   "type": "USER",
///   "expected_amount": 10000,
///   "is_single_use": true,
///   "expiration_date": "2049-07-31T17:00:00.000Z"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedPaymentCode {
    /// Identifier assigned by Xendit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Business that owns the code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    /// Caller-chosen identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// Outlet chain the code is payable at, as sent by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retail_outlet_name: Option<String>,

    /// Merchant prefix of the payment code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Name shown to the cashier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The code the customer presents at the outlet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_code: Option<String>,

    /// Code type, e.g. `"USER"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub code_type: Option<String>,

    /// Amount the customer is expected to pay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_amount: Option<Amount>,

    /// Whether the code can be paid only once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_single_use: Option<bool>,

    /// ISO 8601 expiry timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

impl FixedPaymentCode {
    /// Returns the outlet chain as a [`RetailOutletName`], if it is a known one.
    #[must_use]
    pub fn retail_outlet_name(&self) -> Option<RetailOutletName> {
        self.retail_outlet_name.as_deref()?.parse().ok()
    }
}

/// Parameters for creating a fixed payment code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateFixedPaymentCodeParams {
    /// Caller-chosen identifier, up to 1000 characters.
    pub external_id: String,

    /// Outlet chain to issue the code for.
    pub retail_outlet_name: RetailOutletName,

    /// Name of the end user, may be checked by the cashier.
    pub name: String,

    /// Amount the customer is expected to pay.
    pub expected_amount: Amount,

    /// Whether the code can be paid only once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_single_use: Option<bool>,

    /// ISO 8601 expiry timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,

    /// Any further API parameters, sent verbatim.
    #[serde(flatten)]
    pub additional: Body,
}

impl CreateFixedPaymentCodeParams {
    /// Creates parameters with the required fields.
    #[must_use]
    pub fn new(
        external_id: impl Into<String>,
        retail_outlet_name: RetailOutletName,
        name: impl Into<String>,
        expected_amount: impl Into<Amount>,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            retail_outlet_name,
            name: name.into(),
            expected_amount: expected_amount.into(),
            is_single_use: None,
            expiration_date: None,
            additional: Body::new(),
        }
    }

    /// Sets whether the code can be paid only once.
    #[must_use]
    pub const fn with_single_use(mut self, single_use: bool) -> Self {
        self.is_single_use = Some(single_use);
        self
    }

    /// Sets the expiry timestamp.
    #[must_use]
    pub fn with_expiration_date(mut self, date: impl Into<String>) -> Self {
        self.expiration_date = Some(date.into());
        self
    }

    /// Adds a free-form parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.additional.insert(key.into(), value.into());
        self
    }
}

impl IntoRequestBody for CreateFixedPaymentCodeParams {
    fn into_body(self) -> Result<Body, XenditError> {
        to_body(&self)
    }
}

/// Parameters for updating a fixed payment code. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateFixedPaymentCodeParams {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New expected amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_amount: Option<Amount>,

    /// New expiry timestamp. A date in the past expires the code immediately.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

impl UpdateFixedPaymentCodeParams {
    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the expected amount.
    #[must_use]
    pub fn with_expected_amount(mut self, amount: impl Into<Amount>) -> Self {
        self.expected_amount = Some(amount.into());
        self
    }

    /// Sets the expiry timestamp.
    #[must_use]
    pub fn with_expiration_date(mut self, date: impl Into<String>) -> Self {
        self.expiration_date = Some(date.into());
        self
    }
}

impl IntoRequestBody for UpdateFixedPaymentCodeParams {
    fn into_body(self) -> Result<Body, XenditError> {
        to_body(&self)
    }
}
