//! Fixed (callback) virtual accounts, their payments, and supported banks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::amount::Amount;
use crate::error::XenditError;
use crate::params::{IntoRequestBody, to_body};
use crate::request::Body;

/// Bank issuing a virtual account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankCode {
    /// Bank Central Asia.
    Bca,
    /// Bank Negara Indonesia.
    Bni,
    /// Bank Rakyat Indonesia.
    Bri,
    /// Bank BJB.
    Bjb,
    /// Bank Syariah Indonesia.
    Bsi,
    /// CIMB Niaga.
    Cimb,
    /// Bank Mandiri.
    Mandiri,
    /// Bank Permata.
    Permata,
    /// Bank Sahabat Sampoerna.
    SahabatSampoerna,
}

impl BankCode {
    /// Returns the wire name, e.g. `"BNI"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bca => "BCA",
            Self::Bni => "BNI",
            Self::Bri => "BRI",
            Self::Bjb => "BJB",
            Self::Bsi => "BSI",
            Self::Cimb => "CIMB",
            Self::Mandiri => "MANDIRI",
            Self::Permata => "PERMATA",
            Self::SahabatSampoerna => "SAHABAT_SAMPOERNA",
        }
    }
}

impl fmt::Display for BankCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BankCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BCA" => Ok(Self::Bca),
            "BNI" => Ok(Self::Bni),
            "BRI" => Ok(Self::Bri),
            "BJB" => Ok(Self::Bjb),
            "BSI" => Ok(Self::Bsi),
            "CIMB" => Ok(Self::Cimb),
            "MANDIRI" => Ok(Self::Mandiri),
            "PERMATA" => Ok(Self::Permata),
            "SAHABAT_SAMPOERNA" => Ok(Self::SahabatSampoerna),
            other => Err(format!("unknown bank code '{other}'")),
        }
    }
}

impl From<BankCode> for Value {
    fn from(code: BankCode) -> Self {
        Self::String(code.as_str().to_owned())
    }
}

/// A fixed virtual account customers can transfer into.
///
/// Closed accounts accept exactly `expected_amount`; open accounts accept any
/// amount.
///
/// Bank codes in responses stay raw strings so accounts at banks this crate
/// does not list still decode; [`bank_code()`](Self::bank_code()) gives the typed view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedVirtualAccount {
    /// Identifier assigned by Xendit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Business that owns the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    /// Caller-chosen identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// Issuing bank code as sent by the API, e.g. `"BNI"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,

    /// Merchant prefix of the account number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_code: Option<String>,

    /// Account holder name shown to the payer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Full virtual account number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    /// Whether only `expected_amount` is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,

    /// Whether the account deactivates after one payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_single_use: Option<bool>,

    /// Lifecycle status, e.g. `"PENDING"` or `"ACTIVE"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// ISO 4217 currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// ISO 8601 expiry timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,

    /// Amount suggested to the payer on open accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_amount: Option<Amount>,

    /// Amount required on closed accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_amount: Option<Amount>,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A payment received into a fixed virtual account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedVirtualAccountPayment {
    /// Identifier assigned by Xendit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Bank-side payment identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,

    /// The [`FixedVirtualAccount::id`] that received the payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_virtual_account_id: Option<String>,

    /// External identifier of the receiving account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// Merchant prefix of the account number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_code: Option<String>,

    /// Account number that was paid into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    /// Issuing bank code as sent by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,

    /// Amount paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,

    /// ISO 8601 time the transfer was made.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_timestamp: Option<String>,
}

impl FixedVirtualAccount {
    /// Returns the issuing bank as a [`BankCode`], if it is a known one.
    #[must_use]
    pub fn bank_code(&self) -> Option<BankCode> {
        self.bank_code.as_deref()?.parse().ok()
    }
}

impl FixedVirtualAccountPayment {
    /// Returns the issuing bank as a [`BankCode`], if it is a known one.
    #[must_use]
    pub fn bank_code(&self) -> Option<BankCode> {
        self.bank_code.as_deref()?.parse().ok()
    }
}

/// A bank that can issue virtual accounts.
///
/// `code` is kept as the raw string so banks added by the API after this
/// crate was published still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableBank {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Bank code as sent by the API, e.g. `"MANDIRI"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl AvailableBank {
    /// Returns the bank code as a [`BankCode`], if it is a known one.
    #[must_use]
    pub fn bank_code(&self) -> Option<BankCode> {
        self.code.as_deref()?.parse().ok()
    }
}

/// Parameters for creating a closed virtual account.
///
/// The body always carries `"is_closed": true` unless overridden through
/// [`with_param`](Self::with_param).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateClosedVirtualAccountParams {
    /// Caller-chosen identifier.
    pub external_id: String,

    /// Issuing bank.
    pub bank_code: BankCode,

    /// Account holder name.
    pub name: String,

    /// The only amount the account accepts.
    pub expected_amount: Amount,

    /// Further API parameters (e.g. `virtual_account_number`,
    /// `is_single_use`, `expiration_date`), sent verbatim.
    #[serde(flatten)]
    pub additional: Body,
}

impl CreateClosedVirtualAccountParams {
    /// Creates parameters with the required fields.
    #[must_use]
    pub fn new(
        external_id: impl Into<String>,
        bank_code: BankCode,
        name: impl Into<String>,
        expected_amount: impl Into<Amount>,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            bank_code,
            name: name.into(),
            expected_amount: expected_amount.into(),
            additional: Body::new(),
        }
    }

    /// Adds a free-form parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.additional.insert(key.into(), value.into());
        self
    }
}

impl IntoRequestBody for CreateClosedVirtualAccountParams {
    fn into_body(self) -> Result<Body, XenditError> {
        let mut body = to_body(&self)?;
        body.entry("is_closed").or_insert(Value::Bool(true));
        Ok(body)
    }
}

/// Parameters for creating an open virtual account.
///
/// The body always carries `"is_closed": false` unless overridden through
/// [`with_param`](Self::with_param).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOpenVirtualAccountParams {
    /// Caller-chosen identifier.
    pub external_id: String,

    /// Issuing bank.
    pub bank_code: BankCode,

    /// Account holder name.
    pub name: String,

    /// Further API parameters, sent verbatim.
    #[serde(flatten)]
    pub additional: Body,
}

impl CreateOpenVirtualAccountParams {
    /// Creates parameters with the required fields.
    #[must_use]
    pub fn new(external_id: impl Into<String>, bank_code: BankCode, name: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            bank_code,
            name: name.into(),
            additional: Body::new(),
        }
    }

    /// Adds a free-form parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.additional.insert(key.into(), value.into());
        self
    }
}

impl IntoRequestBody for CreateOpenVirtualAccountParams {
    fn into_body(self) -> Result<Body, XenditError> {
        let mut body = to_body(&self)?;
        body.entry("is_closed").or_insert(Value::Bool(false));
        Ok(body)
    }
}

/// Parameters for updating a fixed virtual account. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateVirtualAccountParams {
    /// Whether the account deactivates after one payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_single_use: Option<bool>,

    /// New required amount (closed accounts).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_amount: Option<Amount>,

    /// New suggested amount (open accounts).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_amount: Option<Amount>,

    /// New expiry timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Further API parameters, sent verbatim.
    #[serde(flatten)]
    pub additional: Body,
}

impl UpdateVirtualAccountParams {
    /// Sets whether the account is single-use.
    #[must_use]
    pub const fn with_single_use(mut self, single_use: bool) -> Self {
        self.is_single_use = Some(single_use);
        self
    }

    /// Sets the expected amount.
    #[must_use]
    pub fn with_expected_amount(mut self, amount: impl Into<Amount>) -> Self {
        self.expected_amount = Some(amount.into());
        self
    }

    /// Sets the suggested amount.
    #[must_use]
    pub fn with_suggested_amount(mut self, amount: impl Into<Amount>) -> Self {
        self.suggested_amount = Some(amount.into());
        self
    }

    /// Sets the expiry timestamp.
    #[must_use]
    pub fn with_expiration_date(mut self, date: impl Into<String>) -> Self {
        self.expiration_date = Some(date.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a free-form parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.additional.insert(key.into(), value.into());
        self
    }
}

impl IntoRequestBody for UpdateVirtualAccountParams {
    fn into_body(self) -> Result<Body, XenditError> {
        to_body(&self)
    }
}
