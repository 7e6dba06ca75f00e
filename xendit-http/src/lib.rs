#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP transport for the Xendit payments API client.
//!
//! Provides [`HttpRequestClient`], the production [`xendit::RequestClient`]
//! implementation built on `reqwest`, and its configuration.
//!
//! # Modules
//!
//! - [`client`] - The reqwest-backed request client
//! - [`config`] - Client configuration and environment loading
//! - [`constants`] - Environment variable and header names
//! - [`error`] - Client construction errors
//!
//! # Example
//!
//! ```no_run
//! use xendit::model::{BankCode, CreateClosedVirtualAccountParams};
//! use xendit_http::HttpRequestClient;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let xendit = HttpRequestClient::from_env()?.into_xendit();
//! let params = CreateClosedVirtualAccountParams::new("invoice-42", BankCode::Bni, "John Doe", 250_000_u32);
//! let account = xendit.fixed_virtual_account().create_closed(params).await?;
//! # let _ = account;
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Flags
//!
//! - `telemetry` - Records a tracing span per HTTP request (also enables `xendit/telemetry`)

pub mod client;
pub mod config;
pub mod constants;
pub mod error;

pub use client::HttpRequestClient;
pub use config::HttpClientConfig;
pub use error::HttpClientError;
