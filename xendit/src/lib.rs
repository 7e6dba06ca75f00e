#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Resource operations and value types for the [Xendit](https://www.xendit.co) payments API.
//!
//! This crate builds requests (method, URL, headers, body) from typed or
//! map-based parameters, hands them to an injected [`RequestClient`], and
//! decodes the JSON response into typed records. It does not perform I/O
//! itself; the `xendit-http` crate provides a `reqwest`-based client.
//!
//! # Modules
//!
//! - [`amount`] - Decimal amounts with API-compatible JSON encoding
//! - [`client`] - The [`Xendit`] entry point holding base URL and client
//! - [`error`] - The single [`XenditError`] type
//! - [`model`] - Records and parameter sets (fixed payment codes, virtual accounts)
//! - [`params`] - Request body construction from typed params or raw maps
//! - [`request`] - The [`RequestClient`] seam and [`ApiRequest`]
//! - [`resources`] - Per-resource operation handles
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation of every dispatched request

pub mod amount;
pub mod client;
pub mod error;
pub mod model;
pub mod params;
pub mod request;
pub mod resources;

#[cfg(test)]
mod testing;

pub use amount::Amount;
pub use client::{DEFAULT_BASE_URL, Xendit};
pub use error::XenditError;
pub use params::IntoRequestBody;
pub use request::{ApiRequest, Body, BoxFuture, Headers, Method, RequestClient};
