//! Request body construction.
//!
//! Every create/update operation accepts `impl IntoRequestBody`. The trait is
//! implemented for the typed parameter structs in [`crate::model`] and for a
//! raw JSON object map ([`Body`]), so callers can pick either form. In both
//! cases null-valued entries never reach the wire.

use serde::Serialize;
use serde_json::Value;

use crate::error::XenditError;
use crate::request::Body;

/// Converts operation parameters into a JSON request body.
pub trait IntoRequestBody {
    /// Builds the body, dropping null-valued fields.
    ///
    /// # Errors
    ///
    /// Returns [`XenditError`] if the parameters do not serialize to a JSON object.
    fn into_body(self) -> Result<Body, XenditError>;
}

impl IntoRequestBody for Body {
    fn into_body(self) -> Result<Body, XenditError> {
        Ok(without_nulls(self))
    }
}

/// Serializes typed parameters into a body, dropping null-valued fields.
pub(crate) fn to_body<T: Serialize + ?Sized>(params: &T) -> Result<Body, XenditError> {
    match serde_json::to_value(params)? {
        Value::Object(map) => Ok(without_nulls(map)),
        other => Err(XenditError::new(format!(
            "request parameters must serialize to a JSON object, got {other}"
        ))),
    }
}

fn without_nulls(mut body: Body) -> Body {
    body.retain(|_, value| !value.is_null());
    body
}
