//! Value records and parameter sets mirroring the API's JSON shapes.
//!
//! Records are plain structs with public fields. Identifiers are assigned by
//! Xendit and stay `None` until a create call returns. Records reference each
//! other by identifier only.

mod fixed_payment_code;
mod fixed_virtual_account;

pub use fixed_payment_code::*;
pub use fixed_virtual_account::*;
