//! Resource handles, one per API resource family.
//!
//! Each handle borrows the [`Xendit`](crate::Xendit) entry point, carries an
//! optional caller header map (empty by default), and maps each operation to
//! one request: create → `POST`, read → `GET`, update → `PATCH`.

mod fixed_virtual_account;
mod retail_outlet;

pub use fixed_virtual_account::FixedVirtualAccounts;
pub use retail_outlet::RetailOutlet;
