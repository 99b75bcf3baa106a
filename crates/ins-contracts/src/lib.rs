//! # ins-contracts
//!
//! Validation of chaincode responses.
//!
//! Each contract takes the raw payload a ledger call produced and either
//! turns it into the typed result of the operation or rejects it with a
//! `CallError`. Contracts never talk to the ledger.

pub mod base;
pub mod login_info;
pub mod auth;

pub use base::*;
pub use login_info::LoginInfoContract;
pub use auth::AuthResultContract;
