//! # ins-gateway
//!
//! Async gateway to the shop chaincode.
//!
//! `ContractGateway` forwards contract and user operations to an injected
//! `LedgerClient`, addressing the configured chaincode. Guarded operations
//! return `Ok(None)` while the client is not ready; failures come back as a
//! `GatewayError` naming the operation and carrying the underlying cause.
//!
//! ```ignore
//! let gateway = ContractGateway::new(client, Arc::new(ready_flag), &config);
//! if let Some(receipt) = gateway.create_contract(&contract).await? {
//!     println!("signed contract {}", receipt.uuid);
//! }
//! ```

pub mod functions;
mod gateway;
mod contracts;
mod users;
mod ledger;

#[cfg(test)]
mod testing;

pub use gateway::ContractGateway;

pub use ins_core::config::{ChaincodeConfig, GatewayConfig};
pub use ins_core::{
    Block, EventSource, GatewayError, GatewayResult, LedgerClient, LedgerError, LedgerResult, Listener,
    ListenerId, ReadinessCheck, ReadyFlag,
};
pub use ins_models::{ContractReceipt, LoginInfo, NewContract, NewUser, ShopType, UserCreation, UsernameFilter};
