//! # ins-models
//!
//! Request and response shapes exchanged with the shop chaincode.
//!
//! None of these are persisted by this workspace: they are built for one
//! gateway call and dropped once the response has been returned.

pub mod contract;
pub mod user;
pub mod login_info;
pub mod shop;
pub mod query;

pub use contract::{ContractReceipt, NewContract};
pub use user::{NewUser, UserCreation};
pub use login_info::LoginInfo;
pub use shop::{ShopType, UsernameFilter};
