//! Credentials returned by creation calls

use serde::{Deserialize, Serialize};

/// Username and password handed back by `contract_create` / `user_create`
/// when the chaincode created (or found) an account for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginInfo {
    /// Account name
    pub username: String,
    /// Password stored by the chaincode
    pub password: String,
}

impl LoginInfo {
    /// Build from a username/password pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
