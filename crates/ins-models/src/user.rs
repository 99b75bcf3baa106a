//! Shop user requests

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::login_info::LoginInfo;

/// User to register with the shop chaincode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Additional profile fields, passed through as-is
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// Outcome of `user_create`
///
/// The chaincode answers with nothing when it stored a new user, and with
/// the stored credentials when the username was already taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCreation {
    Created,
    Existing(LoginInfo),
}

impl UserCreation {
    pub fn is_created(&self) -> bool {
        matches!(self, UserCreation::Created)
    }

    pub fn login_info(&self) -> Option<&LoginInfo> {
        match self {
            UserCreation::Created => None,
            UserCreation::Existing(info) => Some(info),
        }
    }
}

impl From<Option<LoginInfo>> for UserCreation {
    fn from(login_info: Option<LoginInfo>) -> Self {
        match login_info {
            Some(info) => UserCreation::Existing(info),
            None => UserCreation::Created,
        }
    }
}
