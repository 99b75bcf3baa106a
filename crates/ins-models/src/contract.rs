//! Insurance contract requests
//!
//! The fields the shop chaincode understands are typed; anything else the
//! caller sends rides along untouched in `attributes`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::login_info::LoginInfo;

/// Contract to be signed through a shop
///
/// # Example
/// ```ignore
/// let contract = NewContract::new()
///     .with_contract_type("c6b1a2de-...")
///     .with_credentials("alice", "s3cret")
///     .with_name("Alice", "Doe")
///     .with_item(json!({"brand": "Canyon", "price": 1200}));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewContract {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_type_uuid: Option<String>,

    /// Owner of the contract; with a password the chaincode creates the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Insured item, opaque here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_rate: Option<f32>,

    /// Any other caller-supplied fields (e.g. `shopType`)
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl NewContract {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contract_type(mut self, contract_type_uuid: impl Into<String>) -> Self {
        self.contract_type_uuid = Some(contract_type_uuid.into());
        self
    }

    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_item(mut self, item: Value) -> Self {
        self.item = Some(item);
        self
    }

    pub fn with_period(mut self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self.end_date = Some(end_date);
        self
    }

    pub fn with_special_rate(mut self, special_rate: f32) -> Self {
        self.special_rate = Some(special_rate);
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// JSON sent to `contract_create`: this contract plus `uuid`.
    ///
    /// `uuid` always wins over a caller-supplied attribute of the same name.
    /// `self` is left untouched.
    pub fn to_payload(&self, uuid: Uuid) -> Result<Value, serde_json::Error> {
        let mut payload = serde_json::to_value(self)?;
        if let Value::Object(fields) = &mut payload {
            fields.insert("uuid".to_string(), Value::String(uuid.to_string()));
        }
        Ok(payload)
    }
}

/// Result of a successful `contract_create`
///
/// Serialises flat: `{"uuid": ..., "username": ..., "password": ...}`,
/// the credentials only present when the chaincode returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractReceipt {
    pub uuid: Uuid,
    #[serde(flatten)]
    pub login_info: Option<LoginInfo>,
}

impl ContractReceipt {
    pub fn new(uuid: Uuid, login_info: Option<LoginInfo>) -> Self {
        Self { uuid, login_info }
    }
}
