//! Shop identifiers and listing filters

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque shop type used to filter contract types (e.g. "bikes", "phones")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopType(String);

impl ShopType {
    pub fn new(shop_type: impl Into<String>) -> Self {
        Self(shop_type.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShopType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ShopType {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Optional username restricting a contract listing
///
/// Only text counts as a username. Anything else coming from JSON input
/// (numbers, objects, null) means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UsernameFilter(Option<String>);

impl UsernameFilter {
    pub fn any() -> Self {
        Self(None)
    }

    pub fn user(username: impl Into<String>) -> Self {
        Self(Some(username.into()))
    }

    pub fn username(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn into_inner(self) -> Option<String> {
        self.0
    }

    pub fn is_any(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for UsernameFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(username) => f.write_str(username),
            None => f.write_str("none"),
        }
    }
}

impl From<&str> for UsernameFilter {
    fn from(s: &str) -> Self {
        Self::user(s)
    }
}

impl From<String> for UsernameFilter {
    fn from(s: String) -> Self {
        Self(Some(s))
    }
}

impl From<&String> for UsernameFilter {
    fn from(s: &String) -> Self {
        Self(Some(s.clone()))
    }
}

impl From<Option<&str>> for UsernameFilter {
    fn from(s: Option<&str>) -> Self {
        Self(s.map(str::to_string))
    }
}

impl From<Option<String>> for UsernameFilter {
    fn from(s: Option<String>) -> Self {
        Self(s)
    }
}

impl From<&Value> for UsernameFilter {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => Self(Some(s.clone())),
            _ => Self(None),
        }
    }
}

impl From<Value> for UsernameFilter {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self(Some(s)),
            _ => Self(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shop_type_serializes_as_string() {
        let shop_type = ShopType::from("bikes");
        assert_eq!(serde_json::to_value(&shop_type).unwrap(), json!("bikes"));
        assert_eq!(shop_type.to_string(), "bikes");
    }

    #[test]
    fn test_username_filter_from_json() {
        assert_eq!(UsernameFilter::from(&json!("alice")).username(), Some("alice"));
        assert!(UsernameFilter::from(&json!(123)).is_any());
        assert!(UsernameFilter::from(json!({"username": "alice"})).is_any());
        assert!(UsernameFilter::from(Value::Null).is_any());
    }

    #[test]
    fn test_username_filter_display() {
        assert_eq!(UsernameFilter::user("bob").to_string(), "bob");
        assert_eq!(UsernameFilter::any().to_string(), "none");
    }
}
