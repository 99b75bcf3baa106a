//! Argument shapes for the chaincode query functions

use serde::Serialize;

use crate::shop::{ShopType, UsernameFilter};

/// Argument of `contract_type_ls`
#[derive(Debug, Clone, Serialize)]
pub struct ContractTypeQuery<'a> {
    #[serde(rename = "shopType")]
    pub shop_type: &'a ShopType,
}

/// Argument of `shop_contract_ls`; the key is left out when unfiltered
#[derive(Debug, Clone, Serialize)]
pub struct ShopContractQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<&'a str>,
}

impl<'a> ShopContractQuery<'a> {
    pub fn new(filter: &'a UsernameFilter) -> Self {
        Self {
            username: filter.username(),
        }
    }
}

/// Argument of `user_authenticate`
#[derive(Debug, Clone, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Argument of `user_get_info`
#[derive(Debug, Clone, Serialize)]
pub struct UserInfoQuery<'a> {
    pub username: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contract_type_query_key() {
        let shop_type = ShopType::new("phones");
        let value = serde_json::to_value(ContractTypeQuery { shop_type: &shop_type }).unwrap();
        assert_eq!(value, json!({"shopType": "phones"}));
    }

    #[test]
    fn test_unfiltered_contract_query_is_empty() {
        let filter = UsernameFilter::any();
        let value = serde_json::to_value(ShopContractQuery::new(&filter)).unwrap();
        assert_eq!(value, json!({}));

        let filter = UsernameFilter::user("alice");
        let value = serde_json::to_value(ShopContractQuery::new(&filter)).unwrap();
        assert_eq!(value, json!({"username": "alice"}));
    }
}
