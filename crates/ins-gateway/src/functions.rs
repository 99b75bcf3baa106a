//! Chaincode function names

pub const CONTRACT_TYPE_LS: &str = "contract_type_ls";
pub const SHOP_CONTRACT_LS: &str = "shop_contract_ls";
pub const CONTRACT_CREATE: &str = "contract_create";
pub const USER_CREATE: &str = "user_create";
pub const USER_AUTHENTICATE: &str = "user_authenticate";
pub const USER_GET_INFO: &str = "user_get_info";
