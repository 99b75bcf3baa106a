//! Contract operations
//!
//! Chaincode functions: `contract_type_ls`, `shop_contract_ls`, `contract_create`

use ins_contracts::{LoginInfoContract, ResponseContract};
use ins_core::error::CallError;
use ins_core::result::GatewayResult;
use ins_models::query::{ContractTypeQuery, ShopContractQuery};
use ins_models::{ContractReceipt, NewContract, ShopType, UsernameFilter};
use serde_json::Value;
use uuid::Uuid;

use crate::functions::{CONTRACT_CREATE, CONTRACT_TYPE_LS, SHOP_CONTRACT_LS};
use crate::gateway::{fail, ContractGateway};

impl ContractGateway {
    /// Contract types offered for `shop_type`, as returned by the chaincode
    pub async fn list_contract_types(&self, shop_type: impl Into<ShopType>) -> GatewayResult<Option<Value>> {
        if !self.ready_for(CONTRACT_TYPE_LS) {
            return Ok(None);
        }
        let shop_type = shop_type.into();

        self.query_raw(CONTRACT_TYPE_LS, &ContractTypeQuery { shop_type: &shop_type })
            .await
            .map(Some)
            .map_err(|e| fail(format!("Error getting contract types for shop type {shop_type}"), e))
    }

    /// Contracts signed through the shop, optionally for one user
    ///
    /// Anything that is not text (e.g. `json!(123)`) lists all contracts.
    pub async fn list_contracts(&self, username: impl Into<UsernameFilter>) -> GatewayResult<Option<Value>> {
        if !self.ready_for(SHOP_CONTRACT_LS) {
            return Ok(None);
        }
        let filter = username.into();

        self.query_raw(SHOP_CONTRACT_LS, &ShopContractQuery::new(&filter))
            .await
            .map(Some)
            .map_err(|e| fail(format!("Error getting contracts for {filter}"), e))
    }

    /// Submit a new contract under a freshly generated uuid
    ///
    /// The receipt carries the uuid, plus the credentials the chaincode
    /// returns when it registered the contract owner as a new user.
    pub async fn create_contract(&self, contract: &NewContract) -> GatewayResult<Option<ContractReceipt>> {
        if !self.ready_for(CONTRACT_CREATE) {
            return Ok(None);
        }

        self.submit_contract(contract)
            .await
            .map(Some)
            .map_err(|e| fail("Error creating contract", e))
    }

    async fn submit_contract(&self, contract: &NewContract) -> Result<ContractReceipt, CallError> {
        let uuid = Uuid::new_v4();
        let payload = contract.to_payload(uuid)?;

        tracing::info!(%uuid, "submitting contract");

        let response = self.invoke(CONTRACT_CREATE, vec![payload]).await?;
        let login_info = LoginInfoContract::new().validate(response)?;

        Ok(ContractReceipt::new(uuid, login_info))
    }
}
