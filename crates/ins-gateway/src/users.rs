//! User operations
//!
//! Chaincode functions: `user_create`, `user_authenticate`, `user_get_info`

use ins_contracts::{AuthResultContract, LoginInfoContract, ResponseContract};
use ins_core::error::CallError;
use ins_core::result::GatewayResult;
use ins_models::query::{Credentials, UserInfoQuery};
use ins_models::{NewUser, UserCreation};
use serde_json::Value;

use crate::functions::{USER_AUTHENTICATE, USER_CREATE, USER_GET_INFO};
use crate::gateway::{encode, fail, ContractGateway};

impl ContractGateway {
    /// Register a user; an existing username comes back as `UserCreation::Existing`
    pub async fn create_user(&self, user: &NewUser) -> GatewayResult<Option<UserCreation>> {
        if !self.ready_for(USER_CREATE) {
            return Ok(None);
        }

        self.register_user(user)
            .await
            .map(Some)
            .map_err(|e| fail("Error creating user", e))
    }

    async fn register_user(&self, user: &NewUser) -> Result<UserCreation, CallError> {
        let response = self.invoke(USER_CREATE, vec![encode(user)?]).await?;
        let login_info = LoginInfoContract::new().validate(response)?;
        Ok(UserCreation::from(login_info))
    }

    /// Check a username/password pair
    ///
    /// Returns the chaincode's answer as-is, so `Some(Value::Bool(false))`
    /// is a rejected login. An empty answer is an error.
    pub async fn authenticate_user(&self, username: &str, password: &str) -> GatewayResult<Option<Value>> {
        if !self.ready_for(USER_AUTHENTICATE) {
            return Ok(None);
        }

        self.check_credentials(username, password)
            .await
            .map(Some)
            .map_err(|e| fail("Error authenticating user", e))
    }

    async fn check_credentials(&self, username: &str, password: &str) -> Result<Value, CallError> {
        let args = vec![encode(&Credentials { username, password })?];
        let response = self.query(USER_AUTHENTICATE, args).await?;
        AuthResultContract::new().validate(response)
    }

    pub async fn get_user_info(&self, username: &str) -> GatewayResult<Option<Value>> {
        if !self.ready_for(USER_GET_INFO) {
            return Ok(None);
        }

        self.query_raw(USER_GET_INFO, &UserInfoQuery { username })
            .await
            .map(Some)
            .map_err(|e| fail("Error getting user info", e))
    }
}
