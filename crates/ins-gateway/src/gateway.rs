//! Gateway construction and the shared invoke/query plumbing

use std::fmt;
use std::sync::Arc;

use ins_core::config::{ChaincodeConfig, GatewayConfig};
use ins_core::error::{CallError, GatewayError};
use ins_core::result::LedgerResult;
use ins_core::traits::{LedgerClient, ReadinessCheck};
use serde::Serialize;
use serde_json::Value;

/// Typed async surface over a ledger client, bound to one chaincode
///
/// Cloning is cheap; clones share the client and the readiness check.
#[derive(Clone)]
pub struct ContractGateway {
    pub(crate) client: Arc<dyn LedgerClient>,
    readiness: Arc<dyn ReadinessCheck>,
    chaincode: ChaincodeConfig,
}

impl fmt::Debug for ContractGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractGateway")
            .field("chaincode", &self.chaincode)
            .field("ready", &self.is_ready())
            .finish_non_exhaustive()
    }
}

impl ContractGateway {
    pub fn new(
        client: Arc<dyn LedgerClient>,
        readiness: Arc<dyn ReadinessCheck>,
        config: &GatewayConfig,
    ) -> Self {
        Self::with_chaincode(client, readiness, config.chaincode.clone())
    }

    pub fn with_chaincode(
        client: Arc<dyn LedgerClient>,
        readiness: Arc<dyn ReadinessCheck>,
        chaincode: ChaincodeConfig,
    ) -> Self {
        Self {
            client,
            readiness,
            chaincode,
        }
    }

    pub fn chaincode(&self) -> &ChaincodeConfig {
        &self.chaincode
    }

    pub fn is_ready(&self) -> bool {
        self.readiness.is_ready()
    }

    /// Readiness guard shared by every chaincode operation
    pub(crate) fn ready_for(&self, function: &str) -> bool {
        let ready = self.is_ready();
        if !ready {
            tracing::debug!(function, "ledger client not ready, skipping chaincode call");
        }
        ready
    }

    pub(crate) async fn invoke(&self, function: &str, args: Vec<Value>) -> LedgerResult<Option<Value>> {
        tracing::debug!(
            chaincode_id = %self.chaincode.id,
            chaincode_version = %self.chaincode.version,
            function,
            "invoking chaincode"
        );
        self.client
            .invoke(&self.chaincode.id, &self.chaincode.version, function, args)
            .await
    }

    pub(crate) async fn query(&self, function: &str, args: Vec<Value>) -> LedgerResult<Option<Value>> {
        tracing::debug!(
            chaincode_id = %self.chaincode.id,
            chaincode_version = %self.chaincode.version,
            function,
            "querying chaincode"
        );
        self.client
            .query(&self.chaincode.id, &self.chaincode.version, function, args)
            .await
    }

    /// Query and hand back the raw result, `Value::Null` when empty
    pub(crate) async fn query_raw<A: Serialize>(&self, function: &str, arg: &A) -> Result<Value, CallError> {
        let response = self.query(function, vec![encode(arg)?]).await?;
        Ok(response.unwrap_or(Value::Null))
    }
}

pub(crate) fn encode<A: Serialize>(arg: &A) -> Result<Value, CallError> {
    Ok(serde_json::to_value(arg)?)
}

/// Wrap a failed call with the operation's context
pub(crate) fn fail(context: impl Into<String>, source: CallError) -> GatewayError {
    let err = GatewayError::new(context, source);
    tracing::warn!(code = err.error_code(), error = %err, "chaincode call failed");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockLedger;
    use ins_core::ReadyFlag;
    use serde_json::json;

    #[tokio::test]
    async fn test_query_prepends_chaincode_id_and_version() {
        let mut ledger = MockLedger::new();
        ledger
            .expect_query()
            .withf(|id, version, function, args| {
                id.to_string() == "shop"
                    && version.to_string() == "7"
                    && function.to_string() == "user_get_info"
                    && args.len() == 1
            })
            .times(1)
            .returning(|_, _, _, _| Ok(Some(json!({"username": "alice"}))));

        let gateway = ContractGateway::with_chaincode(
            Arc::new(ledger),
            Arc::new(ReadyFlag::ready()),
            ChaincodeConfig::new("shop", "7"),
        );

        let value = gateway
            .query_raw("user_get_info", &json!({"username": "alice"}))
            .await
            .unwrap();
        assert_eq!(value, json!({"username": "alice"}));
    }

    #[tokio::test]
    async fn test_invoke_uses_configured_chaincode() {
        let mut ledger = MockLedger::new();
        ledger
            .expect_invoke()
            .withf(|id, version, _, _| id.to_string() == "bcins" && version.to_string() == "1.0")
            .times(1)
            .returning(|_, _, _, _| Ok(None));

        let gateway = ContractGateway::new(
            Arc::new(ledger),
            Arc::new(ReadyFlag::ready()),
            &GatewayConfig::default(),
        );

        assert!(gateway.invoke("user_create", vec![]).await.unwrap().is_none());
    }

    #[test]
    fn test_debug_shows_chaincode_and_readiness() {
        let gateway = ContractGateway::new(
            Arc::new(MockLedger::new()),
            Arc::new(ReadyFlag::new()),
            &GatewayConfig::default(),
        );
        let debug = format!("{gateway:?}");
        assert!(debug.contains("bcins"));
        assert!(debug.contains("ready: false"));
    }
}
