//! Direct passthroughs to the ledger client
//!
//! Block retrieval and event subscription are forwarded unchanged: no
//! readiness guard, no error wrapping, no listener state kept here.

use ins_core::result::LedgerResult;
use ins_core::traits::{Block, EventSource, Listener, ListenerId};

use crate::gateway::ContractGateway;

impl ContractGateway {
    /// Last `count` blocks, exactly as the client returns them
    pub async fn get_blocks(&self, count: u64) -> LedgerResult<Vec<Block>> {
        self.client.get_blocks(count).await
    }
}

impl EventSource for ContractGateway {
    fn on(&self, event: &str, listener: Listener) -> ListenerId {
        self.client.on(event, listener)
    }

    fn once(&self, event: &str, listener: Listener) -> ListenerId {
        self.client.once(event, listener)
    }

    fn add_listener(&self, event: &str, listener: Listener) -> ListenerId {
        self.client.add_listener(event, listener)
    }

    fn prepend_listener(&self, event: &str, listener: Listener) -> ListenerId {
        self.client.prepend_listener(event, listener)
    }

    fn remove_listener(&self, event: &str, id: ListenerId) -> bool {
        self.client.remove_listener(event, id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ins_core::config::GatewayConfig;
    use ins_core::error::LedgerError;
    use ins_core::BLOCK_EVENT;
    use serde_json::{json, Value};

    use crate::testing::MockLedger;

    use super::*;

    fn not_ready_gateway(ledger: MockLedger) -> ContractGateway {
        ContractGateway::new(Arc::new(ledger), Arc::new(|| false), &GatewayConfig::default())
    }

    fn noop() -> Listener {
        Arc::new(|_: &Value| {})
    }

    #[tokio::test]
    async fn test_get_blocks_ignores_readiness() {
        let mut ledger = MockLedger::new();
        ledger
            .expect_get_blocks()
            .withf(|count| *count == 3)
            .times(1)
            .returning(|_| Ok(vec![json!({"number": 9}), json!({"number": 8})]));

        let blocks = not_ready_gateway(ledger).get_blocks(3).await.unwrap();
        assert_eq!(blocks.len(), 2);
    }

    #[tokio::test]
    async fn test_get_blocks_error_is_not_wrapped() {
        let mut ledger = MockLedger::new();
        ledger
            .expect_get_blocks()
            .returning(|_| Err(LedgerError::Timeout("blocks".into())));

        let err = not_ready_gateway(ledger).get_blocks(1).await.unwrap_err();
        assert!(matches!(err, LedgerError::Timeout(_)));
        assert_eq!(err.to_string(), "Timed out waiting for blocks");
    }

    #[test]
    fn test_subscriptions_forward_to_client() {
        let mut ledger = MockLedger::new();
        ledger
            .expect_on()
            .withf(|event, _| event.to_string() == "block")
            .times(1)
            .returning(|_, _| ListenerId(1));
        ledger.expect_once().times(1).returning(|_, _| ListenerId(2));
        ledger.expect_add_listener().times(1).returning(|_, _| ListenerId(3));
        ledger
            .expect_prepend_listener()
            .times(1)
            .returning(|_, _| ListenerId(4));
        ledger
            .expect_remove_listener()
            .withf(|event, id| event.to_string() == "block" && *id == ListenerId(1))
            .times(1)
            .returning(|_, _| true);

        let gateway = not_ready_gateway(ledger);

        assert_eq!(gateway.on(BLOCK_EVENT, noop()), ListenerId(1));
        assert_eq!(gateway.once(BLOCK_EVENT, noop()), ListenerId(2));
        assert_eq!(gateway.add_listener(BLOCK_EVENT, noop()), ListenerId(3));
        assert_eq!(gateway.prepend_listener(BLOCK_EVENT, noop()), ListenerId(4));
        assert!(gateway.remove_listener(BLOCK_EVENT, ListenerId(1)));
    }
}
