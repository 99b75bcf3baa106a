//! Ledger client double for unit tests

use async_trait::async_trait;
use ins_core::result::LedgerResult;
use ins_core::traits::{Block, EventSource, LedgerClient, Listener, ListenerId};
use mockall::mock;
use serde_json::Value;

mock! {
    pub Ledger {}

    impl EventSource for Ledger {
        fn on(&self, event: &str, listener: Listener) -> ListenerId;
        fn once(&self, event: &str, listener: Listener) -> ListenerId;
        fn add_listener(&self, event: &str, listener: Listener) -> ListenerId;
        fn prepend_listener(&self, event: &str, listener: Listener) -> ListenerId;
        fn remove_listener(&self, event: &str, id: ListenerId) -> bool;
    }

    #[async_trait]
    impl LedgerClient for Ledger {
        async fn invoke(
            &self,
            chaincode_id: &str,
            chaincode_version: &str,
            function: &str,
            args: Vec<Value>,
        ) -> LedgerResult<Option<Value>>;

        async fn query(
            &self,
            chaincode_id: &str,
            chaincode_version: &str,
            function: &str,
            args: Vec<Value>,
        ) -> LedgerResult<Option<Value>>;

        async fn get_blocks(&self, count: u64) -> LedgerResult<Vec<Block>>;
    }
}
