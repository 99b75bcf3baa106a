//! Collaborator traits
//!
//! The gateway never talks to peers itself. Everything goes through these
//! seams, which a real ledger SDK wrapper (or a test double) implements.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::result::LedgerResult;

/// A block as delivered by the ledger client
pub type Block = Value;

/// Callback registered for a ledger event
pub type Listener = Arc<dyn Fn(&Value) + Send + Sync>;

/// Handle identifying one registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(pub u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// Event subscription capability of a ledger client
pub trait EventSource: Send + Sync {
    /// Append a listener for `event`
    fn on(&self, event: &str, listener: Listener) -> ListenerId;

    /// Append a listener that is dropped after its first call
    fn once(&self, event: &str, listener: Listener) -> ListenerId;

    /// Same as `on`
    fn add_listener(&self, event: &str, listener: Listener) -> ListenerId {
        self.on(event, listener)
    }

    /// Insert a listener ahead of the ones already registered for `event`
    fn prepend_listener(&self, event: &str, listener: Listener) -> ListenerId;

    /// Remove a listener; returns whether it was registered
    fn remove_listener(&self, event: &str, id: ListenerId) -> bool;
}

/// Blockchain client the gateway delegates to
///
/// `invoke` submits a transaction, `query` evaluates one without ordering it.
/// Both return `None` when the chaincode answered with an empty payload.
#[async_trait]
pub trait LedgerClient: EventSource {
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

    /// Fetch the last `count` blocks
    async fn get_blocks(&self, count: u64) -> LedgerResult<Vec<Block>>;
}

/// Whether the ledger client has completed setup
pub trait ReadinessCheck: Send + Sync {
    fn is_ready(&self) -> bool;
}

impl<F> ReadinessCheck for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_ready(&self) -> bool {
        self()
    }
}
