//! Result type aliases

use crate::error::{GatewayError, LedgerError};

/// Result of a ledger client call
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Result of a gateway operation
///
/// Guarded operations return `Ok(None)` while the ledger client is not
/// ready. That is distinct from `Ok(Some(Value::Null))`, which means the
/// chaincode answered with an empty payload.
pub type GatewayResult<T> = Result<T, GatewayError>;
