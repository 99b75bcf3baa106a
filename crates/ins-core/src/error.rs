//! Core error types for BCINS RS
//!
//! Three layers: what a ledger client reports (`LedgerError`), what can go
//! wrong inside a single gateway call (`CallError`), and the contextualised
//! error a gateway operation hands back to its caller (`GatewayError`).

use serde_json::Value;
use thiserror::Error;

/// Errors reported by a ledger client implementation
#[derive(Error, Debug)]
pub enum LedgerError {
    /// No connection to any peer
    #[error("Ledger client unavailable: {0}")]
    Unavailable(String),

    /// Proposal was not endorsed
    #[error("Endorsement failed: {0}")]
    Endorsement(String),

    /// The chaincode function returned an error
    #[error("Chaincode function {function} failed: {message}")]
    Chaincode { function: String, message: String },

    /// No answer in time
    #[error("Timed out waiting for {0}")]
    Timeout(String),

    /// Response bytes could not be decoded
    #[error("Invalid ledger response: {0}")]
    Decode(String),
}

impl LedgerError {
    /// Failure reported by the chaincode function itself
    pub fn chaincode(function: impl Into<String>, message: impl Into<String>) -> Self {
        LedgerError::Chaincode {
            function: function.into(),
            message: message.into(),
        }
    }
}

/// Failure raised while performing one gateway call
#[derive(Error, Debug)]
pub enum CallError {
    /// The underlying client failed
    #[error("{0}")]
    Ledger(#[from] LedgerError),

    /// A creation response that is neither absent nor fully populated
    #[error("{0}")]
    MalformedResponse(Value),

    /// Authentication query returned nothing at all
    #[error("Unknown error, invalid response!")]
    UnknownAuthResult,

    /// Arguments could not be encoded for the chaincode
    #[error("Invalid payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Error returned by gateway operations
///
/// Displays as `"{context}: {source}"`. The wrapped `CallError` is exposed
/// through `std::error::Error::source`, and for client failures the
/// underlying `LedgerError` sits one level below that.
#[derive(Error, Debug)]
#[error("{context}: {source}")]
pub struct GatewayError {
    context: String,
    #[source]
    source: CallError,
}

impl GatewayError {
    /// Wrap `source` with an operation context
    pub fn new(context: impl Into<String>, source: impl Into<CallError>) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Operation-specific context, without the inner message
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The wrapped call failure
    pub fn call_error(&self) -> &CallError {
        &self.source
    }

    /// Unwrap into the call failure, dropping the context
    pub fn into_call_error(self) -> CallError {
        self.source
    }

    /// The client error, when the failure came from the ledger client
    pub fn ledger_error(&self) -> Option<&LedgerError> {
        match &self.source {
            CallError::Ledger(e) => Some(e),
            _ => None,
        }
    }

    /// Whether a creation response broke the exclusive-or rule
    pub fn is_malformed_response(&self) -> bool {
        matches!(self.source, CallError::MalformedResponse(_))
    }

    /// Whether authentication came back empty
    pub fn is_unknown_auth_result(&self) -> bool {
        matches!(self.source, CallError::UnknownAuthResult)
    }

    /// Get error code for logging and API responses
    pub fn error_code(&self) -> &'static str {
        match self.source {
            CallError::Ledger(_) => "ledger_failure",
            CallError::MalformedResponse(_) => "malformed_response",
            CallError::UnknownAuthResult => "unknown_auth_result",
            CallError::Payload(_) => "invalid_payload",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::error::Error as _;

    #[test]
    fn test_gateway_error_display() {
        let err = GatewayError::new(
            "Error getting user info",
            LedgerError::Unavailable("peer0 down".into()),
        );
        assert_eq!(
            err.to_string(),
            "Error getting user info: Ledger client unavailable: peer0 down"
        );
        assert_eq!(err.error_code(), "ledger_failure");
    }

    #[test]
    fn test_source_chain_reaches_ledger_error() {
        let err = GatewayError::new("Error creating user", LedgerError::Timeout("user_create".into()));

        let call = err.source().unwrap();
        assert!(call.downcast_ref::<CallError>().is_some());

        let ledger = call.source().unwrap().downcast_ref::<LedgerError>();
        assert!(matches!(ledger, Some(LedgerError::Timeout(_))));
        assert!(err.ledger_error().is_some());
    }

    #[test]
    fn test_malformed_response_message_carries_response() {
        let err = GatewayError::new(
            "Error creating contract",
            CallError::MalformedResponse(json!({"username": "a"})),
        );
        assert!(err.is_malformed_response());
        assert_eq!(err.to_string(), r#"Error creating contract: {"username":"a"}"#);
        assert!(err.ledger_error().is_none());
    }

    #[test]
    fn test_unknown_auth_result() {
        let err = GatewayError::new("Error authenticating user", CallError::UnknownAuthResult);
        assert!(err.is_unknown_auth_result());
        assert_eq!(err.error_code(), "unknown_auth_result");
        assert!(err.to_string().ends_with("Unknown error, invalid response!"));
    }

    #[test]
    fn test_unencodable_payload_code() {
        let encode_err = serde_json::from_str::<Value>("{not json").unwrap_err();
        let err = GatewayError::new("Error creating user", encode_err);

        assert_eq!(err.error_code(), "invalid_payload");
        assert!(matches!(err.call_error(), CallError::Payload(_)));
        assert!(err.ledger_error().is_none());
        assert!(err.to_string().starts_with("Error creating user: Invalid payload: "));
    }
}
