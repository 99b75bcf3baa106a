//! Base response contract

use ins_core::error::CallError;
use serde_json::Value;

/// Result of validating a chaincode response
pub type ValidationResult<T> = Result<T, CallError>;

/// Validates the raw response of one chaincode function
pub trait ResponseContract: Send + Sync {
    type Output;

    fn validate(&self, response: Option<Value>) -> ValidationResult<Self::Output>;
}

/// Whether the chaincode answered with nothing at all
pub fn is_absent(response: Option<&Value>) -> bool {
    matches!(response, None | Some(Value::Null))
}
