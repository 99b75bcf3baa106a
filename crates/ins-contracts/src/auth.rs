//! Authentication response contract

use ins_core::error::CallError;
use serde_json::Value;

use crate::base::{is_absent, ResponseContract, ValidationResult};

/// `user_authenticate` must answer with something. A missing result is not
/// the same as `false` and is rejected instead of being read as a failed
/// login.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthResultContract;

impl AuthResultContract {
    pub fn new() -> Self {
        Self
    }
}

impl ResponseContract for AuthResultContract {
    type Output = Value;

    fn validate(&self, response: Option<Value>) -> ValidationResult<Value> {
        if is_absent(response.as_ref()) {
            return Err(CallError::UnknownAuthResult);
        }
        Ok(response.unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_false_is_a_valid_answer() {
        let result = AuthResultContract::new().validate(Some(json!(false))).unwrap();
        assert_eq!(result, json!(false));
    }

    #[test]
    fn test_missing_answer_is_rejected() {
        let contract = AuthResultContract::new();
        assert!(matches!(contract.validate(None), Err(CallError::UnknownAuthResult)));
        assert!(matches!(
            contract.validate(Some(Value::Null)),
            Err(CallError::UnknownAuthResult)
        ));
    }
}
