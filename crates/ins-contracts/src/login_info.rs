//! Creation response contract
//!
//! `contract_create` and `user_create` answer either with nothing or with a
//! complete `{username, password}` pair. A response that is present but
//! lacks one of the two is malformed.
//!
//! "Nothing" is wider here than for other functions: `shim.Success(nil)`
//! reaches clients as an empty string, so `""`, `false` and `0` count as an
//! empty answer alongside `null`.

use ins_core::error::CallError;
use ins_models::LoginInfo;
use serde_json::Value;

use crate::base::{is_absent, ResponseContract, ValidationResult};

#[derive(Debug, Default, Clone, Copy)]
pub struct LoginInfoContract;

impl LoginInfoContract {
    pub fn new() -> Self {
        Self
    }

    fn credentials(response: &Value) -> Option<LoginInfo> {
        let username = non_empty_str(response, "username")?;
        let password = non_empty_str(response, "password")?;
        Some(LoginInfo::new(username, password))
    }
}

/// Whether a creation response carries no answer at all
fn is_empty_answer(response: Option<&Value>) -> bool {
    if is_absent(response) {
        return true;
    }
    match response {
        Some(Value::Bool(b)) => !b,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key)?.as_str().filter(|s| !s.is_empty())
}

impl ResponseContract for LoginInfoContract {
    type Output = Option<LoginInfo>;

    fn validate(&self, response: Option<Value>) -> ValidationResult<Self::Output> {
        let absent = is_empty_answer(response.as_ref());
        let login_info = response.as_ref().and_then(Self::credentials);

        // exactly one of the two must hold
        if absent ^ login_info.is_some() {
            Ok(login_info)
        } else {
            Err(CallError::MalformedResponse(response.unwrap_or(Value::Null)))
        }
    }
}
