use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::utils::error::ProcessorError;

/// A quantity to be incremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncrementRequest {
    pub data: i64,
}

/// The "value, error" pair handed back across the bridge.
///
/// On failure `value` is the original input, unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncrementOutcome {
    pub value: i64,
    pub error: Option<String>,
}

impl IncrementOutcome {
    pub fn from_result(data: i64, result: Result<i64, ProcessorError>) -> Self {
        match result {
            Ok(value) => Self { value, error: None },
            Err(e) => Self {
                value: data,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// A named call coming from the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default, deserialize_with = "null_as_empty_map")]
    pub arguments: Map<String, Value>,
}

// Hosts invoking a method without arguments send `null`.
fn null_as_empty_map<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: Map::new(),
        }
    }

    pub fn with_argument(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    pub fn has_argument(&self, key: &str) -> bool {
        self.arguments.contains_key(key)
    }

    pub fn argument(&self, key: &str) -> Option<&Value> {
        self.arguments.get(key)
    }
}

/// What the host receives for a [`MethodCall`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResult {
    Success {
        value: Value,
    },
    Error {
        code: String,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<Value>,
    },
    NotImplemented,
}

impl MethodResult {
    pub fn success(value: impl Into<Value>) -> Self {
        MethodResult::Success {
            value: value.into(),
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        MethodResult::Error {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MethodResult::Success { .. })
    }

    /// Process exit status for the host simulator.
    pub fn exit_code(&self) -> i32 {
        match self {
            MethodResult::Success { .. } => 0,
            MethodResult::Error { .. } => 1,
            MethodResult::NotImplemented => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outcome_keeps_input_on_failure() {
        let outcome =
            IncrementOutcome::from_result(-1000, Err(ProcessorError::NegativeInput { data: -1000 }));
        assert_eq!(outcome.value, -1000);
        assert_eq!(outcome.error.as_deref(), Some("data can't be negative"));
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_method_call_arguments_default_to_empty() {
        let call: MethodCall =
            serde_json::from_str(r#"{"method":"dataProcessor_increment"}"#).unwrap();
        assert!(call.arguments.is_empty());
        assert!(!call.has_argument("data"));
    }

    #[test]
    fn test_method_call_null_arguments_are_empty() {
        let call: MethodCall =
            serde_json::from_str(r#"{"method":"dataProcessor_increment","arguments":null}"#)
                .unwrap();
        assert!(call.arguments.is_empty());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(MethodResult::success(6).exit_code(), 0);
        assert_eq!(MethodResult::error("m", "boom").exit_code(), 1);
        assert_eq!(MethodResult::NotImplemented.exit_code(), 2);
    }

    #[test]
    fn test_method_result_wire_shape() {
        let ok = serde_json::to_value(MethodResult::success(6)).unwrap();
        assert_eq!(ok, json!({"status": "success", "value": 6}));

        let err = serde_json::to_value(MethodResult::error("m", "boom")).unwrap();
        assert_eq!(err, json!({"status": "error", "code": "m", "message": "boom"}));

        let missing = serde_json::to_value(MethodResult::NotImplemented).unwrap();
        assert_eq!(missing, json!({"status": "not_implemented"}));
    }
}
