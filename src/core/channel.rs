use crate::core::{ChannelSettings, IncrementRequest, Incrementer, MethodCall, MethodResult};
use crate::utils::error::{ProcessorError, Result};
use serde_json::json;

pub const INVALID_CALL_CODE: &str = "invalid_call";

/// Dispatches host method calls to an [`Incrementer`].
pub struct MethodChannel<C: ChannelSettings, I: Incrementer> {
    pub(crate) config: C,
    pub(crate) processor: I,
}

impl<C: ChannelSettings, I: Incrementer> MethodChannel<C, I> {
    pub fn new(config: C, processor: I) -> Self {
        tracing::debug!(
            "Registering method channel {} ({})",
            config.channel(),
            config.increment_method()
        );
        Self { config, processor }
    }

    pub fn name(&self) -> &str {
        self.config.channel()
    }

    pub fn handle(&self, call: &MethodCall) -> MethodResult {
        let method = self.config.increment_method();
        if call.method != method {
            tracing::debug!("No handler for method {}", call.method);
            return MethodResult::NotImplemented;
        }

        let request = match self.parse_request(call) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("Malformed {} call: {}", method, e);
                return MethodResult::error(method, e.to_string());
            }
        };

        match self.processor.increment(request.data) {
            Ok(value) => MethodResult::success(value),
            Err(e) => MethodResult::Error {
                code: method.to_string(),
                message: e.to_string(),
                details: e.rejected_data().map(|data| json!({ "data": data })),
            },
        }
    }

    /// Decodes a JSON [`MethodCall`], dispatches it and encodes the result.
    pub fn handle_json(&self, payload: &str) -> String {
        let result = match serde_json::from_str::<MethodCall>(payload) {
            Ok(call) => self.handle(&call),
            Err(e) => {
                tracing::warn!("Could not decode method call: {}", e);
                MethodResult::error(INVALID_CALL_CODE, e.to_string())
            }
        };
        encode_result(&result)
    }

    fn parse_request(&self, call: &MethodCall) -> Result<IncrementRequest> {
        let key = self.config.argument_key();
        let value = call
            .argument(key)
            .ok_or_else(|| ProcessorError::MissingArgument {
                method: call.method.clone(),
                key: key.to_string(),
            })?;

        let data = value.as_i64().ok_or_else(|| ProcessorError::InvalidArgument {
            key: key.to_string(),
            reason: "must be a 64-bit integer".to_string(),
        })?;

        Ok(IncrementRequest { data })
    }
}

pub fn encode_result(result: &MethodResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|e| {
        tracing::error!("Could not encode method result: {}", e);
        format!(
            r#"{{"status":"error","code":"{}","message":"result encoding failed"}}"#,
            INVALID_CALL_CODE
        )
    })
}
