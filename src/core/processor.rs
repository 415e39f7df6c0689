use crate::core::Incrementer;
use crate::utils::error::{ProcessorError, Result};
use crate::utils::validation::validate_non_negative;

/// Stateless increment capability exposed to the host application.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataProcessor;

impl DataProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Incrementer for DataProcessor {
    fn increment(&self, data: i64) -> Result<i64> {
        if let Err(e) = validate_non_negative("data", data) {
            tracing::warn!("Rejected increment of {}: {}", data, e);
            return Err(e);
        }

        let value = data
            .checked_add(1)
            .ok_or(ProcessorError::Overflow { data })?;

        tracing::debug!("Incremented {} to {}", data, value);
        Ok(value)
    }
}
