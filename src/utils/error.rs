use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("data can't be negative")]
    NegativeInput { data: i64 },

    #[error("data {data} is too large to increment")]
    Overflow { data: i64 },

    #[error("Send argument as Map<\"{key}\", int>")]
    MissingArgument { method: String, key: String },

    #[error("argument \"{key}\" {reason}")]
    InvalidArgument { key: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Channel,
    Configuration,
    System,
}

impl ProcessorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProcessorError::NegativeInput { .. } | ProcessorError::Overflow { .. } => {
                ErrorCategory::Validation
            }
            ProcessorError::MissingArgument { .. }
            | ProcessorError::InvalidArgument { .. }
            | ProcessorError::SerializationError(_) => ErrorCategory::Channel,
            ProcessorError::TomlError(_)
            | ProcessorError::ConfigError { .. }
            | ProcessorError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ProcessorError::IoError(_) => ErrorCategory::System,
        }
    }

    /// The input value a rejected increment was called with, if any.
    pub fn rejected_data(&self) -> Option<i64> {
        match self {
            ProcessorError::NegativeInput { data } | ProcessorError::Overflow { data } => {
                Some(*data)
            }
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => format!("Invalid input: {}", self),
            ErrorCategory::Channel => format!("Bad method call: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProcessorError>;
