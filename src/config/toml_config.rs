use crate::core::ChannelSettings;
use crate::utils::error::{ProcessorError, Result};
use crate::utils::validation::{validate_identifier, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CHANNEL: &str = "example.com/gonative";
pub const DEFAULT_INCREMENT_METHOD: &str = "dataProcessor_increment";
pub const DEFAULT_ARGUMENT_KEY: &str = "data";

/// Names the host uses to reach the processor.
///
/// Loaded from the `[channel]` table of a TOML file; missing keys fall back to
/// the defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    pub name: String,
    pub increment_method: String,
    pub argument_key: String,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    channel: ChannelConfig,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_CHANNEL.to_string(),
            increment_method: DEFAULT_INCREMENT_METHOD.to_string(),
            argument_key: DEFAULT_ARGUMENT_KEY.to_string(),
        }
    }
}

impl ChannelConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ProcessorError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let file: ConfigFile = toml::from_str(&processed_content)?;
        file.channel.validate()?;
        Ok(file.channel)
    }

    /// Replaces `${VAR_NAME}` with the value of the environment variable.
    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ProcessorError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for ChannelConfig {
    fn validate(&self) -> Result<()> {
        validate_identifier("channel.name", &self.name)?;
        validate_identifier("channel.increment_method", &self.increment_method)?;
        validate_identifier("channel.argument_key", &self.argument_key)?;
        Ok(())
    }
}

impl ChannelSettings for ChannelConfig {
    fn channel(&self) -> &str {
        &self.name
    }

    fn increment_method(&self) -> &str {
        &self.increment_method
    }

    fn argument_key(&self) -> &str {
        &self.argument_key
    }
}
