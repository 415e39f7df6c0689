use crate::config::ChannelConfig;
use crate::core::{MethodCall, Result};
use crate::utils::error::ProcessorError;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Command line for the host simulator.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "data-processor")]
#[command(about = "Dispatch a method call to the data processor the way a mobile host would")]
pub struct CliConfig {
    #[arg(
        long,
        conflicts_with = "call",
        help = "Method to call (defaults to the configured increment method)"
    )]
    pub method: Option<String>,

    #[arg(long, allow_hyphen_values = true, conflicts_with = "call")]
    pub data: Option<i64>,

    #[arg(long, help = "Raw JSON method call, e.g. '{\"method\":\"...\",\"arguments\":{}}'")]
    pub call: Option<String>,

    #[arg(long, help = "TOML file with a [channel] table")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn channel_config(&self) -> Result<ChannelConfig> {
        match &self.config {
            Some(path) => ChannelConfig::from_file(path),
            None => Ok(ChannelConfig::default()),
        }
    }

    /// Builds the call to dispatch from `--call` or `--method`/`--data`.
    pub fn method_call(&self, channel: &ChannelConfig) -> Result<MethodCall> {
        if let Some(raw) = &self.call {
            return Ok(serde_json::from_str(raw)?);
        }

        let method = self
            .method
            .clone()
            .unwrap_or_else(|| channel.increment_method.clone());
        let mut call = MethodCall::new(method);
        if let Some(data) = self.data {
            call = call.with_argument(channel.argument_key.clone(), data);
        }
        Ok(call)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(method) = &self.method {
            crate::utils::validation::validate_identifier("method", method)?;
        }

        if self.call.is_none() && self.data.is_none() && self.method.is_none() {
            return Err(ProcessorError::ConfigError {
                message: "pass --data, --method or --call".to_string(),
            });
        }

        Ok(())
    }
}
