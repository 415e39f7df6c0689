use anyhow::Context;
use clap::Parser;
use data_processor::utils::{logger, validation::Validate};
use data_processor::{CliConfig, DataProcessor, MethodChannel};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting data-processor host simulator");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    let channel_config = match config.channel_config() {
        Ok(channel_config) => channel_config,
        Err(e) => {
            tracing::error!("Could not load channel configuration: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let call = match config.method_call(&channel_config) {
        Ok(call) => call,
        Err(e) => {
            tracing::error!("Could not build method call: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let channel = MethodChannel::new(channel_config, DataProcessor::new());
    tracing::info!("Dispatching {} on {}", call.method, channel.name());

    let result = channel.handle(&call);
    println!(
        "{}",
        serde_json::to_string_pretty(&result).context("could not encode result")?
    );

    let exit_code = result.exit_code();
    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
