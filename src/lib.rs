pub mod config;
pub mod core;
pub mod domain;
pub mod ffi;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ChannelConfig;

pub use core::{
    channel::MethodChannel, processor::DataProcessor, IncrementOutcome, Incrementer, MethodCall,
    MethodResult,
};
pub use utils::error::{ProcessorError, Result};
