pub mod channel;
pub mod processor;

pub use crate::domain::model::{IncrementOutcome, IncrementRequest, MethodCall, MethodResult};
pub use crate::domain::ports::{ChannelSettings, Incrementer};
pub use crate::utils::error::Result;
