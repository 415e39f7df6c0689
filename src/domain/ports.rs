use crate::domain::model::IncrementOutcome;
use crate::utils::error::Result;

pub trait Incrementer: Send + Sync {
    fn increment(&self, data: i64) -> Result<i64>;

    fn increment_outcome(&self, data: i64) -> IncrementOutcome {
        IncrementOutcome::from_result(data, self.increment(data))
    }
}

pub trait ChannelSettings: Send + Sync {
    fn channel(&self) -> &str;
    fn increment_method(&self) -> &str;
    fn argument_key(&self) -> &str;
}
