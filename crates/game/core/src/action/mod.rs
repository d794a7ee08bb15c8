//! Ability resolution: requests, results, errors and the execution pipeline.

mod error;
mod log;
mod request;

pub mod execute;

pub use error::AbilityError;
pub use execute::{EffectContext, execute};
pub use log::LogEvent;
pub use request::{ExecutionRequest, ExecutionResult, TargetSpec};
