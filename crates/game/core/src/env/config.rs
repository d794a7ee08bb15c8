//! Configuration oracle for exposing rules constants to the engine.

use crate::config::RulesConfig;

pub trait ConfigOracle: Send + Sync {
    fn rules(&self) -> &RulesConfig;
}

impl ConfigOracle for RulesConfig {
    fn rules(&self) -> &RulesConfig {
        self
    }
}
