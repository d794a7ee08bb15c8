//! Runtime wrapper around static content oracles.
//!
//! [`OracleManager`] bundles the ability catalog, the equipment store, the
//! rules constants and the random source so workers can build a
//! [`vyuha_core::GameEnv`] on demand. The data is immutable at runtime; dynamic
//! state lives in repositories or [`vyuha_core::SessionState`].

use std::sync::Arc;

use vyuha_content::{AbilityCatalog, InMemoryInventory};
use vyuha_core::{
    AbilityOracle, ConfigOracle, Env, GameEnv, InventoryOracle, PcgRng, RngOracle, RulesConfig,
};

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) abilities: Arc<AbilityCatalog>,
    pub(crate) inventory: Arc<InMemoryInventory>,
    pub(crate) rules: Arc<RulesConfig>,
    pub(crate) rng: Arc<dyn RngOracle>,
}

impl OracleManager {
    /// Creates a new oracle manager with default rules and the PCG random source.
    pub fn new(abilities: Arc<AbilityCatalog>, inventory: Arc<InMemoryInventory>) -> Self {
        Self {
            abilities,
            inventory,
            rules: Arc::new(RulesConfig::default()),
            rng: Arc::new(PcgRng), // PcgRng is stateless
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = Arc::new(rules);
        self
    }

    /// Replaces the random source, e.g. with a scripted one in tests.
    #[must_use]
    pub fn with_rng(mut self, rng: Arc<dyn RngOracle>) -> Self {
        self.rng = rng;
        self
    }

    /// Converts oracle manager into GameEnv for vyuha-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::new(
            Some(self.abilities.as_ref() as &dyn AbilityOracle),
            Some(self.inventory.as_ref() as &dyn InventoryOracle),
            Some(self.rules.as_ref() as &dyn ConfigOracle),
            Some(self.rng.as_ref() as &dyn RngOracle),
        )
    }

    pub fn abilities(&self) -> &AbilityCatalog {
        &self.abilities
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }
}
