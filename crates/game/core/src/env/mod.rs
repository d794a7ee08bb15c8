//! Traits describing read-only collaborators.
//!
//! Oracles expose ability templates, equipment lookups, rules constants and the
//! random source. The [`Env`] aggregate bundles them so the engine can access
//! everything it needs without hard coupling to concrete implementations.
mod abilities;
mod config;
mod error;
mod inventory;
mod rng;

pub use abilities::AbilityOracle;
pub use config::ConfigOracle;
pub use error::OracleError;
pub use inventory::{EmptyInventory, InventoryOracle, ItemCategory};
pub use rng::{PcgRng, RngOracle, RollSequence, ScriptedRng, compute_seed};

/// Aggregates read-only oracles required by the action pipeline and turn logic.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, A, I, C, R>
where
    A: AbilityOracle + ?Sized,
    I: InventoryOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    abilities: Option<&'a A>,
    inventory: Option<&'a I>,
    config: Option<&'a C>,
    rng: Option<&'a R>,
}

pub type GameEnv<'a> = Env<
    'a,
    dyn AbilityOracle + 'a,
    dyn InventoryOracle + 'a,
    dyn ConfigOracle + 'a,
    dyn RngOracle + 'a,
>;

impl<'a, A, I, C, R> Env<'a, A, I, C, R>
where
    A: AbilityOracle + ?Sized,
    I: InventoryOracle + ?Sized,
    C: ConfigOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        abilities: Option<&'a A>,
        inventory: Option<&'a I>,
        config: Option<&'a C>,
        rng: Option<&'a R>,
    ) -> Self {
        Self {
            abilities,
            inventory,
            config,
            rng,
        }
    }

    pub fn with_all(abilities: &'a A, inventory: &'a I, config: &'a C, rng: &'a R) -> Self {
        Self::new(Some(abilities), Some(inventory), Some(config), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            abilities: None,
            inventory: None,
            config: None,
            rng: None,
        }
    }

    /// Returns the AbilityOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::AbilitiesNotAvailable` if no ability oracle was provided.
    pub fn abilities(&self) -> Result<&'a A, OracleError> {
        self.abilities.ok_or(OracleError::AbilitiesNotAvailable)
    }

    /// Returns the InventoryOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::InventoryNotAvailable` if no inventory oracle was provided.
    pub fn inventory(&self) -> Result<&'a I, OracleError> {
        self.inventory.ok_or(OracleError::InventoryNotAvailable)
    }

    /// Returns the ConfigOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn config(&self) -> Result<&'a C, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl<'a, A, I, C, R> Env<'a, A, I, C, R>
where
    A: AbilityOracle + 'a,
    I: InventoryOracle + 'a,
    C: ConfigOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv` (consumes self).
    pub fn into_game_env(self) -> GameEnv<'a> {
        self.as_game_env()
    }

    /// Converts this environment into a trait-object based `GameEnv` (borrows self).
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let abilities: Option<&'a dyn AbilityOracle> = self.abilities.map(|a| a as _);
        let inventory: Option<&'a dyn InventoryOracle> = self.inventory.map(|i| i as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|c| c as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|r| r as _);
        Env::new(abilities, inventory, config, rng)
    }
}
