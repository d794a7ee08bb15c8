//! Oracle access errors.

use crate::ability::AbilityId;
use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing oracle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("AbilityOracle not available")]
    AbilitiesNotAvailable,

    #[error("InventoryOracle not available")]
    InventoryNotAvailable,

    #[error("ConfigOracle not available")]
    ConfigNotAvailable,

    #[error("RngOracle not available")]
    RngNotAvailable,

    #[error("ability '{0}' not found")]
    AbilityNotFound(AbilityId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            // Missing oracles are fatal - engine cannot proceed
            AbilitiesNotAvailable | InventoryNotAvailable | ConfigNotAvailable
            | RngNotAvailable => ErrorSeverity::Fatal,

            AbilityNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            AbilitiesNotAvailable => "ORACLE_ABILITIES_NOT_AVAILABLE",
            InventoryNotAvailable => "ORACLE_INVENTORY_NOT_AVAILABLE",
            ConfigNotAvailable => "ORACLE_CONFIG_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            AbilityNotFound(_) => "ORACLE_ABILITY_NOT_FOUND",
        }
    }
}
