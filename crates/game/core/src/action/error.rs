//! Ability resolution errors.
//!
//! Every variant is raised before any state is touched, so a failed request can
//! be corrected and retried. Messages name the unmet condition and its numeric
//! threshold so they can be shown to players directly.

use crate::ability::ActionType;
use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::resonance::ResonanceError;
use crate::stats::ResourceKind;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityError {
    /// Actor, ability or target missing.
    #[error("{0} not found")]
    NotFound(String),

    #[error("{name} is downed and cannot act")]
    ActorIncapacitated { name: String },

    #[error("no {action} actions remaining this turn (need 1, have {remaining})")]
    ActionEconomyExhausted { action: ActionType, remaining: u8 },

    #[error("insufficient {resource} (need {need}, have {have})")]
    InsufficientResource {
        resource: ResourceKind,
        need: u32,
        have: u32,
    },

    #[error("target is out of range (distance {distance}, max {max})")]
    OutOfRange { distance: u32, max: u32 },

    /// Wrong faction, missing coordinates, or an off-grid participant.
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// A custom requirement or effect precondition failed.
    #[error("{0}")]
    RequirementUnmet(String),
}

impl GameError for AbilityError {
    fn severity(&self) -> ErrorSeverity {
        use AbilityError::*;
        match self {
            NotFound(_) | InvalidTarget(_) => ErrorSeverity::Validation,

            ActorIncapacitated { .. }
            | ActionEconomyExhausted { .. }
            | InsufficientResource { .. }
            | OutOfRange { .. }
            | RequirementUnmet(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use AbilityError::*;
        match self {
            NotFound(_) => "ABILITY_NOT_FOUND",
            ActorIncapacitated { .. } => "ABILITY_ACTOR_INCAPACITATED",
            ActionEconomyExhausted { .. } => "ABILITY_ACTION_ECONOMY_EXHAUSTED",
            InsufficientResource { .. } => "ABILITY_INSUFFICIENT_RESOURCE",
            OutOfRange { .. } => "ABILITY_OUT_OF_RANGE",
            InvalidTarget(_) => "ABILITY_INVALID_TARGET",
            RequirementUnmet(_) => "ABILITY_REQUIREMENT_UNMET",
        }
    }
}

/// Missing collaborators and unknown ids both surface as `NotFound`.
impl From<OracleError> for AbilityError {
    fn from(err: OracleError) -> Self {
        match err {
            OracleError::AbilityNotFound(id) => Self::NotFound(format!("ability '{id}'")),
            other => Self::NotFound(other.to_string()),
        }
    }
}

impl From<ResonanceError> for AbilityError {
    fn from(err: ResonanceError) -> Self {
        Self::RequirementUnmet(err.to_string())
    }
}
