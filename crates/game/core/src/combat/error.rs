//! Combat state machine errors.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::ParticipantId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    #[error("combat is already in progress")]
    AlreadyInCombat,

    #[error("no combat in progress")]
    NotInCombat,

    #[error("the session has no participants")]
    NoParticipants,

    #[error("participant {0} not found")]
    ParticipantNotFound(ParticipantId),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyInCombat | Self::NotInCombat => ErrorSeverity::Recoverable,
            Self::NoParticipants | Self::ParticipantNotFound(_) => ErrorSeverity::Validation,
            Self::Oracle(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyInCombat => "COMBAT_ALREADY_IN_PROGRESS",
            Self::NotInCombat => "COMBAT_NOT_IN_PROGRESS",
            Self::NoParticipants => "COMBAT_NO_PARTICIPANTS",
            Self::ParticipantNotFound(_) => "COMBAT_PARTICIPANT_NOT_FOUND",
            Self::Oracle(err) => err.error_code(),
        }
    }
}
