//! Resonance errors.

use crate::error::{ErrorSeverity, GameError};

use super::Pole;

/// Errors raised when manipulating the session's resonance layers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResonanceError {
    /// A summoned zone already holds the session.
    #[error("a {pole} resonance zone is already active ({rounds_remaining} rounds remaining)")]
    ZoneAlreadyActive { pole: Pole, rounds_remaining: u32 },

    /// The summoner has no pole to call on.
    #[error("{name} is not attuned to any resonance")]
    NotAttuned { name: String },
}

impl GameError for ResonanceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ZoneAlreadyActive { .. } => ErrorSeverity::Recoverable,
            Self::NotAttuned { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZoneAlreadyActive { .. } => "RESONANCE_ZONE_ALREADY_ACTIVE",
            Self::NotAttuned { .. } => "RESONANCE_NOT_ATTUNED",
        }
    }
}
