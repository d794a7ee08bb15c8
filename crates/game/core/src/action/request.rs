//! Execution request and result types.

use crate::ability::AbilityId;
use crate::error::GameError;
use crate::state::{ParticipantId, Position};

use super::{AbilityError, LogEvent};

/// Primary or secondary target of a request: a participant, a point, or neither.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetSpec {
    #[cfg_attr(feature = "serde", serde(default))]
    pub participant: Option<ParticipantId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: Option<Position>,
}

impl TargetSpec {
    pub const NONE: Self = Self {
        participant: None,
        position: None,
    };

    pub fn participant(id: ParticipantId) -> Self {
        Self {
            participant: Some(id),
            position: None,
        }
    }

    pub fn point(position: Position) -> Self {
        Self {
            participant: None,
            position: Some(position),
        }
    }
}

/// A request to resolve one ability use.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionRequest {
    pub actor: ParticipantId,
    pub ability: AbilityId,
    pub target: TargetSpec,
    /// Reserved for multi-target abilities; not consulted by the current effects.
    #[cfg_attr(feature = "serde", serde(default))]
    pub secondary: Vec<TargetSpec>,
}

impl ExecutionRequest {
    pub fn new(actor: ParticipantId, ability: impl Into<AbilityId>, target: TargetSpec) -> Self {
        Self {
            actor,
            ability: ability.into(),
            target,
            secondary: Vec::new(),
        }
    }
}

/// Outcome of one resolution.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionResult {
    pub success: bool,
    pub message: String,
    /// Stable error code when `success` is false.
    #[cfg_attr(feature = "serde", serde(default))]
    pub error_code: Option<String>,
    /// One event per effect application, in application order.
    pub events: Vec<LogEvent>,
    pub affected: Vec<ParticipantId>,
}

impl ExecutionResult {
    pub fn success(message: String, events: Vec<LogEvent>, affected: Vec<ParticipantId>) -> Self {
        Self {
            success: true,
            message,
            error_code: None,
            events,
            affected,
        }
    }

    pub fn failure(err: &AbilityError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
            error_code: Some(err.error_code().to_string()),
            events: Vec::new(),
            affected: Vec::new(),
        }
    }
}
