//! Event types for different topics.

use serde::{Deserialize, Serialize};
use vyuha_core::{AbilityId, LogEvent, ParticipantId, Pole, SessionId};

/// Events describing ability use and rejected commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// An ability resolved and the session was committed.
    AbilityResolved {
        session: SessionId,
        actor: ParticipantId,
        ability: AbilityId,
        message: String,
        events: Vec<LogEvent>,
    },

    /// An attribute check was rolled.
    CheckResolved { session: SessionId, event: LogEvent },

    /// A command was rejected; nothing was committed.
    ActionFailed {
        session: SessionId,
        command: String,
        error_code: String,
        message: String,
    },
}

/// A single rules log entry scoped to its session.
///
/// Published on [`Topic::Turn`](super::Topic::Turn) for turn bookkeeping and on
/// [`Topic::Resonance`](super::Topic::Resonance) for zone changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEvent {
    pub session: SessionId,
    pub event: LogEvent,
}

/// Events related to the session's resonance layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResonanceEvent {
    Log(SessionEvent),
    /// The game master changed the environmental default.
    EnvironmentChanged {
        session: SessionId,
        pole: Option<Pole>,
    },
}
