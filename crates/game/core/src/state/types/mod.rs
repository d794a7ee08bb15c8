pub mod common;
pub mod participant;
pub mod turn;

pub use common::{ParticipantId, PlayerId, Position, SessionId};
pub use participant::{ActionEconomy, Participant, ParticipantStatus};
pub use turn::{CombatPhase, TurnOrder};
