//! Authoritative session state.
//!
//! This module owns the participants, turn bookkeeping and resonance layers
//! of one combat session. Runtime layers clone or query this state but mutate
//! it exclusively through the engine.
pub mod types;

pub use types::{
    ActionEconomy, CombatPhase, Participant, ParticipantId, ParticipantStatus, PlayerId, Position,
    SessionId, TurnOrder,
};

use crate::resonance::ResonanceState;

/// Canonical snapshot of one combat session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    pub id: SessionId,

    /// RNG seed for deterministic random generation.
    ///
    /// Combined with `nonce` to derive a unique seed for each roll.
    pub seed: u64,

    /// Incremented after every resolution that consumed randomness.
    #[cfg_attr(feature = "serde", serde(default))]
    pub nonce: u64,

    pub phase: CombatPhase,
    pub turn: TurnOrder,
    pub resonance: ResonanceState,

    /// Participants in insertion order. Initiative ties fall back to this order.
    participants: Vec<Participant>,
}

impl SessionState {
    pub fn new(id: SessionId, seed: u64) -> Self {
        Self {
            id,
            seed,
            nonce: 0,
            phase: CombatPhase::Staging,
            turn: TurnOrder::default(),
            resonance: ResonanceState::default(),
            participants: Vec::new(),
        }
    }

    /// Adds a participant (builder pattern). Replaces any participant with the same id.
    #[must_use]
    pub fn with_participant(mut self, participant: Participant) -> Self {
        self.add_participant(participant);
        self
    }

    /// Adds a participant, replacing an existing one with the same id in place.
    pub fn add_participant(&mut self, participant: Participant) {
        match self.participant_mut(participant.id) {
            Some(existing) => *existing = participant,
            None => self.participants.push(participant),
        }
    }

    /// Removes a participant from the session and from the turn order.
    pub fn remove_participant(&mut self, id: ParticipantId) -> Option<Participant> {
        let index = self.participants.iter().position(|p| p.id == id)?;
        self.turn.remove(id);
        Some(self.participants.remove(index))
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn participant_mut(&mut self, id: ParticipantId) -> Option<&mut Participant> {
        self.participants.iter_mut().find(|p| p.id == id)
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participants_mut(&mut self) -> impl Iterator<Item = &mut Participant> {
        self.participants.iter_mut()
    }

    /// Ids of on-grid participants within `radius` squares of `center` (inclusive),
    /// in insertion order.
    pub fn participants_within(&self, center: Position, radius: u32) -> Vec<ParticipantId> {
        self.participants
            .iter()
            .filter(|p| p.position.is_some_and(|pos| pos.distance(center) <= radius))
            .map(|p| p.id)
            .collect()
    }

    /// Participant whose turn it currently is, if combat is running.
    pub fn current_actor(&self) -> Option<ParticipantId> {
        match self.phase {
            CombatPhase::Combat => self.turn.current(),
            _ => None,
        }
    }

    pub fn in_combat(&self) -> bool {
        self.phase == CombatPhase::Combat
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(SessionId::default(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionState {
        SessionState::new(SessionId(1), 7)
            .with_participant(
                Participant::new(ParticipantId(1), "Arjun", PlayerId(1)).at(Position::new(0, 0)),
            )
            .with_participant(
                Participant::new(ParticipantId(2), "Kali", PlayerId(2)).at(Position::new(3, 4)),
            )
            .with_participant(Participant::new(ParticipantId(3), "Offgrid", PlayerId(2)))
    }

    #[test]
    fn area_membership_is_inclusive_and_skips_offgrid() {
        let state = session();
        assert_eq!(
            state.participants_within(Position::ORIGIN, 4),
            vec![ParticipantId(1), ParticipantId(2)]
        );
        assert_eq!(
            state.participants_within(Position::ORIGIN, 3),
            vec![ParticipantId(1)]
        );
    }

    #[test]
    fn add_replaces_in_place() {
        let mut state = session();
        state.add_participant(Participant::new(ParticipantId(2), "Kali II", PlayerId(2)));
        assert_eq!(state.participants().len(), 3);
        assert_eq!(state.participants()[1].name, "Kali II");
    }

    #[test]
    fn remove_drops_from_turn_order() {
        let mut state = session();
        state.turn = TurnOrder::new(vec![ParticipantId(2), ParticipantId(1)]);
        assert!(state.remove_participant(ParticipantId(2)).is_some());
        assert_eq!(state.turn.order, vec![ParticipantId(1)]);
        assert!(state.participant(ParticipantId(2)).is_none());
    }
}
