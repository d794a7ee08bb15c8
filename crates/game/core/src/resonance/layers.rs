//! Resonance layering for a session.
//!
//! Evaluation is a fixed precedence chain, first match wins:
//!
//! 1. personal immunity, which resolves to no resonance for its owner
//! 2. the summoned zone, while it has rounds remaining
//! 3. the environmental default
//!
//! A summoned zone fully replaces the environmental default; the two never blend.

use crate::state::{ParticipantId, Position};

use super::{Pole, Resonance, ResonanceAffinity, ResonanceError};

/// Which layer produced an effective resonance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResonanceSource {
    /// No layer applied.
    Ambient,
    Environmental,
    Summoned,
    /// Personal immunity nullified every layer.
    Immune,
}

/// Resonance affecting one participant, with its provenance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EffectiveResonance {
    pub resonance: Resonance,
    pub source: ResonanceSource,
}

impl EffectiveResonance {
    pub const NONE: Self = Self {
        resonance: Resonance::NONE,
        source: ResonanceSource::Ambient,
    };
}

/// A player-summoned resonance zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummonedZone {
    pub pole: Pole,
    pub enhanced: bool,
    pub caster: ParticipantId,
    pub center: Position,
    pub radius: u32,
    pub rounds_remaining: u32,
}

impl SummonedZone {
    pub fn is_active(&self) -> bool {
        self.rounds_remaining > 0
    }

    pub fn resonance(&self) -> Resonance {
        Resonance {
            pole: Some(self.pole),
            enhanced: self.enhanced,
        }
    }
}

/// Session-scoped resonance layers.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResonanceState {
    /// Default resonance of the location, set by the game master.
    pub environmental: Option<Pole>,
    /// At most one summoned zone per session.
    pub summoned: Option<SummonedZone>,
}

type Layer = fn(&ResonanceState, &ResonanceAffinity) -> Option<EffectiveResonance>;

const LAYERS: [Layer; 3] = [immunity_layer, summoned_layer, environmental_layer];

fn immunity_layer(_: &ResonanceState, affinity: &ResonanceAffinity) -> Option<EffectiveResonance> {
    affinity.is_immune().then_some(EffectiveResonance {
        resonance: Resonance::NONE,
        source: ResonanceSource::Immune,
    })
}

fn summoned_layer(state: &ResonanceState, _: &ResonanceAffinity) -> Option<EffectiveResonance> {
    state.active_zone().map(|zone| EffectiveResonance {
        resonance: zone.resonance(),
        source: ResonanceSource::Summoned,
    })
}

fn environmental_layer(
    state: &ResonanceState,
    _: &ResonanceAffinity,
) -> Option<EffectiveResonance> {
    state.environmental.map(|pole| EffectiveResonance {
        resonance: Resonance::standard(pole),
        source: ResonanceSource::Environmental,
    })
}

impl ResonanceState {
    pub fn with_environmental(pole: Option<Pole>) -> Self {
        Self {
            environmental: pole,
            summoned: None,
        }
    }

    /// The summoned zone, if one exists and has not run out.
    pub fn active_zone(&self) -> Option<&SummonedZone> {
        self.summoned.as_ref().filter(|zone| zone.is_active())
    }

    /// Resonance affecting a participant with the given affinity.
    pub fn effective_for(&self, affinity: &ResonanceAffinity) -> EffectiveResonance {
        LAYERS
            .iter()
            .find_map(|layer| layer(self, affinity))
            .unwrap_or(EffectiveResonance::NONE)
    }

    /// Installs a summoned zone.
    ///
    /// # Errors
    ///
    /// Returns `ResonanceError::ZoneAlreadyActive` while another zone is active.
    pub fn summon(&mut self, zone: SummonedZone) -> Result<(), ResonanceError> {
        if let Some(active) = self.active_zone() {
            return Err(ResonanceError::ZoneAlreadyActive {
                pole: active.pole,
                rounds_remaining: active.rounds_remaining,
            });
        }
        self.summoned = Some(zone);
        Ok(())
    }

    /// Counts down the summoned zone by one round.
    ///
    /// Returns the zone if it dissolved on this tick.
    pub fn tick(&mut self) -> Option<SummonedZone> {
        let zone = self.summoned.as_mut()?;
        zone.rounds_remaining = zone.rounds_remaining.saturating_sub(1);
        if zone.is_active() {
            None
        } else {
            self.summoned.take()
        }
    }

    /// Removes any summoned zone immediately.
    pub fn dismiss(&mut self) -> Option<SummonedZone> {
        self.summoned.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resonance::ResonanceTalent;

    fn zone(pole: Pole, rounds: u32) -> SummonedZone {
        SummonedZone {
            pole,
            enhanced: false,
            caster: ParticipantId(1),
            center: Position::ORIGIN,
            radius: 15,
            rounds_remaining: rounds,
        }
    }

    #[test]
    fn environmental_applies_without_zone() {
        let state = ResonanceState::with_environmental(Some(Pole::Abyssal));
        let effective = state.effective_for(&ResonanceAffinity::default());
        assert_eq!(effective.resonance, Resonance::standard(Pole::Abyssal));
        assert_eq!(effective.source, ResonanceSource::Environmental);
    }

    #[test]
    fn summoned_zone_overrides_environment() {
        let mut state = ResonanceState::with_environmental(Some(Pole::Abyssal));
        state.summon(zone(Pole::Celestial, 3)).unwrap();
        let effective = state.effective_for(&ResonanceAffinity::default());
        assert_eq!(effective.resonance.pole, Some(Pole::Celestial));
        assert_eq!(effective.source, ResonanceSource::Summoned);
    }

    #[test]
    fn immunity_short_circuits_everything() {
        let mut state = ResonanceState::with_environmental(Some(Pole::Abyssal));
        state.summon(zone(Pole::Celestial, 3)).unwrap();
        let effective = state.effective_for(&ResonanceAffinity::immune());
        assert!(effective.resonance.is_none());
        assert_eq!(effective.source, ResonanceSource::Immune);
        // Immunity never touches the zone itself.
        assert!(state.active_zone().is_some());
    }

    #[test]
    fn mastery_does_not_nullify() {
        let state = ResonanceState::with_environmental(Some(Pole::Celestial));
        let affinity =
            ResonanceAffinity::attuned(Pole::Abyssal).with_talent(ResonanceTalent::Mastery);
        assert_eq!(
            state.effective_for(&affinity).resonance.pole,
            Some(Pole::Celestial)
        );
    }

    #[test]
    fn second_summon_is_rejected() {
        let mut state = ResonanceState::default();
        state.summon(zone(Pole::Celestial, 5)).unwrap();
        let err = state.summon(zone(Pole::Abyssal, 5)).unwrap_err();
        assert_eq!(
            err,
            ResonanceError::ZoneAlreadyActive {
                pole: Pole::Celestial,
                rounds_remaining: 5
            }
        );
        assert_eq!(state.active_zone().map(|z| z.pole), Some(Pole::Celestial));
    }

    #[test]
    fn zone_expires_after_its_duration() {
        let mut state = ResonanceState::with_environmental(Some(Pole::Abyssal));
        state.summon(zone(Pole::Celestial, 2)).unwrap();
        assert!(state.tick().is_none());
        let expired = state.tick().expect("zone should dissolve");
        assert_eq!(expired.pole, Pole::Celestial);
        assert!(state.summoned.is_none());
        assert_eq!(
            state.effective_for(&ResonanceAffinity::default()).resonance,
            Resonance::standard(Pole::Abyssal)
        );
        // A fresh summon is allowed once the old zone is gone.
        assert!(state.summon(zone(Pole::Abyssal, 5)).is_ok());
    }
}
