//! Effect execution context.

use crate::ability::Ability;
use crate::action::TargetSpec;
use crate::config::RulesConfig;
use crate::env::{RngOracle, RollSequence};
use crate::resonance::Resonance;
use crate::state::{Participant, SessionState};

/// Everything an effect needs while it is applied to one target.
///
/// The actor is a snapshot taken after payment and before any effect, so an
/// area effect that also hits the actor does not change modifiers mid-resolution.
pub struct EffectContext<'a, R: RngOracle + ?Sized> {
    pub state: &'a mut SessionState,
    pub actor: &'a Participant,
    pub ability: &'a Ability,
    /// Primary target as requested (teleport destinations live here).
    pub target: &'a TargetSpec,
    /// Resonance affecting the actor.
    pub resonance: Resonance,
    pub rules: &'a RulesConfig,
    pub rolls: RollSequence<'a, R>,
}
