//! Raw attribute checks.

use crate::action::LogEvent;
use crate::env::{GameEnv, RollSequence};
use crate::state::{ParticipantId, SessionState};
use crate::stats::Attribute;

use super::CombatError;

/// Outcome of an attribute check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOutcome {
    pub success: bool,
    pub total: i32,
    pub event: LogEvent,
}

/// Rolls `d20 + modifier + resonance check modifier` against `dc`.
///
/// Success iff the total meets or beats the DC.
pub fn resolve_check(
    state: &mut SessionState,
    env: &GameEnv<'_>,
    participant: ParticipantId,
    attribute: Attribute,
    dc: i32,
) -> Result<CheckOutcome, CombatError> {
    let rules = env.config()?.rules();
    let rng = env.rng()?;

    let actor = state
        .participant(participant)
        .ok_or(CombatError::ParticipantNotFound(participant))?;
    let resonance = state
        .resonance
        .effective_for(&actor.affinity)
        .resonance
        .check_modifier(attribute.category(), &rules.resonance);
    let modifier = actor.modifier(attribute);

    let roll = RollSequence::new(rng, state.seed, state.nonce, participant.0).die(rules.check_die);
    let total = roll as i32 + modifier + resonance;
    let success = total >= dc;

    tracing::debug!(
        "{} {} check: {} + {} + {} = {} vs DC {}",
        actor.name,
        attribute,
        roll,
        modifier,
        resonance,
        total,
        dc
    );

    let event = LogEvent::SkillCheck {
        actor: actor.name.clone(),
        attribute,
        roll,
        modifier,
        resonance,
        total,
        dc,
        success,
    };
    state.nonce += 1;

    Ok(CheckOutcome {
        success,
        total,
        event,
    })
}
