//! Combat state machine: `Staging -> Combat -> Exploration`.

use crate::action::LogEvent;
use crate::config::RulesConfig;
use crate::env::{GameEnv, RollSequence};
use crate::state::{
    ActionEconomy, CombatPhase, Participant, ParticipantId, ParticipantStatus, SessionState,
    TurnOrder,
};
use crate::stats::Attribute;

use super::CombatError;

struct InitiativeEntry {
    id: ParticipantId,
    total: i32,
    agility: i32,
}

/// Rolls initiative, fixes the turn order and starts the first turn.
///
/// Ordering is a stable descending sort on `(roll + agility modifier, raw
/// agility)`, so fully tied participants keep their insertion order.
pub fn begin_combat(
    state: &mut SessionState,
    env: &GameEnv<'_>,
) -> Result<Vec<LogEvent>, CombatError> {
    if state.phase == CombatPhase::Combat {
        return Err(CombatError::AlreadyInCombat);
    }
    if state.participants().is_empty() {
        return Err(CombatError::NoParticipants);
    }
    let rules = env.config()?.rules();
    let rng = env.rng()?;

    let mut rolls = RollSequence::new(rng, state.seed, state.nonce, 0);
    let mut events = Vec::with_capacity(state.participants().len() + 2);
    let mut entries = Vec::with_capacity(state.participants().len());

    for participant in state.participants_mut() {
        let roll = rolls.for_roller(participant.id.0).die(rules.check_die);
        let modifier = participant.modifier(Attribute::Agility);
        let total = roll as i32 + modifier;

        participant.initiative = Some(total);
        participant.economy = ActionEconomy::combat_start(rules);
        participant.status = ParticipantStatus::Active;

        events.push(LogEvent::InitiativeRoll {
            actor: participant.name.clone(),
            roll,
            modifier,
            total,
        });
        entries.push(InitiativeEntry {
            id: participant.id,
            total,
            agility: participant.attributes.agility,
        });
    }

    entries.sort_by(|a, b| b.total.cmp(&a.total).then(b.agility.cmp(&a.agility)));
    let order: Vec<ParticipantId> = entries.iter().map(|entry| entry.id).collect();

    state.turn = TurnOrder::new(order);
    state.phase = CombatPhase::Combat;
    state.nonce += 1;

    events.push(LogEvent::TurnOrderSet {
        order: state
            .turn
            .order
            .iter()
            .filter_map(|id| state.participant(*id).map(|p| p.name.clone()))
            .collect(),
    });
    events.push(start_turn(state, rules)?);

    tracing::info!(
        "{}: combat started with {} participants",
        state.id,
        state.turn.order.len()
    );
    Ok(events)
}

/// Ends the current turn and starts the next one.
///
/// Unused movement is forfeited. Wrapping past the last participant starts a
/// new round, which also counts down any summoned resonance zone.
pub fn advance_turn(
    state: &mut SessionState,
    env: &GameEnv<'_>,
) -> Result<Vec<LogEvent>, CombatError> {
    if state.phase != CombatPhase::Combat {
        return Err(CombatError::NotInCombat);
    }
    let rules = env.config()?.rules();
    let current = state.turn.current().ok_or(CombatError::NoParticipants)?;

    if let Some(actor) = state.participant_mut(current) {
        actor.economy.movement = 0;
    }

    let mut events = Vec::new();
    if state.turn.advance() {
        tracing::debug!("{}: round {} begins", state.id, state.turn.round);
        if let Some(zone) = state.resonance.tick() {
            tracing::info!("{}: {} resonance dissolved", state.id, zone.pole);
            events.push(LogEvent::ResonanceExpired { pole: zone.pole });
        }
    }
    events.push(start_turn(state, rules)?);
    Ok(events)
}

/// Leaves combat: clears the turn order, takes everyone off the grid and
/// dissolves any summoned zone.
pub fn end_combat(state: &mut SessionState) -> Result<Vec<LogEvent>, CombatError> {
    if state.phase != CombatPhase::Combat {
        return Err(CombatError::NotInCombat);
    }
    let rounds = state.turn.round;

    let mut events = Vec::new();
    if let Some(zone) = state.resonance.dismiss() {
        events.push(LogEvent::ResonanceExpired { pole: zone.pole });
    }

    state.turn.clear();
    for participant in state.participants_mut() {
        participant.position = None;
        participant.economy = ActionEconomy::default();
        participant.initiative = None;
    }
    state.phase = CombatPhase::Exploration;

    tracing::info!("{}: combat ended after {} rounds", state.id, rounds);
    events.push(LogEvent::CombatEnded { rounds });
    Ok(events)
}

/// Grants the current participant a fresh movement budget and action slots.
fn start_turn(state: &mut SessionState, rules: &RulesConfig) -> Result<LogEvent, CombatError> {
    let round = state.turn.round;
    let current = state.turn.current().ok_or(CombatError::NoParticipants)?;
    let actor = state
        .participant_mut(current)
        .ok_or(CombatError::ParticipantNotFound(current))?;

    refresh_turn(actor, rules);
    tracing::debug!("round {}: {}'s turn", round, actor.name);
    Ok(LogEvent::TurnStarted {
        actor: actor.name.clone(),
        round,
    })
}

/// Reactions are not refilled; the pool lasts the whole combat.
fn refresh_turn(actor: &mut Participant, rules: &RulesConfig) {
    actor.economy.movement = actor.movement_speed;
    actor.economy.standard = rules.standard_actions_per_turn;
    actor.economy.bonus = rules.bonus_actions_per_turn;
}
