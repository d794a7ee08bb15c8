//! Execution orchestrator.
//!
//! 1. Load actor and ability
//! 2. Validate (status, action economy, resources, requirements)
//! 3. Resolve targets
//! 4. Check effect preconditions
//! 5. Charge the ledger (deferred for movement-paid teleports)
//! 6. Apply the effect to each affected participant
//!
//! Teleport and summon effects apply once to the actor. Any other effect whose
//! area holds nobody is rejected before payment. Steps 1-4 never mutate. Once step 5 starts the resolution runs to completion.

use crate::action::{AbilityError, ExecutionRequest, ExecutionResult};
use crate::ability::EffectKind;
use crate::env::{GameEnv, OracleError, RollSequence};
use crate::state::SessionState;

use super::context::EffectContext;
use super::{effects, ledger, targeting, validation};

pub(super) fn execute(
    state: &mut SessionState,
    env: &GameEnv<'_>,
    request: &ExecutionRequest,
) -> Result<ExecutionResult, AbilityError> {
    let abilities = env.abilities()?;
    let inventory = env.inventory()?;
    let rules = env.config()?.rules();
    let rng = env.rng()?;

    // 1. Load
    let ability = abilities
        .ability(&request.ability)
        .ok_or_else(|| OracleError::AbilityNotFound(request.ability.clone()))?;
    let actor = state
        .participant(request.actor)
        .ok_or_else(|| AbilityError::NotFound(format!("participant {}", request.actor)))?;
    let resonance = state.resonance.effective_for(&actor.affinity);

    tracing::debug!(
        "{} attempts {} (resonance {:?} via {:?})",
        actor.name,
        ability.name,
        resonance.resonance.pole,
        resonance.source
    );

    // 2-4. Validate without mutation
    validation::validate(actor, ability, &resonance.resonance, rules, inventory)?;
    let targeting = targeting::resolve(state, actor, ability, &request.target)?;
    effects::pre_validate(state, actor, ability, &request.target)?;

    let actor_id = actor.id;
    let affected = if ability.acts_on_caster() {
        vec![actor_id]
    } else {
        targeting.affected
    };
    if affected.is_empty() {
        return Err(AbilityError::InvalidTarget(format!(
            "{} affects no participants",
            ability.name
        )));
    }

    // 5. Ledger
    if !ability.defers_payment() {
        let actor = state
            .participant_mut(actor_id)
            .ok_or_else(|| AbilityError::NotFound(format!("participant {actor_id}")))?;
        ledger::charge(actor, ability, &resonance.resonance, rules);
    }

    // Snapshot after payment, before effects.
    let snapshot = state
        .participant(actor_id)
        .cloned()
        .ok_or_else(|| AbilityError::NotFound(format!("participant {actor_id}")))?;

    // 6. Effects
    let seed = state.seed;
    let nonce = state.nonce;
    let mut ctx = EffectContext {
        state: &mut *state,
        actor: &snapshot,
        ability,
        target: &request.target,
        resonance: resonance.resonance,
        rules,
        rolls: RollSequence::new(rng, seed, nonce, actor_id.0),
    };

    let mut events = Vec::with_capacity(affected.len());
    for target in &affected {
        events.extend(effects::apply(&mut ctx, *target)?);
    }
    state.nonce += 1;

    let message = if ability.effect == EffectKind::Teleport {
        format!("{} used {} and moved!", snapshot.name, ability.name)
    } else {
        format!("{} used {}!", snapshot.name, ability.name)
    };
    tracing::debug!("{} ({} events)", message, events.len());

    Ok(ExecutionResult::success(message, events, affected))
}
