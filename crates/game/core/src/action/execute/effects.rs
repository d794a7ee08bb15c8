//! Effect executor.
//!
//! [`pre_validate`] checks every effect precondition up front so that a request
//! is rejected before the ledger runs. [`apply`] then resolves the effect on one
//! affected participant and returns its log events.

use crate::ability::{Ability, DiceExpr, EffectKind};
use crate::action::{AbilityError, LogEvent, TargetSpec};
use crate::env::RngOracle;
use crate::resonance::{ResonanceError, SummonedZone};
use crate::state::{Participant, ParticipantId, SessionState};
use crate::stats::{Attribute, ResourceKind, apply_delta};

use super::context::EffectContext;
use super::ledger;

fn dice_of(ability: &Ability) -> Result<DiceExpr, AbilityError> {
    ability.dice.ok_or_else(|| {
        AbilityError::RequirementUnmet(format!("{} has no dice expression", ability.name))
    })
}

pub(super) fn pre_validate(
    state: &SessionState,
    actor: &Participant,
    ability: &Ability,
    target: &TargetSpec,
) -> Result<(), AbilityError> {
    match ability.effect {
        EffectKind::Damage | EffectKind::Heal => dice_of(ability).map(|_| ()),
        EffectKind::Teleport => {
            let destination = target.position.ok_or_else(|| {
                AbilityError::InvalidTarget("teleport requires a destination".to_string())
            })?;
            let origin = actor.position.ok_or_else(|| {
                AbilityError::InvalidTarget(format!("{} is not on the grid", actor.name))
            })?;
            let distance = origin.distance(destination);
            if ability.defers_payment() && distance > actor.economy.movement {
                return Err(AbilityError::InsufficientResource {
                    resource: ResourceKind::Movement,
                    need: distance,
                    have: actor.economy.movement,
                });
            }
            if !ability.defers_payment() && distance > ability.range {
                return Err(AbilityError::OutOfRange {
                    distance,
                    max: ability.range,
                });
            }
            Ok(())
        }
        EffectKind::Status => ability.status.as_ref().map(|_| ()).ok_or_else(|| {
            AbilityError::RequirementUnmet(format!("{} has no status to apply", ability.name))
        }),
        EffectKind::SummonResonance => {
            if actor.affinity.attunement.is_none() {
                return Err(ResonanceError::NotAttuned {
                    name: actor.name.clone(),
                }
                .into());
            }
            if let Some(zone) = state.resonance.active_zone() {
                return Err(ResonanceError::ZoneAlreadyActive {
                    pole: zone.pole,
                    rounds_remaining: zone.rounds_remaining,
                }
                .into());
            }
            if actor.position.is_none() {
                return Err(AbilityError::InvalidTarget(format!(
                    "{} is not on the grid",
                    actor.name
                )));
            }
            Ok(())
        }
    }
}

pub(super) fn apply<R>(
    ctx: &mut EffectContext<'_, R>,
    target: ParticipantId,
) -> Result<Vec<LogEvent>, AbilityError>
where
    R: RngOracle + ?Sized,
{
    match ctx.ability.effect {
        EffectKind::Damage => apply_damage(ctx, target),
        EffectKind::Heal => apply_heal(ctx, target).map(|event| vec![event]),
        EffectKind::Teleport => apply_teleport(ctx).map(|event| vec![event]),
        EffectKind::Status => apply_status(ctx, target).map(|event| vec![event]),
        EffectKind::SummonResonance => apply_summon(ctx).map(|event| vec![event]),
    }
}

fn target_mut<'s>(
    state: &'s mut SessionState,
    id: ParticipantId,
) -> Result<&'s mut Participant, AbilityError> {
    state
        .participant_mut(id)
        .ok_or_else(|| AbilityError::NotFound(format!("participant {id}")))
}

fn attribute_modifier(actor: &Participant, attribute: Option<Attribute>) -> i32 {
    attribute.map_or(0, |attribute| actor.modifier(attribute))
}

fn apply_damage<R>(
    ctx: &mut EffectContext<'_, R>,
    target_id: ParticipantId,
) -> Result<Vec<LogEvent>, AbilityError>
where
    R: RngOracle + ?Sized,
{
    let ability = ctx.ability;
    let actor = ctx.actor;
    let dice = dice_of(ability)?;

    let resonance_delta = ability.resource().map_or(0, |resource| {
        ctx.resonance
            .roll_modifier(resource, &ctx.rules.resonance)
    });
    let modifier = attribute_modifier(actor, ability.to_hit) + resonance_delta;
    let roll = ctx.rolls.die(ctx.rules.check_die);
    let total = roll as i32 + modifier;

    let evasion_base = ctx.rules.evasion_base;
    let target = target_mut(ctx.state, target_id)?;
    let threshold = evasion_base + target.modifier(Attribute::Agility);

    if total < threshold {
        tracing::debug!(
            "{} missed {} with {} ({} vs {})",
            actor.name,
            target.name,
            ability.name,
            total,
            threshold
        );
        return Ok(vec![LogEvent::AttackMiss {
            actor: actor.name.clone(),
            target: target.name.clone(),
            ability: ability.name.clone(),
            roll,
            modifier,
            total,
            threshold,
        }]);
    }

    let damage = apply_delta(
        ctx.rolls.dice(dice),
        attribute_modifier(actor, ability.effect_attribute),
    );
    // Re-borrow: rolling needed the context mutably.
    let target = target_mut(ctx.state, target_id)?;
    target.take_damage(damage);
    tracing::debug!(
        "{} hit {} with {} for {} ({} vitality left)",
        actor.name,
        target.name,
        ability.name,
        damage,
        target.vitality.current
    );

    let mut events = vec![LogEvent::AttackHit {
        actor: actor.name.clone(),
        target: target.name.clone(),
        ability: ability.name.clone(),
        roll,
        modifier,
        total,
        threshold,
        damage,
    }];
    if let Some(status) = &ability.status {
        target.add_condition(status);
        events.push(LogEvent::StatusApplied {
            actor: actor.name.clone(),
            target: target.name.clone(),
            ability: ability.name.clone(),
            status: status.clone(),
        });
    }
    Ok(events)
}

fn apply_heal<R>(
    ctx: &mut EffectContext<'_, R>,
    target_id: ParticipantId,
) -> Result<LogEvent, AbilityError>
where
    R: RngOracle + ?Sized,
{
    let ability = ctx.ability;
    let actor = ctx.actor;
    let amount = apply_delta(
        ctx.rolls.dice(dice_of(ability)?),
        attribute_modifier(actor, ability.effect_attribute),
    );

    let target = target_mut(ctx.state, target_id)?;
    let healing = target.heal(amount);
    Ok(LogEvent::Heal {
        actor: actor.name.clone(),
        target: target.name.clone(),
        ability: ability.name.clone(),
        healing,
    })
}

/// Moves the actor to the requested point. Only the actor is ever affected.
fn apply_teleport<R>(ctx: &mut EffectContext<'_, R>) -> Result<LogEvent, AbilityError>
where
    R: RngOracle + ?Sized,
{
    let ability = ctx.ability;
    let destination = ctx.target.position.ok_or_else(|| {
        AbilityError::InvalidTarget("teleport requires a destination".to_string())
    })?;

    let actor = target_mut(ctx.state, ctx.actor.id)?;
    let origin = actor.position.ok_or_else(|| {
        AbilityError::InvalidTarget(format!("{} is not on the grid", actor.name))
    })?;
    let distance = origin.distance(destination);

    if ability.defers_payment() {
        ledger::charge_movement(actor, ability.action_type, distance);
    }
    actor.position = Some(destination);
    if let Some(status) = &ability.status {
        actor.add_condition(status);
    }
    tracing::debug!(
        "{} moved {} -> {} ({} squares)",
        actor.name,
        origin,
        destination,
        distance
    );

    Ok(LogEvent::Teleport {
        actor: actor.name.clone(),
        ability: ability.name.clone(),
        from: origin,
        to: destination,
        distance,
        status: ability.status.clone(),
    })
}

fn apply_status<R>(
    ctx: &mut EffectContext<'_, R>,
    target_id: ParticipantId,
) -> Result<LogEvent, AbilityError>
where
    R: RngOracle + ?Sized,
{
    let ability = ctx.ability;
    let status = ability.status.clone().ok_or_else(|| {
        AbilityError::RequirementUnmet(format!("{} has no status to apply", ability.name))
    })?;

    let target = target_mut(ctx.state, target_id)?;
    target.add_condition(&status);
    Ok(LogEvent::StatusApplied {
        actor: ctx.actor.name.clone(),
        target: target.name.clone(),
        ability: ability.name.clone(),
        status,
    })
}

fn apply_summon<R>(ctx: &mut EffectContext<'_, R>) -> Result<LogEvent, AbilityError>
where
    R: RngOracle + ?Sized,
{
    let actor = ctx.actor;
    let pole = actor
        .affinity
        .attunement
        .ok_or_else(|| ResonanceError::NotAttuned {
            name: actor.name.clone(),
        })?;
    let center = actor.position.ok_or_else(|| {
        AbilityError::InvalidTarget(format!("{} is not on the grid", actor.name))
    })?;

    let enhanced = actor.affinity.has_mastery();
    let magnitude = ctx.rules.resonance.magnitude(enhanced);
    let zone = SummonedZone {
        pole,
        enhanced,
        caster: actor.id,
        center,
        radius: magnitude.radius,
        rounds_remaining: magnitude.duration,
    };
    ctx.state.resonance.summon(zone)?;

    tracing::info!(
        "{} summoned a{} {} resonance for {} rounds",
        actor.name,
        if enhanced { "n enhanced" } else { "" },
        pole,
        zone.rounds_remaining
    );
    Ok(LogEvent::ResonanceSummoned {
        actor: actor.name.clone(),
        ability: ctx.ability.name.clone(),
        pole,
        enhanced,
        radius: zone.radius,
        rounds: zone.rounds_remaining,
    })
}
