//! Ability validation.
//!
//! Checks run in a fixed order and fail fast:
//!
//! 1. the actor is not downed
//! 2. the action economy slot is available
//! 3. the (resonance-adjusted) resource cost is affordable
//! 4. custom requirements hold
//!
//! Nothing here mutates state.

use crate::ability::{Ability, ActionType};
use crate::action::AbilityError;
use crate::config::RulesConfig;
use crate::env::InventoryOracle;
use crate::resonance::Resonance;
use crate::state::Participant;
use crate::stats::ResourceKind;

use super::ledger::effective_cost;

pub(super) fn validate<I>(
    actor: &Participant,
    ability: &Ability,
    resonance: &Resonance,
    rules: &RulesConfig,
    inventory: &I,
) -> Result<(), AbilityError>
where
    I: InventoryOracle + ?Sized,
{
    check_status(actor)?;
    check_action_economy(actor, ability)?;
    check_resources(actor, ability, resonance, rules)?;
    check_requirements(actor, ability, inventory)
}

fn check_status(actor: &Participant) -> Result<(), AbilityError> {
    if actor.is_downed() {
        return Err(AbilityError::ActorIncapacitated {
            name: actor.name.clone(),
        });
    }
    Ok(())
}

fn check_action_economy(actor: &Participant, ability: &Ability) -> Result<(), AbilityError> {
    let remaining = match ability.action_type {
        ActionType::Standard => actor.economy.standard,
        ActionType::Bonus => actor.economy.bonus,
        ActionType::Reaction => actor.economy.reactions,
        ActionType::Free => {
            // Free movement-paid abilities are gated by remaining movement instead.
            return match ability.cost {
                Some(cost)
                    if cost.resource == ResourceKind::Movement
                        && actor.economy.movement < cost.amount =>
                {
                    Err(AbilityError::InsufficientResource {
                        resource: ResourceKind::Movement,
                        need: cost.amount,
                        have: actor.economy.movement,
                    })
                }
                _ => Ok(()),
            };
        }
    };

    if remaining < 1 {
        return Err(AbilityError::ActionEconomyExhausted {
            action: ability.action_type,
            remaining,
        });
    }
    Ok(())
}

fn check_resources(
    actor: &Participant,
    ability: &Ability,
    resonance: &Resonance,
    rules: &RulesConfig,
) -> Result<(), AbilityError> {
    let Some(cost) = effective_cost(ability, resonance, rules) else {
        return Ok(());
    };

    let have = actor.available(cost.resource);
    let need = match cost.resource {
        ResourceKind::Stamina | ResourceKind::Essence => cost.amount,
        // Exact distance is checked when the move resolves.
        ResourceKind::Movement => 1,
        // Paid from vitality with clamping; never blocks.
        ResourceKind::Vitality => 0,
    };

    if have < need {
        return Err(AbilityError::InsufficientResource {
            resource: cost.resource,
            need,
            have,
        });
    }
    Ok(())
}

fn check_requirements<I>(
    actor: &Participant,
    ability: &Ability,
    inventory: &I,
) -> Result<(), AbilityError>
where
    I: InventoryOracle + ?Sized,
{
    ability
        .requirements
        .iter()
        .try_for_each(|requirement| requirement.evaluate(actor, inventory))
}
