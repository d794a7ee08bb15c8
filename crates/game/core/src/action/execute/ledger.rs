//! Resource ledger: action counters and pool payments.

use crate::ability::{Ability, ActionType, ResourceCost};
use crate::config::RulesConfig;
use crate::resonance::Resonance;
use crate::state::Participant;
use crate::stats::ResourceKind;

/// Cost actually owed for an ability under the given resonance.
///
/// Only the body- and spirit-aligned pools are adjusted; movement and vitality
/// costs are paid as listed.
pub(super) fn effective_cost(
    ability: &Ability,
    resonance: &Resonance,
    rules: &RulesConfig,
) -> Option<ResourceCost> {
    let cost = ability.cost?;
    let amount = match cost.resource {
        ResourceKind::Stamina | ResourceKind::Essence => {
            resonance.effective_cost(cost.amount, cost.resource, &rules.resonance)
        }
        ResourceKind::Movement | ResourceKind::Vitality => cost.amount,
    };
    Some(ResourceCost::new(cost.resource, amount))
}

/// Uses up one slot of the action economy.
pub(super) fn spend_action(actor: &mut Participant, action: ActionType) {
    let economy = &mut actor.economy;
    match action {
        ActionType::Standard => economy.standard = economy.standard.saturating_sub(1),
        ActionType::Bonus => economy.bonus = economy.bonus.saturating_sub(1),
        ActionType::Reaction => economy.reactions = economy.reactions.saturating_sub(1),
        ActionType::Free => {}
    }
}

/// Charges the action slot and the resonance-adjusted resource cost.
pub(super) fn charge(
    actor: &mut Participant,
    ability: &Ability,
    resonance: &Resonance,
    rules: &RulesConfig,
) {
    spend_action(actor, ability.action_type);
    if let Some(cost) = effective_cost(ability, resonance, rules) {
        let paid = actor.spend(cost.resource, cost.amount);
        tracing::debug!(
            "{} paid {} {} (owed {})",
            actor.name,
            paid,
            cost.resource,
            cost.amount
        );
    }
}

/// Settles a deferred teleport: the action slot plus the distance travelled.
pub(super) fn charge_movement(actor: &mut Participant, action: ActionType, distance: u32) {
    spend_action(actor, action);
    actor.spend(ResourceKind::Movement, distance);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::{EffectKind, TargetKind};
    use crate::resonance::Pole;
    use crate::state::{ActionEconomy, ParticipantId, ParticipantStatus, PlayerId};

    fn actor() -> Participant {
        Participant::new(ParticipantId(1), "Arjun", PlayerId(1))
            .with_pools(3, 4, 4)
            .with_economy(ActionEconomy {
                standard: 1,
                bonus: 1,
                reactions: 1,
                movement: 6,
            })
    }

    fn ability(cost: ResourceCost) -> Ability {
        Ability::new(
            "x",
            "X",
            ActionType::Standard,
            TargetKind::SelfOnly,
            EffectKind::Status,
        )
        .with_cost(cost)
    }

    #[test]
    fn charges_resonance_adjusted_cost() {
        let mut a = actor();
        let rules = RulesConfig::default();
        charge(
            &mut a,
            &ability(ResourceCost::stamina(3)),
            &Resonance::standard(Pole::Abyssal),
            &rules,
        );
        assert_eq!(a.economy.standard, 0);
        assert_eq!(a.stamina.current, 2);
    }

    #[test]
    fn movement_cost_ignores_resonance() {
        let rules = RulesConfig::default();
        let cost = effective_cost(
            &ability(ResourceCost::movement(2)),
            &Resonance::enhanced(Pole::Abyssal),
            &rules,
        );
        assert_eq!(cost, Some(ResourceCost::movement(2)));
    }

    #[test]
    fn vitality_payment_clamps_and_downs() {
        let mut a = actor();
        charge(
            &mut a,
            &ability(ResourceCost::new(ResourceKind::Vitality, 5)),
            &Resonance::NONE,
            &RulesConfig::default(),
        );
        assert_eq!(a.vitality.current, 0);
        assert_eq!(a.status, ParticipantStatus::Downed);
    }

    #[test]
    fn deferred_teleport_pays_distance() {
        let mut a = actor();
        charge_movement(&mut a, ActionType::Bonus, 4);
        assert_eq!(a.economy.bonus, 0);
        assert_eq!(a.economy.movement, 2);
    }
}
