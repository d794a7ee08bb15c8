#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use vyuha_core::{
    Ability, AbilityId, AbilityOracle, ActionEconomy, ActionType, Attribute, AttributeScores,
    DiceExpr, EffectKind, InventoryOracle, ItemCategory, Participant, ParticipantId, PlayerId,
    Position, Requirement, ResourceCost, SessionId, SessionState, TargetKind,
};

#[derive(Default)]
pub struct Catalog {
    abilities: HashMap<AbilityId, Ability>,
}

impl Catalog {
    pub fn with(mut self, ability: Ability) -> Self {
        self.abilities.insert(ability.id.clone(), ability);
        self
    }
}

impl AbilityOracle for Catalog {
    fn ability(&self, id: &AbilityId) -> Option<&Ability> {
        self.abilities.get(id)
    }
}

#[derive(Default)]
pub struct Armory {
    equipped: HashSet<(ParticipantId, ItemCategory)>,
}

impl Armory {
    pub fn equip(mut self, participant: ParticipantId, category: ItemCategory) -> Self {
        self.equipped.insert((participant, category));
        self
    }
}

impl InventoryOracle for Armory {
    fn has_equipped(&self, participant: ParticipantId, category: ItemCategory) -> bool {
        self.equipped.contains(&(participant, category))
    }
}

pub const HERO: ParticipantId = ParticipantId(1);
pub const SAGE: ParticipantId = ParticipantId(2);
pub const BRUTE: ParticipantId = ParticipantId(3);

pub fn full_turn(movement: u32) -> ActionEconomy {
    ActionEconomy {
        standard: 1,
        bonus: 1,
        reactions: 1,
        movement,
    }
}

/// Hero (agility 14) and Sage on player 1, Brute (agility 12) on player 2.
pub fn skirmish() -> SessionState {
    SessionState::new(SessionId(7), 1234)
        .with_participant(
            Participant::new(HERO, "Arjun", PlayerId(1))
                .at(Position::new(0, 0))
                .with_attributes(AttributeScores::default().with(Attribute::Agility, 14))
                .with_pools(20, 4, 4)
                .with_economy(full_turn(6)),
        )
        .with_participant(
            Participant::new(SAGE, "Mira", PlayerId(1))
                .at(Position::new(1, 0))
                .with_attributes(AttributeScores::default().with(Attribute::Insight, 16))
                .with_pools(12, 2, 6)
                .with_economy(full_turn(6)),
        )
        .with_participant(
            Participant::new(BRUTE, "Raksha", PlayerId(2))
                .at(Position::new(1, 1))
                .with_attributes(AttributeScores::default().with(Attribute::Agility, 12))
                .with_pools(20, 4, 0)
                .with_economy(full_turn(6)),
        )
}

pub fn strike() -> Ability {
    Ability::new(
        "strike",
        "Strike",
        ActionType::Standard,
        TargetKind::Enemy,
        EffectKind::Damage,
    )
    .with_cost(ResourceCost::stamina(1))
    .with_range(1)
    .with_to_hit(Attribute::Agility)
    .with_dice(DiceExpr::new(1, 8), Some(Attribute::Agility))
}

pub fn cleave() -> Ability {
    Ability::new(
        "cleave",
        "Cleave",
        ActionType::Standard,
        TargetKind::Point,
        EffectKind::Damage,
    )
    .with_cost(ResourceCost::stamina(2))
    .with_range(5)
    .with_radius(1)
    .with_to_hit(Attribute::Might)
    .with_dice(DiceExpr::new(1, 6), None)
}

pub fn mend() -> Ability {
    Ability::new("mend", "Mend", ActionType::Bonus, TargetKind::Ally, EffectKind::Heal)
        .with_cost(ResourceCost::essence(2))
        .with_range(3)
        .with_dice(DiceExpr::new(2, 4), Some(Attribute::Insight))
}

pub fn blink() -> Ability {
    Ability::new(
        "blink",
        "Blink",
        ActionType::Bonus,
        TargetKind::Point,
        EffectKind::Teleport,
    )
    .with_cost(ResourceCost::movement(1))
    .with_range(10)
    .with_status("shimmering")
}

pub fn call_of_the_pole() -> Ability {
    Ability::new(
        "call",
        "Call of the Pole",
        ActionType::Standard,
        TargetKind::SelfOnly,
        EffectKind::SummonResonance,
    )
}

pub fn hex() -> Ability {
    Ability::new("hex", "Hex", ActionType::Standard, TargetKind::Enemy, EffectKind::Status)
        .with_range(6)
        .with_status("hexed")
        .with_requirement(Requirement::EquippedItem(ItemCategory::Focus))
}

pub fn catalog() -> Catalog {
    Catalog::default()
        .with(strike())
        .with(cleave())
        .with(mend())
        .with(blink())
        .with(call_of_the_pole())
        .with(hex())
}
