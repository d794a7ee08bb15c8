use crate::config::RulesConfig;
use crate::resonance::ResonanceAffinity;
use crate::stats::{Attribute, AttributeScores, ResourceKind, ResourceMeter};

use super::{ParticipantId, PlayerId, Position};

/// Coarse participant status.
///
/// Narrative statuses ("staggered", "blessed", ...) are kept separately as
/// condition tags; this enum only tracks whether the participant can act.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParticipantStatus {
    #[default]
    Active,
    /// Vitality reached zero. A downed participant cannot act.
    Downed,
}

/// Per-turn action economy.
///
/// Counters never exceed the allotment granted at turn start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionEconomy {
    pub standard: u8,
    pub bonus: u8,
    /// Reaction pool; refilled at combat start only.
    pub reactions: u8,
    /// Remaining movement this turn, in squares.
    pub movement: u32,
}

impl ActionEconomy {
    /// Allotment granted when combat begins (movement is granted per turn).
    pub fn combat_start(rules: &RulesConfig) -> Self {
        Self {
            standard: rules.standard_actions_per_turn,
            bonus: rules.bonus_actions_per_turn,
            reactions: rules.reactions_per_combat,
            movement: 0,
        }
    }
}

/// A character instance inside one session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub owner: PlayerId,

    /// `None` while the participant is off the grid.
    pub position: Option<Position>,

    pub attributes: AttributeScores,
    pub vitality: ResourceMeter,
    pub stamina: ResourceMeter,
    pub essence: ResourceMeter,

    pub economy: ActionEconomy,
    /// Movement budget granted at the start of each of this participant's turns.
    pub movement_speed: u32,

    pub status: ParticipantStatus,
    /// Narrative status tags attached by abilities.
    pub conditions: Vec<String>,

    pub affinity: ResonanceAffinity,

    /// Initiative total rolled for the current combat.
    pub initiative: Option<i32>,
}

impl Participant {
    /// Creates an off-grid participant with default scores and full pools.
    pub fn new(id: ParticipantId, name: impl Into<String>, owner: PlayerId) -> Self {
        Self {
            id,
            name: name.into(),
            owner,
            position: None,
            attributes: AttributeScores::default(),
            vitality: ResourceMeter::full(10),
            stamina: ResourceMeter::full(4),
            essence: ResourceMeter::full(4),
            economy: ActionEconomy::default(),
            movement_speed: 6,
            status: ParticipantStatus::Active,
            conditions: Vec::new(),
            affinity: ResonanceAffinity::default(),
            initiative: None,
        }
    }

    /// Places the participant on the grid (builder pattern).
    #[must_use]
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: AttributeScores) -> Self {
        self.attributes = attributes;
        self
    }

    #[must_use]
    pub fn with_pools(mut self, vitality: u32, stamina: u32, essence: u32) -> Self {
        self.vitality = ResourceMeter::full(vitality);
        self.stamina = ResourceMeter::full(stamina);
        self.essence = ResourceMeter::full(essence);
        self
    }

    #[must_use]
    pub fn with_economy(mut self, economy: ActionEconomy) -> Self {
        self.economy = economy;
        self
    }

    #[must_use]
    pub fn with_movement_speed(mut self, speed: u32) -> Self {
        self.movement_speed = speed;
        self
    }

    #[must_use]
    pub fn with_affinity(mut self, affinity: ResonanceAffinity) -> Self {
        self.affinity = affinity;
        self
    }

    pub fn is_downed(&self) -> bool {
        self.status == ParticipantStatus::Downed
    }

    pub fn is_ally_of(&self, other: &Participant) -> bool {
        self.owner == other.owner
    }

    pub fn modifier(&self, attribute: Attribute) -> i32 {
        self.attributes.modifier(attribute)
    }

    /// Current amount available in a resource pool.
    pub fn available(&self, resource: ResourceKind) -> u32 {
        match resource {
            ResourceKind::Stamina => self.stamina.current,
            ResourceKind::Essence => self.essence.current,
            ResourceKind::Movement => self.economy.movement,
            ResourceKind::Vitality => self.vitality.current,
        }
    }

    /// Removes up to `amount` from a pool, clamping at zero.
    ///
    /// Returns the amount actually removed. Draining vitality to zero downs
    /// the participant.
    pub fn spend(&mut self, resource: ResourceKind, amount: u32) -> u32 {
        match resource {
            ResourceKind::Stamina => self.stamina.spend(amount),
            ResourceKind::Essence => self.essence.spend(amount),
            ResourceKind::Movement => {
                let removed = amount.min(self.economy.movement);
                self.economy.movement -= removed;
                removed
            }
            ResourceKind::Vitality => self.take_damage(amount),
        }
    }

    /// Reduces vitality, clamping at zero. Reaching zero sets `Downed`.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let removed = self.vitality.spend(amount);
        if self.vitality.is_empty() {
            self.status = ParticipantStatus::Downed;
        }
        removed
    }

    /// Restores vitality up to the maximum. Returns the amount restored.
    ///
    /// A downed participant brought above zero stands back up.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let restored = self.vitality.restore(amount);
        if self.is_downed() && !self.vitality.is_empty() {
            self.status = ParticipantStatus::Active;
        }
        restored
    }

    /// Attaches a condition tag unless it is already present.
    pub fn add_condition(&mut self, tag: &str) {
        if !self.conditions.iter().any(|c| c == tag) {
            self.conditions.push(tag.to_string());
        }
    }

    pub fn has_condition(&self, tag: &str) -> bool {
        self.conditions.iter().any(|c| c == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter() -> Participant {
        Participant::new(ParticipantId(1), "Arjun", PlayerId(1)).with_pools(10, 4, 4)
    }

    #[test]
    fn damage_to_exactly_zero_downs() {
        let mut p = fighter();
        assert_eq!(p.take_damage(4), 4);
        assert!(!p.is_downed());
        assert_eq!(p.take_damage(6), 6);
        assert_eq!(p.vitality.current, 0);
        assert!(p.is_downed());
    }

    #[test]
    fn overkill_is_clamped() {
        let mut p = fighter();
        assert_eq!(p.take_damage(25), 10);
        assert_eq!(p.vitality.current, 0);
    }

    #[test]
    fn healing_is_clamped_and_revives() {
        let mut p = fighter();
        p.take_damage(10);
        assert_eq!(p.heal(3), 3);
        assert_eq!(p.status, ParticipantStatus::Active);
        assert_eq!(p.heal(50), 7);
        assert_eq!(p.vitality.current, 10);
    }

    #[test]
    fn movement_spend_never_goes_negative() {
        let mut p = fighter().with_economy(ActionEconomy {
            movement: 2,
            ..ActionEconomy::default()
        });
        assert_eq!(p.spend(ResourceKind::Movement, 5), 2);
        assert_eq!(p.economy.movement, 0);
    }

    #[test]
    fn conditions_are_deduplicated() {
        let mut p = fighter();
        p.add_condition("staggered");
        p.add_condition("staggered");
        assert_eq!(p.conditions.len(), 1);
        assert!(p.has_condition("staggered"));
    }
}
