//! Ability templates.
//!
//! An [`Ability`] is immutable data loaded from the content catalog. The
//! action pipeline reads it to decide legality, targets, costs and effects.

mod dice;
mod requirement;

pub use dice::{DiceError, DiceExpr};
pub use requirement::Requirement;

use std::fmt;

use strum::{Display, IntoStaticStr};

use crate::stats::{Attribute, ResourceKind};

/// Stable identifier of an ability template.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct AbilityId(pub String);

impl AbilityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AbilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AbilityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Slot of the action economy an ability consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionType {
    Standard,
    Bonus,
    Reaction,
    /// No counter; free movement-paid abilities check remaining movement instead.
    Free,
}

/// Resource payment attached to an ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceCost {
    pub resource: ResourceKind,
    pub amount: u32,
}

impl ResourceCost {
    pub const fn new(resource: ResourceKind, amount: u32) -> Self {
        Self { resource, amount }
    }

    pub const fn stamina(amount: u32) -> Self {
        Self::new(ResourceKind::Stamina, amount)
    }

    pub const fn essence(amount: u32) -> Self {
        Self::new(ResourceKind::Essence, amount)
    }

    pub const fn movement(amount: u32) -> Self {
        Self::new(ResourceKind::Movement, amount)
    }
}

/// What an ability may be aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetKind {
    #[strum(serialize = "self")]
    SelfOnly,
    /// Ground coordinates.
    Point,
    Ally,
    Enemy,
}

/// Effect applied to each affected participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    /// Attack roll against evasion, then damage dice.
    Damage,
    Heal,
    /// Moves the actor to the target point.
    Teleport,
    /// Attaches the ability's status tag.
    Status,
    /// Opens a resonance zone of the actor's attuned pole.
    SummonResonance,
}

/// Immutable ability template.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub id: AbilityId,
    pub name: String,
    pub action_type: ActionType,

    /// `None` for abilities that cost nothing beyond the action slot.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cost: Option<ResourceCost>,

    pub target: TargetKind,
    pub effect: EffectKind,

    /// Maximum distance to the target, in squares.
    #[cfg_attr(feature = "serde", serde(default))]
    pub range: u32,

    /// Area radius around the effective center. Zero means single target.
    #[cfg_attr(feature = "serde", serde(default))]
    pub radius: u32,

    /// Attribute added to the attack roll of damage abilities.
    #[cfg_attr(feature = "serde", serde(default))]
    pub to_hit: Option<Attribute>,

    /// Damage or healing dice.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dice: Option<DiceExpr>,

    /// Attribute added to damage or healing totals.
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect_attribute: Option<Attribute>,

    /// Status tag inflicted by the effect.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub requirements: Vec<Requirement>,
}

impl Ability {
    /// Minimal template; the remaining fields are filled with builders.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        action_type: ActionType,
        target: TargetKind,
        effect: EffectKind,
    ) -> Self {
        Self {
            id: AbilityId::new(id),
            name: name.into(),
            action_type,
            cost: None,
            target,
            effect,
            range: 0,
            radius: 0,
            to_hit: None,
            dice: None,
            effect_attribute: None,
            status: None,
            requirements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: ResourceCost) -> Self {
        self.cost = Some(cost);
        self
    }

    #[must_use]
    pub fn with_range(mut self, range: u32) -> Self {
        self.range = range;
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_to_hit(mut self, attribute: Attribute) -> Self {
        self.to_hit = Some(attribute);
        self
    }

    #[must_use]
    pub fn with_dice(mut self, dice: DiceExpr, attribute: Option<Attribute>) -> Self {
        self.dice = Some(dice);
        self.effect_attribute = attribute;
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    /// Resource kind paid, if any.
    pub fn resource(&self) -> Option<ResourceKind> {
        self.cost.map(|cost| cost.resource)
    }

    /// Teleports paid in movement settle their whole cost after the move.
    pub fn defers_payment(&self) -> bool {
        self.effect == EffectKind::Teleport && self.resource() == Some(ResourceKind::Movement)
    }

    /// Effects that resolve once, on the caster, whatever the target area covers.
    pub fn acts_on_caster(&self) -> bool {
        matches!(
            self.effect,
            EffectKind::Teleport | EffectKind::SummonResonance
        )
    }
}
