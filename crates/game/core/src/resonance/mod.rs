//! Resonance engine.
//!
//! A resonance is a dimensional pull toward one of two opposed poles. Each pole
//! favors one attribute category: abilities paid from the aligned pool become
//! cheaper and more accurate, checks of the aligned category get a bonus, and
//! the opposite category suffers the mirrored penalty. Enhancement scales
//! magnitude (and zone duration/radius) without changing sign.
//!
//! Which resonance affects a participant is decided by [`ResonanceState`], a
//! precedence chain of personal immunity, summoned zone and environmental
//! default.

mod affinity;
mod error;
mod layers;

pub use affinity::{ResonanceAffinity, ResonanceTalent};
pub use error::ResonanceError;
pub use layers::{EffectiveResonance, ResonanceSource, ResonanceState, SummonedZone};

use strum::{Display, EnumIter, IntoStaticStr};

use crate::config::ResonanceTable;
use crate::stats::{AttributeCategory, ResourceKind, apply_delta};

/// One of the two opposed resonance poles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pole {
    /// Favors spirit attributes and the essence pool.
    Celestial,
    /// Favors body attributes and the stamina pool.
    Abyssal,
}

impl Pole {
    /// Attribute category this pole strengthens.
    pub const fn favored(self) -> AttributeCategory {
        match self {
            Self::Celestial => AttributeCategory::Spirit,
            Self::Abyssal => AttributeCategory::Body,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Celestial => Self::Abyssal,
            Self::Abyssal => Self::Celestial,
        }
    }
}

/// A concrete resonance: a pole (or none) and its strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resonance {
    pub pole: Option<Pole>,
    pub enhanced: bool,
}

impl Resonance {
    /// No resonance: every modifier is zero.
    pub const NONE: Self = Self {
        pole: None,
        enhanced: false,
    };

    pub const fn standard(pole: Pole) -> Self {
        Self {
            pole: Some(pole),
            enhanced: false,
        }
    }

    pub const fn enhanced(pole: Pole) -> Self {
        Self {
            pole: Some(pole),
            enhanced: true,
        }
    }

    pub const fn is_none(&self) -> bool {
        self.pole.is_none()
    }

    /// +1 for the favored category, -1 for the opposed one, 0 without a pole.
    fn sign(&self, category: AttributeCategory) -> i32 {
        match self.pole {
            None => 0,
            Some(pole) if pole.favored() == category => 1,
            Some(_) => -1,
        }
    }

    fn resource_sign(&self, resource: ResourceKind) -> i32 {
        resource
            .alignment()
            .map_or(0, |category| self.sign(category))
    }

    /// Shift applied to the base cost of an ability paid from `resource`.
    ///
    /// Negative means cheaper. Zero for pools without a category alignment.
    pub fn cost_modifier(&self, resource: ResourceKind, table: &ResonanceTable) -> i32 {
        -self.resource_sign(resource) * table.magnitude(self.enhanced).cost
    }

    /// Shift applied to attack rolls of abilities paid from `resource`.
    pub fn roll_modifier(&self, resource: ResourceKind, table: &ResonanceTable) -> i32 {
        self.resource_sign(resource) * table.magnitude(self.enhanced).roll
    }

    /// Shift applied to raw attribute checks of the given category.
    pub fn check_modifier(&self, category: AttributeCategory, table: &ResonanceTable) -> i32 {
        self.sign(category) * table.magnitude(self.enhanced).check
    }

    /// Base cost adjusted by [`cost_modifier`](Self::cost_modifier), never below zero.
    pub fn effective_cost(&self, base: u32, resource: ResourceKind, table: &ResonanceTable) -> u32 {
        apply_delta(base, self.cost_modifier(resource, table))
    }
}
