//! Resource pools.
//!
//! Current values are session state; maximums come from the character sheet.
//! Pools never go negative and never exceed their maximum.

use strum::{Display, IntoStaticStr};

use super::AttributeCategory;

/// Resource kinds an ability may spend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    /// Body-aligned regenerating pool.
    Stamina,
    /// Spirit-aligned regenerating pool.
    Essence,
    /// Per-turn movement budget (grid squares).
    Movement,
    /// Life pool; paying with it is clamped at zero.
    Vitality,
}

impl ResourceKind {
    /// Attribute category this pool is aligned with.
    ///
    /// Only the two regenerating pools are aligned; resonance ignores the rest.
    pub const fn alignment(self) -> Option<AttributeCategory> {
        match self {
            Self::Stamina => Some(AttributeCategory::Body),
            Self::Essence => Some(AttributeCategory::Spirit),
            Self::Movement | Self::Vitality => None,
        }
    }
}

/// Integer resource meter (e.g., vitality, stamina) tracked per participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// A meter filled to its maximum.
    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    /// Removes up to `amount`, clamping at zero. Returns the amount removed.
    pub fn spend(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.current);
        self.current -= removed;
        removed
    }

    /// Adds up to `amount`, clamping at the maximum. Returns the amount added.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let added = amount.min(self.maximum.saturating_sub(self.current));
        self.current += added;
        added
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spend_clamps_at_zero() {
        let mut meter = ResourceMeter::full(5);
        assert_eq!(meter.spend(3), 3);
        assert_eq!(meter.spend(9), 2);
        assert_eq!(meter.current, 0);
        assert!(meter.is_empty());
    }

    #[test]
    fn restore_clamps_at_maximum() {
        let mut meter = ResourceMeter::new(8, 10);
        assert_eq!(meter.restore(7), 2);
        assert_eq!(meter.current, 10);
    }

    #[test]
    fn only_pools_are_aligned() {
        assert_eq!(
            ResourceKind::Stamina.alignment(),
            Some(AttributeCategory::Body)
        );
        assert_eq!(
            ResourceKind::Essence.alignment(),
            Some(AttributeCategory::Spirit)
        );
        assert_eq!(ResourceKind::Movement.alignment(), None);
        assert_eq!(ResourceKind::Vitality.alignment(), None);
    }
}
