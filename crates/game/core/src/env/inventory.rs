//! Inventory oracle.
//!
//! Item storage lives outside the rules engine. Requirements only need to ask
//! whether a participant currently has an item of some category equipped.

use strum::{Display, IntoStaticStr};

use crate::state::ParticipantId;

/// Broad item category used by equipment requirements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemCategory {
    Weapon,
    Armor,
    Shield,
    /// Spellcasting focus (staff, amulet, holy symbol).
    Focus,
    Consumable,
}

pub trait InventoryOracle: Send + Sync {
    fn has_equipped(&self, participant: ParticipantId, category: ItemCategory) -> bool;
}

/// Inventory that reports nothing equipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyInventory;

impl InventoryOracle for EmptyInventory {
    fn has_equipped(&self, _: ParticipantId, _: ItemCategory) -> bool {
        false
    }
}
