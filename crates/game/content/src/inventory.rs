//! In-memory equipment store backing the [`InventoryOracle`].

use std::collections::{HashMap, HashSet};

use vyuha_core::{InventoryOracle, ItemCategory, ParticipantId};

/// Equipped item categories per participant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryInventory {
    equipped: HashMap<ParticipantId, HashSet<ItemCategory>>,
}

impl InMemoryInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Equips an item category (builder pattern).
    #[must_use]
    pub fn with_equipped(mut self, participant: ParticipantId, category: ItemCategory) -> Self {
        self.equip(participant, category);
        self
    }

    pub fn equip(&mut self, participant: ParticipantId, category: ItemCategory) {
        self.equipped.entry(participant).or_default().insert(category);
    }

    /// Returns `true` if the category was equipped.
    pub fn unequip(&mut self, participant: ParticipantId, category: ItemCategory) -> bool {
        let Some(items) = self.equipped.get_mut(&participant) else {
            return false;
        };
        let removed = items.remove(&category);
        if items.is_empty() {
            self.equipped.remove(&participant);
        }
        removed
    }

    /// Merges another inventory into this one.
    pub fn extend(&mut self, other: InMemoryInventory) {
        for (participant, items) in other.equipped {
            self.equipped.entry(participant).or_default().extend(items);
        }
    }
}

impl InventoryOracle for InMemoryInventory {
    fn has_equipped(&self, participant: ParticipantId, category: ItemCategory) -> bool {
        self.equipped
            .get(&participant)
            .is_some_and(|items| items.contains(&category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equip_and_unequip() {
        let hero = ParticipantId(1);
        let mut inventory = InMemoryInventory::new().with_equipped(hero, ItemCategory::Focus);
        assert!(inventory.has_equipped(hero, ItemCategory::Focus));
        assert!(!inventory.has_equipped(hero, ItemCategory::Shield));
        assert!(!inventory.has_equipped(ParticipantId(2), ItemCategory::Focus));

        assert!(inventory.unequip(hero, ItemCategory::Focus));
        assert!(!inventory.unequip(hero, ItemCategory::Focus));
        assert_eq!(inventory, InMemoryInventory::new());
    }
}
