//! Ability catalog backing the [`AbilityOracle`].

use std::collections::HashMap;

use vyuha_core::{Ability, AbilityId, AbilityOracle};

/// Abilities keyed by id.
#[derive(Clone, Debug, Default)]
pub struct AbilityCatalog {
    abilities: HashMap<AbilityId, Ability>,
}

impl AbilityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the catalog shipped with this crate.
    #[cfg(feature = "loaders")]
    pub fn embedded() -> crate::LoadResult<Self> {
        crate::AbilityLoader::embedded()
    }

    /// Adds an ability, returning the definition it replaced.
    pub fn insert(&mut self, ability: Ability) -> Option<Ability> {
        self.abilities.insert(ability.id.clone(), ability)
    }

    pub fn get(&self, id: &AbilityId) -> Option<&Ability> {
        self.abilities.get(id)
    }

    pub fn contains(&self, id: &AbilityId) -> bool {
        self.abilities.contains_key(id)
    }

    /// Ability ids in lexical order.
    pub fn ids(&self) -> Vec<&AbilityId> {
        let mut ids: Vec<_> = self.abilities.keys().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }
}

impl FromIterator<Ability> for AbilityCatalog {
    fn from_iter<T: IntoIterator<Item = Ability>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for ability in iter {
            catalog.insert(ability);
        }
        catalog
    }
}

impl AbilityOracle for AbilityCatalog {
    fn ability(&self, id: &AbilityId) -> Option<&Ability> {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vyuha_core::{ActionType, EffectKind, TargetKind};

    fn ability(id: &str, name: &str) -> Ability {
        Ability::new(id, name, ActionType::Standard, TargetKind::Enemy, EffectKind::Status)
    }

    #[test]
    fn later_definitions_replace_earlier_ones() {
        let catalog: AbilityCatalog = [ability("hex", "Hex"), ability("hex", "Greater Hex")]
            .into_iter()
            .collect();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.ability(&AbilityId::from("hex")).map(|a| a.name.as_str()),
            Some("Greater Hex")
        );
    }

    #[test]
    fn ids_are_sorted() {
        let catalog: AbilityCatalog = [ability("ward", "Ward"), ability("bolt", "Bolt")]
            .into_iter()
            .collect();
        let ids: Vec<&str> = catalog.ids().into_iter().map(AbilityId::as_str).collect();
        assert_eq!(ids, ["bolt", "ward"]);
    }
}
