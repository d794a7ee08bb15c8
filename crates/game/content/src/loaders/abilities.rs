//! Ability catalog loader.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use vyuha_core::{Ability, EffectKind, TargetKind};

use crate::catalog::AbilityCatalog;
use crate::loaders::{LoadResult, read_file};

const EMBEDDED_ABILITIES: &str = include_str!("../../data/abilities.ron");

/// Ability catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityFile {
    pub abilities: Vec<Ability>,
}

/// Loader for ability catalogs from RON files.
pub struct AbilityLoader;

impl AbilityLoader {
    /// Load an ability catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an `AbilityFile`
    pub fn load(path: &Path) -> LoadResult<AbilityCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    /// Load the catalog embedded in this crate.
    pub fn embedded() -> LoadResult<AbilityCatalog> {
        Self::parse(EMBEDDED_ABILITIES).map_err(|e| anyhow::anyhow!("embedded abilities.ron: {}", e))
    }

    /// Parse and validate RON text.
    pub fn parse(content: &str) -> LoadResult<AbilityCatalog> {
        let file: AbilityFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ability catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for ability in &file.abilities {
            if !seen.insert(ability.id.clone()) {
                anyhow::bail!("duplicate ability id '{}'", ability.id);
            }
            validate(ability)?;
        }

        tracing::debug!("loaded {} abilities", file.abilities.len());
        Ok(file.abilities.into_iter().collect())
    }
}

/// Rejects definitions whose effect could never resolve.
fn validate(ability: &Ability) -> LoadResult<()> {
    match ability.effect {
        EffectKind::Damage | EffectKind::Heal if ability.dice.is_none() => {
            anyhow::bail!(
                "ability '{}' has a {} effect but no dice",
                ability.id,
                ability.effect
            )
        }
        EffectKind::Status if ability.status.is_none() => {
            anyhow::bail!("ability '{}' applies no status", ability.id)
        }
        EffectKind::SummonResonance if ability.target != TargetKind::SelfOnly => {
            anyhow::bail!(
                "ability '{}' summons a resonance but targets {:?} instead of SelfOnly",
                ability.id,
                ability.target
            )
        }
        _ => Ok(()),
    }
}
