//! Content factory for building oracles from a data directory.

use std::path::{Path, PathBuf};

use vyuha_core::RulesConfig;

use crate::catalog::AbilityCatalog;
use crate::loaders::{AbilityLoader, ConfigLoader, LoadResult, Roster, RosterLoader};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml
/// ├── abilities.ron
/// └── rosters/
///     └── skirmish.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load rules from `rules.toml`.
    pub fn load_rules(&self) -> LoadResult<RulesConfig> {
        ConfigLoader::load(&self.data_dir.join("rules.toml"))
    }

    /// Load the ability catalog from `abilities.ron`.
    pub fn load_abilities(&self) -> LoadResult<AbilityCatalog> {
        AbilityLoader::load(&self.data_dir.join("abilities.ron"))
    }

    /// Load a roster from `rosters/{name}.ron`.
    pub fn load_roster(&self, name: &str) -> LoadResult<Roster> {
        let path = self.data_dir.join("rosters").join(format!("{}.ron", name));
        RosterLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_files_report_their_path() {
        let factory = ContentFactory::new("/nonexistent/vyuha");
        let err = factory.load_rules().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/vyuha/rules.toml"));
    }
}
