//! Rules configuration loader.

use std::path::Path;

use vyuha_core::RulesConfig;

use crate::loaders::{LoadResult, read_file};

const EMBEDDED_RULES: &str = include_str!("../../data/rules.toml");

/// Loader for rules configuration from TOML files.
///
/// Omitted keys fall back to [`RulesConfig::default`].
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load rules from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing a `RulesConfig`
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))
    }

    /// Load the rules shipped with this crate.
    pub fn embedded() -> LoadResult<RulesConfig> {
        Self::parse(EMBEDDED_RULES)
    }

    pub fn parse(content: &str) -> LoadResult<RulesConfig> {
        let config: RulesConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;

        if config.check_die == 0 {
            anyhow::bail!("check_die must be at least 1");
        }
        Ok(config)
    }
}
