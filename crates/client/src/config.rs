//! Simulation configuration read from the environment.
use std::env;
use std::path::PathBuf;

use strum::IntoEnumIterator;
use vyuha_core::{Pole, SessionId};

/// Settings for one scripted skirmish.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub session_id: SessionId,
    /// Session seed. Random unless pinned.
    pub seed: u64,
    /// Rounds to play before combat is called off.
    pub rounds: u32,
    /// Directory holding `rules.toml`, `abilities.ron` and `rosters/`.
    /// Embedded content is used when unset.
    pub data_dir: Option<PathBuf>,
    pub roster: String,
    /// Session snapshots go to disk when set, otherwise stay in memory.
    pub save_dir: Option<PathBuf>,
    pub environment: Option<Pole>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            session_id: SessionId(1),
            seed: 0,
            rounds: 3,
            data_dir: None,
            roster: "skirmish".to_string(),
            save_dir: None,
            environment: None,
        }
    }
}

impl SimConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `VYUHA_SESSION_ID` - Session id (default: 1)
    /// - `VYUHA_SEED` - Session seed (default: random)
    /// - `VYUHA_ROUNDS` - Rounds to play (default: 3, minimum 1)
    /// - `VYUHA_DATA_DIR` - Content directory (default: embedded content)
    /// - `VYUHA_ROSTER` - Roster name under `rosters/` (default: skirmish)
    /// - `VYUHA_SAVE_DIR` - Snapshot directory (default: in-memory)
    /// - `VYUHA_ENVIRONMENT` - `celestial` or `abyssal` (default: none)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Self {
            seed: parse_value(read("VYUHA_SEED")).unwrap_or_else(rand::random),
            ..Self::default()
        };

        if let Some(id) = parse_value(read("VYUHA_SESSION_ID")) {
            config.session_id = SessionId(id);
        }
        if let Some(rounds) = parse_value::<u32>(read("VYUHA_ROUNDS")) {
            config.rounds = rounds.max(1);
        }
        config.data_dir = read("VYUHA_DATA_DIR").map(PathBuf::from);
        if let Some(roster) = read("VYUHA_ROSTER") {
            config.roster = roster;
        }
        config.save_dir = read("VYUHA_SAVE_DIR").map(PathBuf::from);
        config.environment = read("VYUHA_ENVIRONMENT").and_then(|value| parse_pole(&value));

        config
    }
}

/// Case-insensitive pole name.
pub fn parse_pole(value: &str) -> Option<Pole> {
    let value = value.trim().to_ascii_lowercase();
    Pole::iter().find(|pole| <&'static str>::from(*pole) == value)
}

fn parse_value<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pole_names_parse_loosely() {
        assert_eq!(parse_pole("Abyssal"), Some(Pole::Abyssal));
        assert_eq!(parse_pole(" celestial "), Some(Pole::Celestial));
        assert_eq!(parse_pole("void"), None);
    }

    #[test]
    fn lookup_accepts_wide_session_ids() {
        let vars = std::collections::HashMap::from([
            ("VYUHA_SESSION_ID", "4294967296"),
            ("VYUHA_SEED", "9"),
            ("VYUHA_ROUNDS", "0"),
            ("VYUHA_ENVIRONMENT", "Celestial"),
        ]);
        let config = SimConfig::from_lookup(|key| vars.get(key).map(|value| value.to_string()));

        assert_eq!(config.session_id, SessionId(4_294_967_296));
        assert_eq!(config.seed, 9);
        assert_eq!(config.rounds, 1);
        assert_eq!(config.environment, Some(Pole::Celestial));
        assert_eq!(config.roster, "skirmish");
        assert!(config.save_dir.is_none());
    }
}
